use std::io;

use stockroom_infra::{AppConfig, JsonFileStore};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = AppConfig::default();
    let store = JsonFileStore::new(config.data_path.clone());

    let stdout = io::stdout();
    stockroom_cli::demo::run(&store, &config, &mut stdout.lock())?;
    Ok(())
}
