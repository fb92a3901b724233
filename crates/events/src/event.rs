use chrono::{DateTime, Utc};

/// Something that happened to stock during a run.
///
/// The journal takes its timestamps from `occurred_at`; log lines carry the
/// `label` so changes can be traced back to a named, versioned event.
pub trait Event: core::fmt::Debug {
    /// Stable dotted name, e.g. `inventory.stock.added`.
    fn event_type(&self) -> &'static str;

    fn version(&self) -> u32;

    fn occurred_at(&self) -> DateTime<Utc>;

    /// `event_type` with its version, e.g. `inventory.stock.added/v1`.
    fn label(&self) -> String {
        format!("{}/v{}", self.event_type(), self.version())
    }
}
