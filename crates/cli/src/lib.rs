//! Single-location inventory demo: library entry point for the `stockroom` binary.

pub mod demo;
