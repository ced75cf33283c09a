// Snapshot document I/O

pub mod bootstrap;
pub mod error;
pub mod snapshot;
