//! Data layer: immutable transport configuration.

use std::time::Duration;

/// Connection and read deadlines applied by stock clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    pub read:    Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(30),
            read:    Duration::from_secs(30),
        }
    }
}
