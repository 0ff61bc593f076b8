//! clock.rs
//! Injected calendar-date source for encryption-key rotation.
//!
//! The cipher engine never reads wall-clock time directly; it asks a `Clock`
//! for the current date. That keeps date-boundary behavior deterministic in
//! tests and lets embedders pin a zone if both sides of a wire exchange
//! must agree across time zones.

use crate::constants::DATE_FORMAT;
use chrono::Local;

/// Source of the current local calendar date, formatted `YYYYMMDD`.
pub trait Clock: Send + Sync {
    fn today(&self) -> String;
}

/// Production clock: local-zone wall time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> String {
        Local::now().format(DATE_FORMAT).to_string()
    }
}

/// Fixed date source for deterministic tests (date rollovers, wire vectors).
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn today(&self) -> String {
        self.0.clone()
    }
}
