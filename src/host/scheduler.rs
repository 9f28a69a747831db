use super::{DisplaySurface, Host};
use crate::errors::AppResult;
use crate::source::EventSource;
use crate::utils::time::TimeFormatter;
use chrono::{DateTime, Local};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub interval: Duration,
    /// Stop after this many refreshes (the initial one included); `None` runs forever.
    pub max_ticks: Option<u64>,
}

impl Schedule {
    pub fn every_secs(secs: u64) -> Self {
        Self {
            interval: Duration::from_secs(secs),
            max_ticks: None,
        }
    }
}

/// Start the host, then refresh every `schedule.interval`.
///
/// A failing refresh leaves the previous display in place and is retried on
/// the next tick. Returns the number of refreshes performed; zero when
/// access was not granted.
pub fn run_loop<S, F, D, C, Z>(
    host: &mut Host<S, F, D>,
    schedule: &Schedule,
    mut clock: C,
    mut sleep: Z,
) -> AppResult<u64>
where
    S: EventSource,
    F: TimeFormatter,
    D: DisplaySurface,
    C: FnMut() -> DateTime<Local>,
    Z: FnMut(Duration),
{
    if !host.start(clock())?.is_granted() {
        return Ok(0);
    }

    let mut ticks: u64 = 1;
    loop {
        if schedule.max_ticks.is_some_and(|max| ticks >= max) {
            return Ok(ticks);
        }

        sleep(schedule.interval);

        if let Err(e) = host.tick(clock()) {
            log::error!("refresh failed, keeping previous display: {}", e);
        }
        ticks += 1;
    }
}
