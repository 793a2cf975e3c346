//! Timing helper for instrumenting operations
//!
//! A `Chronometer` is started with a label, can record named laps, and logs
//! the elapsed time when stopped.

use std::time::{Duration, Instant};
use log::{debug, info};

/// Wall-clock timer with named laps
pub struct Chronometer {
    label: String,
    started: Instant,
    last_lap: Instant,
    laps: Vec<(String, Duration)>,
}

impl Chronometer {
    /// Start timing an operation
    pub fn start(label: &str) -> Self {
        let now = Instant::now();
        debug!("{}: started", label);
        Chronometer {
            label: label.to_string(),
            started: now,
            last_lap: now,
            laps: Vec::new(),
        }
    }

    /// Record the time since the previous lap (or since start)
    pub fn lap(&mut self, name: &str) -> Duration {
        let now = Instant::now();
        let split = now.duration_since(self.last_lap);
        self.last_lap = now;
        debug!("{}: {} took {:?}", self.label, name, split);
        self.laps.push((name.to_string(), split));
        split
    }

    /// Time elapsed since start
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Laps recorded so far
    pub fn laps(&self) -> &[(String, Duration)] {
        &self.laps
    }

    /// Stop the chronometer, log and return the total elapsed time
    pub fn stop(self) -> Duration {
        let total = self.elapsed();
        info!("{} finished in {:?} ({} laps)", self.label, total, self.laps.len());
        total
    }
}
