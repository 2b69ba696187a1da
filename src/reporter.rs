use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::process::ProcessIdentity;

/// Fixed label printed before the identifier on every line. The text
/// is Cyrillic, which is why the console encoding is configured before
/// the loop starts.
pub const REPORT_LABEL: &str = "Идентификатор процесса";

/// Number of lines emitted before the program terminates.
pub const REPORT_COUNT: u32 = 125;

/// Delay after each line. Coarse timer resolution; the scheduler may
/// overshoot slightly and no compensation is attempted.
pub const REPORT_INTERVAL: Duration = Duration::from_millis(1000);

// Reporter

/// Emits the process identifier to stdout once per second, a fixed
/// number of times, on the calling thread.
pub struct Reporter {
    identity: ProcessIdentity,
    count: u32,
    interval: Duration,
}

impl Reporter {
    pub fn new(identity: ProcessIdentity) -> Self {
        Reporter {
            identity,
            count: REPORT_COUNT,
            interval: REPORT_INTERVAL,
        }
    }

    /// Run the report loop against stdout. Blocks for roughly
    /// count * interval of wall-clock time, then returns.
    pub fn run(&self) -> Result<(), String> {
        let stdout = io::stdout();
        self.run_to(stdout.lock())
    }

    // The loop itself: print one line, wait one interval, repeat.
    // Generic over the writer so tests can capture the output.
    fn run_to<W: Write>(&self, mut out: W) -> Result<(), String> {
        for _ in 0..self.count {
            writeln!(out, "{}: {}", REPORT_LABEL, self.identity.pid)
                .map_err(|e| format!("Failed to write to stdout: {}", e))?;
            thread::sleep(self.interval);
        }
        Ok(())
    }
}
