use std::fmt;

/// Seconds left until `end_time`, never negative.
pub fn remaining(end_time: u64, now: u64) -> u64 {
    end_time.saturating_sub(now)
}

/// Display state of the ticking clock. `Ended` is terminal for a given
/// end time since `remaining` only shrinks as `now` advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Running(u64),
    Ended,
}

impl Countdown {
    pub fn at(end_time: u64, now: u64) -> Countdown {
        match remaining(end_time, now) {
            0 => Countdown::Ended,
            secs => Countdown::Running(secs),
        }
    }
}

/// `HH:MM:SS`, zero-padded, hours unbounded.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Running(secs) => write!(f, "{}", format_clock(*secs)),
            Countdown::Ended => write!(f, "Ended"),
        }
    }
}
