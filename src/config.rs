//! Application-level configuration constants.

use log::LevelFilter;

// Timing
pub const TICK_MS: u32 = 1_000;
pub const SHUFFLE_DELAY_MS: u32 = 1_000;

// Notification shown when a speaker's time runs out
pub const NOTIFICATION_TITLE: &str = "Speaker Roulette";
pub const NOTIFICATION_BODY: &str = "Speaking time is up!";
pub const NOTIFICATION_ICON: &str = "favicon.svg";

// Settings form
pub const DURATION_PRESETS: [(&str, u32); 5] = [
    ("1 min", 60),
    ("2 min", 120),
    ("3 min", 180),
    ("5 min", 300),
    ("10 min", 600),
];
pub const MAX_MINUTES_INPUT: u32 = 60;
pub const MAX_SECONDS_INPUT: u32 = 59;

// Progress ring
pub const RING_RADIUS: f64 = 50.0;
pub const PROGRESS_WARN: f64 = 0.5;
pub const PROGRESS_DANGER: f64 = 0.25;

pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};
