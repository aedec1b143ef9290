use rand::Rng;

/// Default values and limits shared by the roster, settings and storage.
pub mod defaults {
    pub const TIMER_DURATION_SECS: u32 = 180;
    pub const MIN_TIMER_DURATION_SECS: u32 = 1;
    pub const MAX_TIMER_DURATION_SECS: u32 = 3600;
    pub const MAX_NAME_LEN: usize = 50;

    pub const MEMBERS_KEY: &str = "speaker-roulette-members";
    pub const SETTINGS_KEY: &str = "speaker-roulette-settings";
}

pub mod countdown;
pub mod roster;
pub mod roulette;
pub mod settings;
pub mod storage;

pub use countdown::{Countdown, TickOutcome, TimerStatus};
pub use roster::{Participant, Roster, RosterError};
pub use roulette::{Roulette, SpeakerState};
pub use settings::{Settings, SettingsManager};
pub use storage::{KeyValueStore, LocalStore, MemoryStore, StorageError};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;

/// Opaque participant id: creation time in milliseconds plus a random
/// base-36 suffix.
pub fn generate_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("{}-{}", chrono::Utc::now().timestamp_millis(), suffix)
}

/// Format seconds as `MM:SS`. Minutes are not capped at 59.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Long form of the remaining time, e.g. `2 min 5 sec`.
pub fn format_remaining(seconds: u32) -> String {
    format!("{} min {} sec", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_pads_and_does_not_cap_minutes() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(60), "01:00");
        assert_eq!(format_time(125), "02:05");
        assert_eq!(format_time(3661), "61:01");
    }

    #[test]
    fn format_remaining_spells_out_units() {
        assert_eq!(format_remaining(125), "2 min 5 sec");
        assert_eq!(format_remaining(0), "0 min 0 sec");
    }

    #[test]
    fn generated_ids_are_distinct_and_well_formed() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);

        let (millis, suffix) = a.split_once('-').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), ID_SUFFIX_LEN);
        assert!(suffix.bytes().all(|c| ID_ALPHABET.contains(&c)));
    }
}
