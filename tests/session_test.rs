//! End-to-end run of a retrospective session against an in-memory store.

use rand::rngs::StdRng;
use rand::SeedableRng;
use speaker_roulette::defaults::{MEMBERS_KEY, SETTINGS_KEY};
use speaker_roulette::{
    Countdown, MemoryStore, Roster, RosterError, Roulette, SettingsManager, TickOutcome,
    TimerStatus,
};
use std::rc::Rc;

#[test]
fn test_roster_and_settings_survive_a_reload() {
    let store = Rc::new(MemoryStore::new());
    {
        let mut roster = Roster::load(store.clone());
        roster.add("Alice").unwrap();
        roster.add("Bob").unwrap();

        let mut settings = SettingsManager::load(store.clone());
        assert!(settings.update(300));
    }

    let roster = Roster::load(store.clone());
    let names: Vec<_> = roster.participants().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob"]);
    assert_eq!(SettingsManager::load(store).settings().timer_duration, 300);
}

#[test]
fn test_corrupted_storage_starts_a_clean_session() {
    let store = MemoryStore::new()
        .with_entry(MEMBERS_KEY, "{not json")
        .with_entry(SETTINGS_KEY, "[]");
    let store = Rc::new(store);

    let mut roster = Roster::load(store.clone());
    assert!(roster.is_empty());
    assert_eq!(SettingsManager::load(store.clone()).settings().timer_duration, 180);

    // the next write replaces the corrupt value
    roster.add("Alice").unwrap();
    assert_eq!(Roster::load(store).len(), 1);
}

#[test]
fn test_full_speaking_round() {
    let store = Rc::new(MemoryStore::new());
    let mut roster = Roster::load(store.clone());
    for name in ["Alice", "Bob", "Carol"] {
        roster.add(name).unwrap();
    }
    assert_eq!(roster.add("Bob").unwrap_err(), RosterError::Duplicate);

    let mut settings = SettingsManager::load(store);
    settings.update(3);

    let mut roulette = Roulette::new();
    roulette.shuffle(roster.participants(), &mut StdRng::seed_from_u64(3));

    // roster changes after the shuffle do not touch the order
    roster.add("Dave").unwrap();
    assert_eq!(roulette.order().len(), 3);

    let mut countdown = Countdown::new(settings.settings().timer_duration);
    let mut spoken = Vec::new();
    loop {
        let speaker = roulette.current().unwrap().name.clone();
        countdown.reset();
        countdown.start();

        let finishes = (0..10)
            .map(|_| countdown.tick())
            .filter(|outcome| *outcome == TickOutcome::Finished)
            .count();
        assert_eq!(finishes, 1);
        assert_eq!(countdown.status(), TimerStatus::Finished);

        spoken.push(speaker);
        if !roulette.next() {
            break;
        }
    }

    spoken.sort();
    assert_eq!(spoken, ["Alice", "Bob", "Carol"]);
}

#[test]
fn test_settings_change_reaches_an_idle_timer_only() {
    let store = Rc::new(MemoryStore::new());
    let mut settings = SettingsManager::load(store);
    let mut countdown = Countdown::new(settings.settings().timer_duration);

    settings.update(10);
    countdown.set_duration(settings.settings().timer_duration);
    assert_eq!(countdown.time_left(), 10);
    assert_eq!(countdown.progress(), 1.0);

    countdown.start();
    countdown.tick();
    settings.update(60);
    countdown.set_duration(settings.settings().timer_duration);
    assert_eq!(countdown.time_left(), 9);

    // ignored update leaves both untouched
    assert!(!settings.update(0));
    assert_eq!(settings.settings().timer_duration, 60);
}
