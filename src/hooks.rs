use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use speaker_roulette::{
    Countdown, LocalStore, Participant, Roster, RosterError, Roulette, Settings,
    SettingsManager, TickOutcome, TimerStatus,
};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

use crate::config::{SHUFFLE_DELAY_MS, TICK_MS};

pub enum CountdownAction {
    Start,
    Pause,
    Reset,
    Tick,
    SetDuration(u32),
}

/// Reducer state wrapping the library countdown.
#[derive(Clone, PartialEq, Default)]
pub struct CountdownState {
    pub countdown: Countdown,
}

impl Reducible for CountdownState {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut countdown = self.countdown;
        match action {
            CountdownAction::Start => {
                countdown.start();
            }
            CountdownAction::Pause => {
                countdown.pause();
            }
            CountdownAction::Reset => countdown.reset(),
            CountdownAction::Tick => {
                if countdown.tick() == TickOutcome::Finished {
                    log::info!("Speaking time is up");
                }
            }
            CountdownAction::SetDuration(seconds) => countdown.set_duration(seconds),
        }

        if countdown == self.countdown {
            self
        } else {
            Rc::new(Self { countdown })
        }
    }
}

/// Holds the countdown plus the callbacks that drive it.
#[derive(Clone)]
pub struct UseCountdownHandle {
    pub countdown: Countdown,
    pub start: Callback<()>,
    pub pause: Callback<()>,
    pub reset: Callback<()>,
}

/// Countdown driven by a one-second interval while it is running.
///
/// The interval only exists while the status is `Running`; leaving that
/// status (pause, reset, finish) or unmounting drops it. `on_finish` is
/// emitted when the status changes to `Finished`.
#[hook]
pub fn use_countdown(duration: u32, on_finish: Callback<()>) -> UseCountdownHandle {
    let state = use_reducer(|| CountdownState {
        countdown: Countdown::new(duration),
    });

    // Follow the configured duration
    {
        let dispatcher = state.dispatcher();
        use_effect_with(duration, move |&seconds| {
            dispatcher.dispatch(CountdownAction::SetDuration(seconds));
        });
    }

    // Tick once a second while running
    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.countdown.is_running(), move |&running| {
            let interval = running.then(|| {
                Interval::new(TICK_MS, move || dispatcher.dispatch(CountdownAction::Tick))
            });
            move || drop(interval)
        });
    }

    // Entering Finished is the completion event
    use_effect_with(state.countdown.status(), move |&status| {
        if status == TimerStatus::Finished {
            on_finish.emit(());
        }
    });

    let action = |make: fn() -> CountdownAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(make()))
    };

    UseCountdownHandle {
        countdown: state.countdown,
        start: action(|| CountdownAction::Start),
        pause: action(|| CountdownAction::Pause),
        reset: action(|| CountdownAction::Reset),
    }
}

/// Shared access to the persisted roster; every mutation re-renders the
/// calling component.
#[derive(Clone)]
pub struct UseRosterHandle {
    roster: Rc<RefCell<Roster<LocalStore>>>,
    update: UseForceUpdateHandle,
}

impl UseRosterHandle {
    pub fn participants(&self) -> Rc<Vec<Participant>> {
        Rc::new(self.roster.borrow().participants().to_vec())
    }

    pub fn add(&self, name: &str) -> Result<(), RosterError> {
        let result = self.roster.borrow_mut().add(name).map(|_| ());
        if result.is_ok() {
            self.update.force_update();
        }
        result
    }

    pub fn remove(&self, id: &str) {
        self.roster.borrow_mut().remove(id);
        self.update.force_update();
    }

    pub fn clear(&self) {
        self.roster.borrow_mut().clear();
        self.update.force_update();
    }
}

#[hook]
pub fn use_roster() -> UseRosterHandle {
    let roster = use_mut_ref(|| Roster::load(LocalStore));
    let update = use_force_update();
    UseRosterHandle { roster, update }
}

#[derive(Clone)]
pub struct UseSettingsHandle {
    manager: Rc<RefCell<SettingsManager<LocalStore>>>,
    update: UseForceUpdateHandle,
}

impl UseSettingsHandle {
    pub fn settings(&self) -> Settings {
        self.manager.borrow().settings()
    }

    pub fn update_duration(&self, seconds: u32) {
        if self.manager.borrow_mut().update(seconds) {
            self.update.force_update();
        }
    }

    pub fn reset_to_defaults(&self) {
        self.manager.borrow_mut().reset_to_defaults();
        self.update.force_update();
    }
}

#[hook]
pub fn use_settings() -> UseSettingsHandle {
    let manager = use_mut_ref(|| SettingsManager::load(LocalStore));
    let update = use_force_update();
    UseSettingsHandle { manager, update }
}

pub enum RouletteAction {
    Begin(usize),
    Complete(Rc<Vec<Participant>>),
    Next,
    Previous,
}

#[derive(Clone, PartialEq, Default)]
pub struct RouletteState {
    pub roulette: Roulette,
}

impl Reducible for RouletteState {
    type Action = RouletteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut roulette = self.roulette.clone();
        let changed = match action {
            RouletteAction::Begin(roster_len) => roulette.begin_shuffle(roster_len),
            // only the shuffle that set the spinner may finish it
            RouletteAction::Complete(snapshot) if roulette.is_spinning() => {
                roulette.complete_shuffle(&snapshot, &mut rand::rng());
                true
            }
            RouletteAction::Complete(_) => false,
            RouletteAction::Next => roulette.next(),
            RouletteAction::Previous => roulette.previous(),
        };

        if changed {
            Rc::new(Self { roulette })
        } else {
            self
        }
    }
}

#[derive(Clone)]
pub struct UseRouletteHandle {
    pub roulette: Roulette,
    pub shuffle: Callback<Rc<Vec<Participant>>>,
    pub next: Callback<()>,
    pub previous: Callback<()>,
}

/// Roulette whose shuffle reveals its result after a short spin.
#[hook]
pub fn use_roulette() -> UseRouletteHandle {
    let state = use_reducer(RouletteState::default);

    let shuffle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |snapshot: Rc<Vec<Participant>>| {
            if snapshot.is_empty() {
                return;
            }
            dispatcher.dispatch(RouletteAction::Begin(snapshot.len()));
            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(SHUFFLE_DELAY_MS).await;
                dispatcher.dispatch(RouletteAction::Complete(snapshot));
            });
        })
    };
    let next = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(RouletteAction::Next))
    };
    let previous = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(RouletteAction::Previous))
    };

    UseRouletteHandle {
        roulette: state.roulette.clone(),
        shuffle,
        next,
        previous,
    }
}
