//! Yew view components for the Speaker Roulette page.
//!
//! The panels render from props and report user intent through callbacks;
//! state lives in the hooks owned by the root component.

use speaker_roulette::{
    format_remaining, format_time, Participant, Roulette, RosterError, Settings, SpeakerState,
    TimerStatus,
};
use std::f64::consts::PI;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{DURATION_PRESETS, MAX_MINUTES_INPUT, MAX_SECONDS_INPUT, RING_RADIUS};
use crate::utils::{progress_class, validate_minutes, validate_seconds, with_minutes, with_seconds};

#[derive(Properties, PartialEq)]
pub struct MemberManagerProps {
    pub participants: Rc<Vec<Participant>>,
    pub on_add: Callback<String, Result<(), RosterError>>,
    pub on_remove: Callback<String>,
    pub on_clear: Callback<()>,
}

/// Name entry form plus the list of registered members.
#[function_component(MemberManager)]
pub fn member_manager(props: &MemberManagerProps) -> Html {
    let name = use_state(String::new);
    let error = use_state(|| None::<String>);

    let oninput = {
        let name = name.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
            if error.is_some() {
                error.set(None);
            }
        })
    };

    let onsubmit = {
        let name = name.clone();
        let error = error.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match on_add.emit((*name).clone()) {
                Ok(()) => {
                    name.set(String::new());
                    error.set(None);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    html! {
        <section class="panel member-manager">
            <h2>{ format!("Members ({})", props.participants.len()) }</h2>

            <form class="member-form" {onsubmit}>
                <input
                    type="text"
                    value={(*name).clone()}
                    placeholder="Enter a member name"
                    maxlength="50"
                    class={if error.is_some() { "invalid" } else { "" }}
                    {oninput}
                />
                <button type="submit" disabled={name.trim().is_empty()}>{ "Add" }</button>
            </form>
            if let Some(ref err) = *error {
                <div class="input-error">{ err }</div>
            }

            if props.participants.is_empty() {
                <div class="empty-message">
                    <p>{ "No members registered yet" }</p>
                    <p class="hint">{ "Add members using the form above" }</p>
                </div>
            } else {
                <>
                <ul class="member-list">
                    { props.participants.iter().map(|member| {
                        let on_remove = props.on_remove.clone();
                        let id = member.id.clone();
                        html! {
                            <li key={member.id.clone()}>
                                <span class="member-name">{ &member.name }</span>
                                <button
                                    class="btn-remove"
                                    aria-label={format!("Remove {}", member.name)}
                                    onclick={Callback::from(move |_| on_remove.emit(id.clone()))}
                                >
                                    { "Remove" }
                                </button>
                            </li>
                        }
                    }).collect::<Html>() }
                </ul>
                <button class="btn-danger" onclick={props.on_clear.reform(|_| ())}>
                    { "Remove all" }
                </button>
                </>
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct RoulettePanelProps {
    pub participants: Rc<Vec<Participant>>,
    pub roulette: Roulette,
    pub on_shuffle: Callback<Rc<Vec<Participant>>>,
    pub on_next: Callback<()>,
    pub on_previous: Callback<()>,
}

/// Shuffle button, current speaker card and the full speaking order.
#[function_component(RoulettePanel)]
pub fn roulette_panel(props: &RoulettePanelProps) -> Html {
    if props.participants.is_empty() {
        return html! {
            <section class="panel roulette">
                <h2>{ "Speaker Roulette" }</h2>
                <div class="empty-message">
                    <p>{ "No members registered yet" }</p>
                    <p class="hint">{ "Add some members first" }</p>
                </div>
            </section>
        };
    }

    let roulette = &props.roulette;
    let onshuffle = {
        let on_shuffle = props.on_shuffle.clone();
        let snapshot = props.participants.clone();
        Callback::from(move |_| on_shuffle.emit(snapshot.clone()))
    };

    html! {
        <section class="panel roulette">
            <h2>{ "Speaker Roulette" }</h2>

            <div class="shuffle-row">
                <button class="btn-shuffle" disabled={roulette.is_spinning()} onclick={onshuffle}>
                    if roulette.is_spinning() {
                        <>
                            <span class="spinner"></span>
                            { "Shuffling..." }
                        </>
                    } else {
                        { "🎲 Spin the roulette" }
                    }
                </button>
            </div>

            if let Some(current) = roulette.current() {
                <>
                <div class="current-speaker">
                    <p class="speaker-position">{ format!("Speaker #{}", roulette.cursor() + 1) }</p>
                    <h3>{ &current.name }</h3>
                    <div class="speaker-nav">
                        <button
                            disabled={roulette.is_first()}
                            onclick={props.on_previous.reform(|_| ())}
                        >
                            { "← Previous" }
                        </button>
                        <button
                            disabled={roulette.is_last()}
                            onclick={props.on_next.reform(|_| ())}
                        >
                            { "Next →" }
                        </button>
                    </div>
                </div>

                <h4>{ "Speaking order" }</h4>
                <ol class="speaking-order">
                    { roulette.order().iter().enumerate().map(|(index, member)| {
                        let state = roulette.speaker_state(index);
                        let (class, badge) = match state {
                            SpeakerState::Done => ("speaker done", "Done"),
                            SpeakerState::Current => ("speaker current", "Now"),
                            SpeakerState::Upcoming => ("speaker upcoming", ""),
                        };
                        html! {
                            <li key={member.id.clone()} {class}>
                                <span class="speaker-index">{ index + 1 }</span>
                                <span class="speaker-name">{ &member.name }</span>
                                <span class="speaker-badge">{ badge }</span>
                            </li>
                        }
                    }).collect::<Html>() }
                </ol>
                </>
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimerPanelProps {
    pub time_left: u32,
    pub progress: f64,
    pub status: TimerStatus,
    pub on_start: Callback<()>,
    pub on_pause: Callback<()>,
    pub on_reset: Callback<()>,
}

/// Circular countdown dial with start/pause/reset controls.
#[function_component(TimerPanel)]
pub fn timer_panel(props: &TimerPanelProps) -> Html {
    let circumference = 2.0 * PI * RING_RADIUS;
    let progress = props.progress.clamp(0.0, 1.0);
    let ring_class = progress_class(progress);
    let status_class = match props.status {
        TimerStatus::Idle => "status-idle",
        TimerStatus::Running => "status-running",
        TimerStatus::Paused => "status-paused",
        TimerStatus::Finished => "status-finished",
    };

    html! {
        <section class="panel timer">
            <h2>{ "Speaking Timer" }</h2>

            <div class="dial">
                <svg viewBox="0 0 120 120" class="dial-ring">
                    <circle cx="60" cy="60" r={RING_RADIUS.to_string()} class="dial-track" fill="transparent" stroke-width="8" />
                    <circle
                        cx="60"
                        cy="60"
                        r={RING_RADIUS.to_string()}
                        class={classes!("dial-progress", ring_class)}
                        fill="transparent"
                        stroke-width="8"
                        stroke-linecap="round"
                        stroke-dasharray={circumference.to_string()}
                        stroke-dashoffset={(circumference * (1.0 - progress)).to_string()}
                    />
                </svg>
                <div class="dial-label">
                    <div class={classes!("dial-time", ring_class)}>{ format_time(props.time_left) }</div>
                    <div class={classes!("dial-status", status_class)}>{ props.status.to_string() }</div>
                </div>
            </div>

            if props.status == TimerStatus::Finished {
                <div class="time-up">{ "⏰ Time's up!" }</div>
            }

            <div class="timer-controls">
                if matches!(props.status, TimerStatus::Idle | TimerStatus::Paused) {
                    <button class="btn-start" onclick={props.on_start.reform(|_| ())}>
                        { if props.status == TimerStatus::Paused { "▶ Resume" } else { "▶ Start" } }
                    </button>
                } else {
                    <button
                        class="btn-pause"
                        disabled={props.status == TimerStatus::Finished}
                        onclick={props.on_pause.reform(|_| ())}
                    >
                        { "⏸ Pause" }
                    </button>
                }
                <button class="btn-reset" onclick={props.on_reset.reform(|_| ())}>{ "↺ Reset" }</button>
            </div>

            <p class="time-detail">{ format!("Remaining: {}", format_remaining(props.time_left)) }</p>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SettingsPanelProps {
    pub settings: Settings,
    pub on_update: Callback<u32>,
    pub on_reset: Callback<()>,
}

/// Collapsible timer settings: presets plus a custom minutes/seconds form.
#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    let current = props.settings.timer_duration;
    let draft = use_state_eq(|| current);
    let is_open = use_state(|| false);
    let input_error = use_state(|| None::<String>);

    // Pick up changes made elsewhere (reset, first load)
    {
        let draft = draft.clone();
        use_effect_with(current, move |&seconds| {
            draft.set(seconds);
        });
    }

    let on_minutes = {
        let draft = draft.clone();
        let input_error = input_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match validate_minutes(&input.value()) {
                Ok(minutes) => {
                    draft.set(with_minutes(*draft, minutes));
                    input_error.set(None);
                }
                Err(err) => input_error.set(Some(err)),
            }
        })
    };

    let on_seconds = {
        let draft = draft.clone();
        let input_error = input_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match validate_seconds(&input.value()) {
                Ok(seconds) => {
                    draft.set(with_seconds(*draft, seconds));
                    input_error.set(None);
                }
                Err(err) => input_error.set(Some(err)),
            }
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let is_open = is_open.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_update.emit(*draft);
            is_open.set(false);
        })
    };

    html! {
        <section class="panel settings">
            <div class="settings-header">
                <h2>{ "Settings" }</h2>
                <button
                    class="settings-toggle"
                    aria-expanded={(*is_open).to_string()}
                    onclick={
                        let is_open = is_open.clone();
                        Callback::from(move |_| is_open.set(!*is_open))
                    }
                >
                    { if *is_open { "▼" } else { "▶" } }
                </button>
            </div>

            <div class="settings-summary">
                <span>{ "Speaking time:" }</span>
                <span class="settings-value">{ format_time(current) }</span>
            </div>

            if *is_open {
                <div class="settings-content">
                    <h3>{ "Presets" }</h3>
                    <div class="preset-grid">
                        { DURATION_PRESETS.iter().map(|&(label, seconds)| {
                            let draft = draft.clone();
                            let class = if *draft == seconds { "preset selected" } else { "preset" };
                            html! {
                                <button key={seconds} {class} onclick={Callback::from(move |_| draft.set(seconds))}>
                                    { label }
                                </button>
                            }
                        }).collect::<Html>() }
                    </div>

                    <h3>{ "Custom time" }</h3>
                    <form class="custom-duration" {onsubmit}>
                        <label for="minutes">{ "Minutes:" }</label>
                        <input
                            id="minutes"
                            type="number"
                            min="0"
                            max={MAX_MINUTES_INPUT.to_string()}
                            value={(*draft / 60).to_string()}
                            onchange={on_minutes}
                        />
                        <label for="seconds">{ "Seconds:" }</label>
                        <input
                            id="seconds"
                            type="number"
                            min="0"
                            max={MAX_SECONDS_INPUT.to_string()}
                            value={(*draft % 60).to_string()}
                            onchange={on_seconds}
                        />
                        if let Some(ref err) = *input_error {
                            <div class="input-error">{ err }</div>
                        }

                        <p class="draft-value">{ format!("Selected: {}", format_time(*draft)) }</p>
                        <div class="form-actions">
                            <button type="submit" disabled={!Settings::is_valid_duration(*draft)}>
                                { "Save" }
                            </button>
                            <button
                                type="button"
                                onclick={
                                    let draft = draft.clone();
                                    Callback::from(move |_| draft.set(current))
                                }
                            >
                                { "Cancel" }
                            </button>
                        </div>
                    </form>

                    <button class="btn-danger" onclick={props.on_reset.reform(|_| ())}>
                        { "Reset settings" }
                    </button>
                </div>
            }
        </section>
    }
}
