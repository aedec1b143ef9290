//! Main module for the Speaker Roulette application using Yew.
//! Wires UI components, state hooks, and the notification side effect.

use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod logger;
mod notify;
mod utils;

use components::{MemberManager, RoulettePanel, SettingsPanel, TimerPanel};
use hooks::{use_countdown, use_roster, use_roulette, use_settings};

/// Primary application component wiring state, effects, and UI elements.
#[function_component(App)]
fn app() -> Html {
    let roster = use_roster();
    let settings = use_settings();
    let roulette = use_roulette();
    // Set once at startup from the notification permission prompt
    let notifications_allowed = use_mut_ref(|| false);

    {
        let notifications_allowed = notifications_allowed.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let granted = notify::request_permission().await;
                *notifications_allowed.borrow_mut() = granted;
            });
        });
    }

    let on_finish = {
        let notifications_allowed = notifications_allowed.clone();
        Callback::from(move |_: ()| {
            if *notifications_allowed.borrow() {
                notify::notify_time_up();
            }
        })
    };
    let timer = use_countdown(settings.settings().timer_duration, on_finish);

    let participants = roster.participants();

    let on_add = {
        let roster = roster.clone();
        Callback::from(move |name: String| roster.add(&name))
    };
    let on_remove = {
        let roster = roster.clone();
        Callback::from(move |id: String| roster.remove(&id))
    };
    let on_clear = {
        let roster = roster.clone();
        Callback::from(move |_: ()| roster.clear())
    };
    let on_update_duration = {
        let settings = settings.clone();
        Callback::from(move |seconds: u32| settings.update_duration(seconds))
    };
    let on_reset_settings = {
        let settings = settings.clone();
        Callback::from(move |_: ()| settings.reset_to_defaults())
    };

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{ "🎲 Speaker Roulette" }</h1>
                <p>{ "Pick the speaking order and keep time for your retrospective" }</p>
            </header>

            <main class="app-grid">
                <div class="column">
                    <MemberManager
                        participants={participants.clone()}
                        {on_add}
                        {on_remove}
                        {on_clear}
                    />
                    <RoulettePanel
                        {participants}
                        roulette={roulette.roulette.clone()}
                        on_shuffle={roulette.shuffle.clone()}
                        on_next={roulette.next.clone()}
                        on_previous={roulette.previous.clone()}
                    />
                </div>
                <div class="column">
                    <TimerPanel
                        time_left={timer.countdown.time_left()}
                        progress={timer.countdown.progress()}
                        status={timer.countdown.status()}
                        on_start={timer.start.clone()}
                        on_pause={timer.pause.clone()}
                        on_reset={timer.reset.clone()}
                    />
                    <SettingsPanel
                        settings={settings.settings()}
                        on_update={on_update_duration}
                        on_reset={on_reset_settings}
                    />
                </div>
            </main>
        </div>
    }
}

/// Entry point: installs logging and the panic hook, then renders the App.
fn main() {
    console_error_panic_hook::set_once();
    logger::init(config::LOG_LEVEL);
    log::info!("Starting Speaker Roulette");
    yew::Renderer::<App>::new().render();
}
