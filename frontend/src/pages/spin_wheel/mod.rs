mod wheel_canvas;
mod wheel_utils;

use yew::prelude::*;
use yew_router::prelude::*;
use shared::constants::CHANGE_NAME_LABEL;
use shared::shared_wheel_game::{RevealState, SessionInput, SpinWheelQuery, WheelTiming};
use crate::config::get_wheel_timing;
use crate::hooks::use_spin_engine;
use crate::{styles, Route};

use wheel_canvas::WheelCanvas;
use wheel_utils::{ResultDisplay, SpinButton};

#[function_component(SpinWheel)]
pub fn spin_wheel() -> Html {
    let navigator = use_navigator();
    let query = use_location()
        .and_then(|location| location.query::<SpinWheelQuery>().ok())
        .unwrap_or_default();
    let entry = SessionInput::from_entry(query.name.as_deref());
    let timing = use_memo((), |_| get_wheel_timing());

    // No name, no spin: go back to the form without starting anything
    {
        let missing = entry.is_err();
        use_effect_with(missing, move |missing| {
            if *missing {
                log::info!("Spin screen opened without a name, returning to the name form");
                if let Some(navigator) = navigator {
                    navigator.push(&Route::NameEntry);
                }
            }
            || ()
        });
    }

    match entry {
        Ok(input) => {
            let key = session_key(&input);
            html! { <SpinSession key={key} {input} timing={*timing} /> }
        }
        Err(_) => html! {},
    }
}

/// A different name means a different session: the engine is rebuilt.
fn session_key(input: &SessionInput) -> String {
    input.name().to_string()
}

#[derive(Properties, PartialEq)]
struct SpinSessionProps {
    input: SessionInput,
    timing: WheelTiming,
}

#[function_component(SpinSession)]
fn spin_session(props: &SpinSessionProps) -> Html {
    let navigator = use_navigator();
    let spin = use_spin_engine(props.input.clone(), props.timing);

    {
        let request_spin = spin.request_spin.clone();
        use_effect_with((), move |_| {
            request_spin.emit(());
            || ()
        });
    }

    let frame = spin.frame;
    let is_spinning = frame.reveal_state == RevealState::Spinning;
    let is_settled = frame.reveal_state == RevealState::Settled;

    let on_spin = spin.request_spin.reform(|_: MouseEvent| ());
    let on_change_name = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::NameEntry);
        }
    });

    html! {
        <div class={styles::SPIN_CONTAINER}>
            <div class="text-center mb-8">
                <h1 class={styles::TEXT_SPIN_TITLE}>{"🎯 Spin the Wheel!"}</h1>
                <p class={styles::TEXT_GREETING}>{format!("Good luck, {}!", props.input.name())}</p>
            </div>

            <div class="relative mb-8">
                <WheelCanvas
                    rotation={spin.displayed_rotation}
                    chosen={frame.chosen}
                    highlight={is_settled && frame.highlight}
                    {is_spinning}
                />
            </div>

            <ResultDisplay {frame} />

            <div class="flex flex-col md:flex-row gap-4">
                <SpinButton {is_spinning} onclick={on_spin} />
                <button onclick={on_change_name} class={styles::BUTTON_SECONDARY}>
                    {CHANGE_NAME_LABEL}
                </button>
            </div>
        </div>
    }
}
