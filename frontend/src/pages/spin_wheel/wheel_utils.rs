use yew::prelude::*;
use shared::constants::{SPINNING_LABEL, SPIN_AGAIN_LABEL};
use shared::shared_wheel_game::{Parity, RevealState, SpinFrame};
use crate::styles;

pub fn result_message(chosen: u8) -> String {
    format!("🎉 You landed on {}!", chosen)
}

pub fn parity_message(chosen: u8) -> String {
    format!("That's an {} number!", Parity::of_value(chosen).label())
}

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub frame: SpinFrame,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let chosen = match (props.frame.reveal_state, props.frame.chosen) {
        (RevealState::Settled, Some(chosen)) => chosen,
        _ => return html! { <div class="text-center mb-8 h-20"></div> },
    };

    html! {
        <div class="text-center mb-8 h-20 transition-all duration-500">
            <h2 class={styles::RESULT_TITLE}>{result_message(chosen)}</h2>
            <p class={styles::RESULT_TEXT}>{parity_message(chosen)}</p>
        </div>
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning { SPINNING_LABEL } else { SPIN_AGAIN_LABEL };

    let button_class = if props.is_spinning {
        "bg-blue-400/50 text-white/50 cursor-not-allowed"
    } else {
        "bg-blue-500 text-white hover:bg-blue-600"
    };

    // Spinner icon only while the wheel turns
    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={props.is_spinning}
            class={classes!(
                "px-8",
                "py-3",
                "text-lg",
                "font-semibold",
                "rounded-xl",
                "shadow-lg",
                "transition-all",
                button_class
            )}
        >
            <div class="flex items-center justify-center">
                <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 6v6l4 2" />
                </svg>
                <span>{button_text}</span>
            </div>
        </button>
    }
}
