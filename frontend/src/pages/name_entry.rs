use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use shared::constants::{NAME_PLACEHOLDER, SUBMIT_LABEL};
use shared::shared_wheel_game::{submit_name, SpinWheelQuery};
use crate::hooks::validation::use_name_validation;
use crate::{styles, Route};

#[function_component(NameEntry)]
pub fn name_entry() -> Html {
    let navigator = use_navigator();
    let name = use_state(String::new);
    let (validation, validate) = use_name_validation();
    let is_submit_disabled = !validation.is_valid();

    let oninput = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            validate.emit(value.clone());
            name.set(value);
        })
    };

    let handle_submit = {
        let name = name.clone();
        Callback::from(move |_: ()| {
            let input = match submit_name(&name) {
                Ok(input) => input,
                Err(e) => {
                    log::debug!("Name not submitted: {}", e);
                    return;
                }
            };

            let Some(navigator) = navigator.as_ref() else {
                log::error!("Navigator not available");
                return;
            };
            if let Err(e) = navigator.push_with_query(&Route::SpinWheel, &SpinWheelQuery::from(&input)) {
                log::error!("Failed to open the wheel: {:?}", e);
            }
        })
    };

    let onkeydown = {
        let handle_submit = handle_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !is_submit_disabled {
                handle_submit.emit(());
            }
        })
    };

    let onclick = handle_submit.reform(|_: MouseEvent| ());

    html! {
        <div class={styles::NAME_CONTAINER}>
            <div class={styles::NAME_CARD}>
                <div class="text-center">
                    <h1 class={styles::TEXT_TITLE}>{"🎡 Spin It!"}</h1>
                    <p class={styles::TEXT_SUBTITLE}>{"Enter your name to try your luck"}</p>
                </div>

                <div class="space-y-6">
                    <div class="relative">
                        <input
                            type="text"
                            value={(*name).clone()}
                            {oninput}
                            {onkeydown}
                            placeholder={NAME_PLACEHOLDER}
                            class={styles::INPUT}
                        />
                    </div>

                    <button
                        {onclick}
                        disabled={is_submit_disabled}
                        class={if is_submit_disabled { styles::BUTTON_SUBMIT_DISABLED } else { styles::BUTTON_SUBMIT }}
                    >
                        {SUBMIT_LABEL}
                    </button>
                </div>
            </div>
        </div>
    }
}
