use yew::prelude::*;
use shared::validation::validate_name;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct NameValidationState {
    pub has_content: bool,
}

impl NameValidationState {
    pub fn is_valid(&self) -> bool {
        self.has_content
    }
}

#[hook]
pub fn use_name_validation() -> (UseStateHandle<NameValidationState>, Callback<String>) {
    let validation = use_state_eq(NameValidationState::default);

    let validate = {
        let validation = validation.clone();
        Callback::from(move |name: String| {
            validation.set(NameValidationState {
                has_content: validate_name(&name).is_ok(),
            });
        })
    };

    (validation, validate)
}
