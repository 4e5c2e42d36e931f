use monitor_core::{Clock, FormState, TipPicker};

use crate::controller::events::{Notice, UiEvent};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub form: FormState,
    pub notice: Option<Notice>,
}

impl ViewState {
    pub fn new(form: FormState) -> Self {
        Self { form, notice: None }
    }

    pub fn is_blocked(&self) -> bool {
        self.notice.is_some()
    }
}

/// Time and randomness the reducer may consume.
pub struct Effects<'a> {
    pub clock: &'a dyn Clock,
    pub tips: &'a mut dyn TipPicker,
}

/// Applies one event. While a notice is open only `NoticeDismissed` has an
/// effect.
pub fn reduce(view: &ViewState, event: UiEvent, effects: &mut Effects<'_>) -> ViewState {
    match event {
        UiEvent::NoticeDismissed => ViewState {
            notice: None,
            ..view.clone()
        },
        _ if view.is_blocked() => view.clone(),
        UiEvent::InputChanged(text) => ViewState {
            form: view.form.update_input(text),
            notice: None,
        },
        UiEvent::SubmitRequested => match view.form.submit(effects.clock, &mut *effects.tips) {
            Ok(form) => ViewState { form, notice: None },
            Err(err) => ViewState {
                form: view.form.clone(),
                notice: Some(Notice::from(err)),
            },
        },
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
