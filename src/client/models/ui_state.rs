// Stato UI del form di generazione
use crate::client::models::generation::GenerationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Success,
    Failure,
}

/// Inputs of the UI reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SubmissionStarted,
    ValidationFailed(String),
    /// The outstanding request resolved. Errors carry the user-facing message.
    Completed(Result<GenerationResult, String>),
    ModalClosed,
}

/// `loading` and `modal_visible` are never both true. Whenever a request has
/// completed with a result or an error, the modal is visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub loading: bool,
    pub error_message: Option<String>,
    pub result: Option<GenerationResult>,
    pub modal_visible: bool,
}

impl UiState {
    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::SubmissionStarted => {
                self.loading = true;
                self.error_message = None;
                self.result = None;
                self.modal_visible = false;
            }
            UiEvent::ValidationFailed(message) => {
                self.loading = false;
                self.result = None;
                self.error_message = Some(message);
                self.modal_visible = true;
            }
            UiEvent::Completed(Ok(result)) => {
                self.loading = false;
                self.error_message = None;
                self.result = Some(result);
                self.modal_visible = true;
            }
            UiEvent::Completed(Err(message)) => {
                self.loading = false;
                self.result = None;
                self.error_message = Some(message);
                self.modal_visible = true;
            }
            UiEvent::ModalClosed => {
                self.modal_visible = false;
                self.error_message = None;
                self.result = None;
            }
        }
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Submitting
        } else if !self.modal_visible {
            Phase::Idle
        } else if self.error_message.is_some() {
            Phase::Failure
        } else {
            Phase::Success
        }
    }

    pub fn can_submit(&self) -> bool {
        self.phase() == Phase::Idle
    }
}
