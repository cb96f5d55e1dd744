use std::sync::Arc;
use iced::widget::{image, text_editor};
use crate::client::models::generation::{GenerationResult, Mode};
use crate::common::error::GenerationError;

#[derive(Debug, Clone)]
pub enum Message {
    /// Replaces the whole requirement text.
    RequirementChanged(String),
    RequirementEdited(text_editor::Action),
    ModeSelected(Mode),
    Submit,
    GenerationCompleted(Result<GenerationResult, Arc<GenerationError>>),
    ImageFetched { url: String, image: Result<image::Handle, String> },
    CloseModal,
    /// Drops status log entries up to and including this id.
    ClearLog(u64),
}
