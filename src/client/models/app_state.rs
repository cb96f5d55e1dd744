use std::collections::HashMap;
use iced::widget::{image, text_editor};
use crate::client::gui::views::logger::{LogLevel, LogMessage};
use crate::client::models::generation::{validate_requirement, Mode};
use crate::client::models::messages::Message;
use crate::client::models::ui_state::{UiEvent, UiState};

/// Download state of one diagram image shown in the result modal.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    Loading,
    Loaded(image::Handle),
    Failed(String),
}

/// Async work requested by [`GeneratorState::update`]; the application turns
/// these into iced commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Submit { requirement: String, mode: Mode },
    FetchImages(Vec<String>),
}

pub struct GeneratorState {
    /// Text sent on submit, kept in sync with `editor`.
    pub requirement: String,
    pub editor: text_editor::Content,
    pub mode: Mode,
    pub ui: UiState,
    pub images: HashMap<String, ImageSlot>,
    pub logger: Vec<LogMessage>,
    next_log_id: u64,
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self {
            requirement: String::new(),
            editor: text_editor::Content::new(),
            mode: Mode::default(),
            ui: UiState::default(),
            images: HashMap::new(),
            logger: Vec::new(),
            next_log_id: 0,
        }
    }
}

/// The editor always ends its text with a newline; that one is not user input.
fn editor_text(editor: &text_editor::Content) -> String {
    let mut text = editor.text();
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

impl GeneratorState {
    pub fn new(mode: Mode) -> Self {
        Self { mode, ..Self::default() }
    }

    /// Id of the entry the status bar currently shows.
    pub fn latest_log_id(&self) -> Option<u64> {
        self.logger.last().map(|log| log.id)
    }

    pub fn update(&mut self, message: Message) -> Option<Effect> {
        match message {
            Message::RequirementChanged(text) => {
                self.editor = text_editor::Content::with_text(&text);
                self.requirement = text;
                None
            }
            Message::RequirementEdited(action) => {
                self.editor.perform(action);
                self.requirement = editor_text(&self.editor);
                None
            }
            Message::ModeSelected(mode) => {
                self.mode = mode;
                None
            }
            Message::Submit => self.submit(),
            Message::GenerationCompleted(outcome) => {
                // Only the single in-flight request may resolve the form.
                if !self.ui.loading {
                    return None;
                }
                match outcome {
                    Ok(result) => {
                        let urls = result.urls();
                        self.images = urls
                            .iter()
                            .map(|u| (u.clone(), ImageSlot::Loading))
                            .collect();
                        self.log(LogLevel::Success, format!("Generated {} diagram(s)", urls.len()));
                        self.ui.apply(UiEvent::Completed(Ok(result)));
                        Some(Effect::FetchImages(urls))
                    }
                    Err(err) => {
                        self.log(LogLevel::Error, err.to_string());
                        self.ui.apply(UiEvent::Completed(Err(err.user_message().to_string())));
                        None
                    }
                }
            }
            Message::ImageFetched { url, image } => {
                // Results for images no longer on screen are dropped.
                if let Some(slot) = self.images.get_mut(&url) {
                    *slot = match image {
                        Ok(handle) => ImageSlot::Loaded(handle),
                        Err(e) => {
                            log::warn!("Could not load diagram {}: {}", url, e);
                            ImageSlot::Failed(e)
                        }
                    };
                }
                None
            }
            Message::CloseModal => {
                self.ui.apply(UiEvent::ModalClosed);
                self.images.clear();
                None
            }
            Message::ClearLog(id) => {
                // Entries logged after the timer was set stay visible.
                self.logger.retain(|log| log.id > id);
                None
            }
        }
    }

    fn submit(&mut self) -> Option<Effect> {
        if !self.ui.can_submit() {
            return None;
        }
        if let Err(err) = validate_requirement(&self.requirement) {
            self.log(LogLevel::Warning, err.user_message().to_string());
            self.ui.apply(UiEvent::ValidationFailed(err.user_message().to_string()));
            return None;
        }
        self.images.clear();
        self.ui.apply(UiEvent::SubmissionStarted);
        self.log(LogLevel::Info, format!("Generating diagram ({})...", self.mode));
        Some(Effect::Submit { requirement: self.requirement.clone(), mode: self.mode })
    }

    fn log(&mut self, level: LogLevel, message: String) {
        let id = self.next_log_id;
        self.next_log_id += 1;
        self.logger.push(LogMessage { id, level, message });
    }
}
