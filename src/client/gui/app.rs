use std::sync::Arc;
use iced::{Application, Command, Element, Theme};
use iced::widget::image;
use iced_aw::Modal;
use crate::client::gui::views::{generator, result_modal};
use crate::client::models::app_state::{Effect, GeneratorState};
use crate::client::models::messages::Message;
use crate::client::services::generation_service::GenerationService;
use crate::common::config::ClientConfig;

const LOG_CLEAR_DELAY_MS: u64 = 4000;

pub struct GeneratorApp {
    pub state: GeneratorState,
    pub service: GenerationService,
}

impl GeneratorApp {
    fn perform(&self, effect: Effect) -> Command<Message> {
        match effect {
            Effect::Submit { requirement, mode } => {
                let svc = self.service.clone();
                Command::perform(
                    async move { svc.submit(&requirement, mode).await.map_err(Arc::new) },
                    Message::GenerationCompleted,
                )
            }
            Effect::FetchImages(urls) => Command::batch(urls.into_iter().map(|url| {
                let svc = self.service.clone();
                Command::perform(
                    async move {
                        let image = svc
                            .fetch_image(&url)
                            .await
                            .map(image::Handle::from_memory)
                            .map_err(|e| e.to_string());
                        (url, image)
                    },
                    |(url, image)| Message::ImageFetched { url, image },
                )
            })),
        }
    }
}

impl Application for GeneratorApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ClientConfig;

    fn new(config: ClientConfig) -> (Self, Command<Message>) {
        log::info!("Using generation service at {}", config.server_origin);
        let app = GeneratorApp {
            state: GeneratorState::new(config.default_mode),
            service: GenerationService::from_config(&config),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "UML Diagram Generator".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        let completed = matches!(message, Message::GenerationCompleted(_));
        let cmd = match self.state.update(message) {
            Some(effect) => self.perform(effect),
            None => Command::none(),
        };
        match self.state.latest_log_id() {
            // keep the outcome in the status bar for a moment, then clear it
            Some(id) if completed => {
                let clear_later = Command::perform(
                    async move {
                        let delay = tokio::time::Duration::from_millis(LOG_CLEAR_DELAY_MS);
                        tokio::time::sleep(delay).await;
                        Message::ClearLog(id)
                    },
                    |msg| msg,
                );
                Command::batch([cmd, clear_later])
            }
            _ => cmd,
        }
    }

    fn view(&self) -> Element<Message> {
        Modal::new(generator::view(&self.state), result_modal::view(&self.state))
            .backdrop(Message::CloseModal)
            .on_esc(Message::CloseModal)
            .into()
    }
}
