use iced::{Alignment, Color, ContentFit, Element, Font, Length};
use iced::widget::{image, Button, Column, Container, Image, Scrollable, Text};
use crate::client::gui::widgets::alert;
use crate::client::models::app_state::{GeneratorState, ImageSlot};
use crate::client::models::messages::Message;

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const IMAGE_MAX_HEIGHT: f32 = 500.0;

/// What the modal shows for one diagram.
#[derive(Debug, Clone)]
pub enum PanelContent<'a> {
    Image(&'a image::Handle),
    Pending,
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct DiagramPanel<'a> {
    pub label: &'static str,
    pub url: &'a str,
    pub content: PanelContent<'a>,
}

/// One panel per image of the current result, empty when there is no result.
/// An image widget is only produced for bytes that actually arrived.
pub fn panels(state: &GeneratorState) -> Vec<DiagramPanel<'_>> {
    let Some(result) = &state.ui.result else {
        return Vec::new();
    };
    result
        .images()
        .into_iter()
        .map(|(label, url)| {
            let content = match state.images.get(url) {
                Some(ImageSlot::Loaded(handle)) => PanelContent::Image(handle),
                Some(ImageSlot::Loading) => PanelContent::Pending,
                Some(ImageSlot::Failed(_)) | None => PanelContent::Unavailable,
            };
            DiagramPanel { label, url, content }
        })
        .collect()
}

pub fn unavailable_message(url: &str) -> String {
    format!("Image unavailable: {}", url)
}

pub fn title(state: &GeneratorState) -> &'static str {
    if state.ui.error_message.is_some() {
        "Error"
    } else {
        "Generated UML Diagram(s)"
    }
}

fn panel_view<'a>(panel: DiagramPanel<'a>) -> Element<'a, Message> {
    let body: Element<Message> = match panel.content {
        PanelContent::Image(handle) => Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fixed(IMAGE_MAX_HEIGHT))
            .into(),
        PanelContent::Pending => Text::new("Loading diagram...").size(14).into(),
        PanelContent::Unavailable => alert::view(unavailable_message(panel.url)),
    };
    Column::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new(format!("{}:", panel.label)).font(BOLD_FONT).size(16))
        .push(body)
        .into()
}

/// Modal overlay content, `None` while the modal is hidden.
pub fn view(state: &GeneratorState) -> Option<Element<'_, Message>> {
    if !state.ui.modal_visible {
        return None;
    }

    let mut content = Column::new()
        .spacing(20)
        .padding(20)
        .align_items(Alignment::Center)
        .push(Text::new(title(state)).font(BOLD_FONT).size(22));

    if let Some(error) = &state.ui.error_message {
        content = content.push(Text::new(error.as_str()).size(16));
    } else {
        for panel in panels(state) {
            content = content.push(panel_view(panel));
        }
    }

    let close = Button::new(Text::new("Close").size(16))
        .on_press(Message::CloseModal)
        .style(iced::theme::Button::Destructive)
        .padding([10, 20]);
    content = content.push(close);

    let modal = Container::new(Scrollable::new(content))
        .max_width(800.0)
        .max_height(700.0)
        .style(iced::theme::Container::Custom(Box::new(|_: &iced::Theme| {
            iced::widget::container::Appearance {
                background: Some(iced::Background::Color(Color::WHITE)),
                border: iced::Border {
                    width: 0.0,
                    color: Color::TRANSPARENT,
                    radius: 10.0.into(),
                },
                shadow: iced::Shadow {
                    offset: iced::Vector::new(0.0, 4.0),
                    blur_radius: 8.0,
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
                },
                ..Default::default()
            }
        })));

    Some(modal.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::generation::GenerationResult;
    use crate::client::models::ui_state::UiEvent;

    const A: &str = "http://localhost:8000/img/a.png";
    const B: &str = "http://localhost:8000/img/b.png";

    fn with_result(result: GenerationResult) -> GeneratorState {
        let mut state = GeneratorState::default();
        state.ui.apply(UiEvent::SubmissionStarted);
        for url in result.urls() {
            state.images.insert(url, ImageSlot::Loading);
        }
        state.ui.apply(UiEvent::Completed(Ok(result)));
        state
    }

    #[test]
    fn enhanced_result_has_two_labelled_panels() {
        let state = with_result(GenerationResult::Enhanced { base: A.into(), enhanced: B.into() });
        let panels = panels(&state);
        assert_eq!(panels.len(), 2);
        assert_eq!((panels[0].label, panels[0].url), ("Base Diagram", A));
        assert_eq!((panels[1].label, panels[1].url), ("Enhanced Diagram", B));
        assert_eq!(title(&state), "Generated UML Diagram(s)");
        assert!(view(&state).is_some());
    }

    #[test]
    fn base_result_has_one_panel() {
        let state = with_result(GenerationResult::Base { diagram: A.into() });
        assert_eq!(panels(&state).len(), 1);
    }

    #[test]
    fn failed_download_never_becomes_an_image() {
        let mut state =
            with_result(GenerationResult::Enhanced { base: A.into(), enhanced: B.into() });
        state.images.insert(A.into(), ImageSlot::Loaded(image::Handle::from_memory(vec![0u8; 4])));
        state.images.insert(B.into(), ImageSlot::Failed("status 404".into()));

        let panels = panels(&state);
        assert!(matches!(panels[0].content, PanelContent::Image(_)));
        assert!(matches!(panels[1].content, PanelContent::Unavailable));
        assert_eq!(unavailable_message(panels[1].url), format!("Image unavailable: {}", B));
    }

    #[test]
    fn error_state_has_no_panels() {
        let mut state = GeneratorState::default();
        state.ui.apply(UiEvent::ValidationFailed("Please enter a software requirement.".into()));
        assert!(panels(&state).is_empty());
        assert_eq!(title(&state), "Error");
    }

    #[test]
    fn hidden_modal_renders_nothing() {
        assert!(view(&GeneratorState::default()).is_none());
    }
}
