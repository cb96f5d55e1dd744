// Widget di alert per la GUI
use iced::{Color, Element, Length};
use iced::widget::{container, text, Container};
use crate::client::models::messages::Message;

const ALERT_BG: Color = Color::from_rgb(1.0, 0.92, 0.92);
const ALERT_TEXT: Color = Color::from_rgb(0.55, 0.08, 0.08);

pub fn view<'a>(msg: impl Into<String>) -> Element<'a, Message> {
    Container::new(text(msg.into()).size(16).style(ALERT_TEXT))
        .padding(12)
        .width(Length::Fill)
        .center_x()
        .style(iced::theme::Container::Custom(Box::new(|_: &iced::Theme| {
            container::Appearance {
                background: Some(iced::Background::Color(ALERT_BG)),
                text_color: Some(ALERT_TEXT),
                border: iced::Border {
                    width: 1.0,
                    color: ALERT_TEXT,
                    radius: 6.0.into(),
                },
                shadow: iced::Shadow::default(),
            }
        })))
        .into()
}
