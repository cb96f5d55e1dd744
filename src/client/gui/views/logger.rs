use iced::{Element, Length};
use iced::widget::{Container, Row, Space, Text};
use crate::client::models::messages::Message;

#[derive(Debug, Clone, PartialEq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogMessage {
    pub id: u64,
    pub level: LogLevel,
    pub message: String,
}

impl LogMessage {
    pub fn tag(&self) -> &'static str {
        match self.level {
            LogLevel::Success => "OK",
            LogLevel::Error => "ERROR",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
        }
    }

    pub fn color(&self) -> iced::Color {
        match self.level {
            LogLevel::Success => iced::Color::from_rgb(0.2, 0.7, 0.4),
            LogLevel::Error => iced::Color::from_rgb(0.83, 0.18, 0.18),
            LogLevel::Info => iced::Color::from_rgb(0.1, 0.14, 0.49),
            LogLevel::Warning => iced::Color::from_rgb(0.9, 0.6, 0.0),
        }
    }
}

/// Status bar with the latest log line only.
pub fn logger_view(messages: &[LogMessage]) -> Element<'_, Message> {
    let Some(log) = messages.last() else {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    };
    let bg_color = log.color();
    Container::new(
        Row::new()
            .spacing(12)
            .push(Text::new(log.tag()).size(14).style(iced::Color::WHITE))
            .push(Text::new(&log.message).size(14).style(iced::Color::WHITE)),
    )
    .padding([8, 12])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
        iced::widget::container::Appearance {
            background: Some(iced::Background::Color(bg_color)),
            text_color: Some(iced::Color::WHITE),
            border: iced::Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            shadow: iced::Shadow::default(),
        }
    })))
    .into()
}
