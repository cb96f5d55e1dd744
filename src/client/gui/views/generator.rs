use iced::{Alignment, Color, Element, Font, Length};
use iced::widget::{Button, Column, Container, PickList, Space, Text, TextEditor};
use crate::client::gui::views::logger::logger_view;
use crate::client::models::app_state::GeneratorState;
use crate::client::models::generation::Mode;
use crate::client::models::messages::Message;

const BG_MAIN: Color = Color::from_rgb(0.94, 0.96, 0.97);
const CARD_BG: Color = Color::WHITE;
const HEADING: Color = Color::from_rgb(0.1, 0.14, 0.49);
const TEXT_SECONDARY: Color = Color::from_rgb(0.35, 0.35, 0.4);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        ..Default::default()
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
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
}

/// Label of the submit button for the current loading state.
pub fn submit_label(loading: bool) -> &'static str {
    if loading { "Generating..." } else { "Generate Diagram" }
}

pub fn view(state: &GeneratorState) -> Element<Message> {
    let loading = state.ui.loading;
    let submit_enabled = state.ui.can_submit();

    let title = Text::new("UML Diagram Generator")
        .size(28)
        .font(BOLD_FONT)
        .style(HEADING)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    let mode_field = Column::new()
        .spacing(6)
        .push(Text::new("Select Mode:").font(BOLD_FONT).size(14))
        .push(
            PickList::new(Mode::all(), Some(state.mode), Message::ModeSelected)
                .width(Length::Fill)
                .padding(10),
        );

    let requirement_field = Column::new()
        .spacing(6)
        .push(Text::new("Software Requirement:").font(BOLD_FONT).size(14))
        .push(
            TextEditor::new(&state.editor)
                .on_action(Message::RequirementEdited)
                .height(Length::Fixed(100.0))
                .padding(10),
        )
        .push(Text::new("e.g. A garage management system").size(12).style(TEXT_SECONDARY));

    let mut submit_button = Button::new(
        Container::new(Text::new(submit_label(loading)).font(BOLD_FONT).size(16))
            .width(Length::Fill)
            .center_x(),
    )
    .style(iced::theme::Button::Primary)
    .width(Length::Fill)
    .padding(12);
    if submit_enabled {
        submit_button = submit_button.on_press(Message::Submit);
    }

    let loading_element: Element<Message> = if loading {
        Container::new(
            Text::new("Waiting for the generation service...")
                .size(14)
                .style(TEXT_SECONDARY),
        )
        .width(Length::Fill)
        .center_x()
        .padding(8)
        .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    };

    let card_content = Column::new()
        .width(Length::Fixed(600.0))
        .spacing(16)
        .padding(20)
        .align_items(Alignment::Center)
        .push(title)
        .push(mode_field)
        .push(requirement_field)
        .push(submit_button)
        .push(loading_element);

    let card = Container::new(card_content)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let main_content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(logger_view(&state.logger))
                .width(Length::Fill)
                .padding([8, 12, 0, 12]),
        )
        .push(
            Container::new(card)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x()
                .center_y(),
        );

    Container::new(main_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
