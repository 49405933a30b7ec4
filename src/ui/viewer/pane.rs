// SPDX-License-Identifier: MPL-2.0
//! Viewport pane: the rendered frame plus pointer input for orbit controls.

use crate::ui::state::DragMode;
use crate::ui::styles;
use crate::ui::viewer::component::Message;
use iced::widget::{image, mouse_area, Container, Image, Space};
use iced::{mouse, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub frame: Option<&'a image::Handle>,
    pub is_dark: bool,
    pub is_dragging: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match ctx.frame {
        Some(handle) => Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Space::new().width(Length::Fill).height(Length::Fill).into(),
    };

    let framed = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .style(styles::container::viewport(ctx.is_dark));

    mouse_area(framed)
        .on_press(Message::DragStarted(DragMode::Rotate))
        .on_right_press(Message::DragStarted(DragMode::Pan))
        .on_middle_press(Message::DragStarted(DragMode::Pan))
        .on_release(Message::PointerReleased)
        .on_right_release(Message::PointerReleased)
        .on_middle_release(Message::PointerReleased)
        .on_move(Message::PointerMoved)
        .on_scroll(Message::Scrolled)
        .interaction(cursor_interaction(ctx.is_dragging))
        .into()
}

fn cursor_interaction(is_dragging: bool) -> mouse::Interaction {
    if is_dragging {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    }
}
