// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::styles;
use crate::ui::{gallery, viewer};
use iced::{
    widget::{Column, Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub viewer: Option<&'a viewer::State>,
    pub gallery: Option<&'a gallery::State>,
    pub is_dark: bool,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let fullscreen = ctx
        .viewer
        .is_some_and(|state| ctx.screen == Screen::Viewer && state.ui_state().fullscreen_active);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Viewer => view_viewer(ctx.viewer, ctx.i18n, fullscreen),
        Screen::Gallery => view_gallery(ctx.gallery, ctx.i18n, ctx.is_dark),
    };

    // In fullscreen mode, don't show the navbar
    let content: Element<'_, Message> = if fullscreen {
        current_view
    } else {
        let navbar_view = navbar::view(NavbarViewContext {
            i18n: ctx.i18n,
            active: ctx.screen.into(),
            is_dark: ctx.is_dark,
        })
        .map(Message::Navbar);

        Column::new()
            .push(navbar_view)
            .push(
                Container::new(current_view)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .into()
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page(ctx.is_dark))
        .into()
}

fn view_viewer<'a>(
    viewer: Option<&'a viewer::State>,
    i18n: &'a I18n,
    fullscreen: bool,
) -> Element<'a, Message> {
    let Some(state) = viewer else {
        return Text::new("").into();
    };
    let viewer_content = state
        .view(viewer::ViewEnv { i18n })
        .map(Message::Viewer);

    if fullscreen {
        viewer_content
    } else {
        Container::new(viewer_content)
            .width(Length::Fill)
            .padding(spacing::LG)
            .into()
    }
}

fn view_gallery<'a>(
    gallery: Option<&'a gallery::State>,
    i18n: &'a I18n,
    is_dark: bool,
) -> Element<'a, Message> {
    match gallery {
        Some(state) => state
            .view(gallery::ViewEnv { i18n, is_dark })
            .map(Message::Gallery),
        // Only reachable before the first switch to the gallery.
        None => Container::new(Text::new(i18n.tr("gallery-fetch-error")).size(typography::BODY))
            .padding(spacing::LG)
            .into(),
    }
}
