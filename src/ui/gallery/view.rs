// SPDX-License-Identifier: MPL-2.0
//! Gallery screen layout: header with upload, status line, and model cards.

use crate::gallery::GalleryModelRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery::component::{Message, Status};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Scrollable, Space, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub is_dark: bool,
    pub builtin: &'a [GalleryModelRecord],
    pub fetched: &'a [GalleryModelRecord],
    pub uploading: bool,
    /// False when there is no server to upload to.
    pub can_upload: bool,
    pub status: Option<&'a Status>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(header(&ctx));

    if let Some(status) = ctx.status {
        content = content.push(status_line(ctx.i18n, status, ctx.is_dark));
    }

    content = content
        .push(section_title(ctx.i18n.tr("gallery-samples")))
        .push(card_grid(&ctx, ctx.builtin))
        .push(section_title(ctx.i18n.tr("gallery-uploaded")));

    content = if ctx.fetched.is_empty() {
        content.push(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::BODY))
    } else {
        content.push(card_grid(&ctx, ctx.fetched))
    };

    Container::new(Scrollable::new(content).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page(ctx.is_dark))
        .into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG);

    let label = if ctx.uploading {
        ctx.i18n.tr("gallery-uploading")
    } else {
        ctx.i18n.tr("gallery-upload")
    };
    let upload = button(Text::new(label).size(typography::BODY))
        .on_press_maybe((ctx.can_upload && !ctx.uploading).then_some(Message::UploadRequested))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    Row::new()
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(upload)
        .into()
}

fn status_line<'a>(i18n: &I18n, status: &Status, is_dark: bool) -> Element<'a, Message> {
    Container::new(Text::new(status.text(i18n)).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .style(styles::container::status(is_dark, status.is_success()))
        .into()
}

fn section_title<'a>(title: String) -> Element<'a, Message> {
    Text::new(title).size(typography::TITLE_SM).into()
}

fn card_grid<'a>(ctx: &ViewContext<'a>, records: &'a [GalleryModelRecord]) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = records
        .iter()
        .map(|record| card(ctx.i18n, record, ctx.is_dark))
        .collect();

    Row::with_children(cards)
        .spacing(spacing::MD)
        .wrap()
        .vertical_spacing(spacing::MD)
        .into()
}

fn card<'a>(i18n: &I18n, record: &'a GalleryModelRecord, is_dark: bool) -> Element<'a, Message> {
    let download = button(Text::new(i18n.tr("gallery-download")).size(typography::BODY))
        .on_press(Message::Download {
            id: record.id,
            download_url: record.download_url.clone(),
        })
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let body = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(record.name.as_str()).size(typography::TITLE_SM))
        .push(
            Text::new(i18n.tr_with_args("gallery-format", &[("format", record.format.as_str())]))
                .size(typography::CAPTION),
        )
        .push(Space::new().height(Length::Fixed(spacing::XS)))
        .push(download);

    Container::new(body)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::card(is_dark))
        .into()
}
