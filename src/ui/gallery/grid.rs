// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid and pagination footer.

use super::component::Message;
use crate::application::query::gallery::{FooterStatus, PageLoader};
use crate::domain::gallery::FileItem;
use crate::i18n::fluent::I18n;
use crate::media::{ImageCache, ImageSlot};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, image, scrollable, text, Column, Row, Space};
use iced::{alignment, ContentFit, Element, Length};

pub fn view<'a>(loader: &'a PageLoader, cache: &'a ImageCache, i18n: &'a I18n) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::SM);
    for (row_index, chunk) in loader.items().chunks(sizing::THUMBNAILS_PER_ROW).enumerate() {
        let mut row = Row::new().spacing(spacing::SM);
        for (offset, item) in chunk.iter().enumerate() {
            let index = row_index * sizing::THUMBNAILS_PER_ROW + offset;
            row = row.push(thumbnail(index, item, cache.slot(&item.path), i18n));
        }
        rows = rows.push(row);
    }

    let grid = scrollable(container(rows).width(Length::Fill).padding(spacing::XXS))
        .height(Length::Fixed(sizing::GALLERY_HEIGHT));

    let refresh = button(text(i18n.tr("gallery-refresh")).size(typography::CAPTION))
        .on_press(Message::Refresh)
        .style(button::text);

    Column::new()
        .spacing(spacing::SM)
        .push(grid)
        .push(
            Row::new()
                .align_y(alignment::Vertical::Center)
                .push(footer(loader.footer(), i18n))
                .push(Space::new().width(Length::Fill))
                .push(refresh),
        )
        .into()
}

fn thumbnail<'a>(index: usize, item: &'a FileItem, slot: ImageSlot, i18n: &'a I18n) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match slot {
        ImageSlot::Ready(cached) => image(cached.handle)
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL))
            .content_fit(ContentFit::Cover)
            .into(),
        ImageSlot::Failed => placeholder(i18n.tr("gallery-image-failed")),
        ImageSlot::Loading | ImageSlot::Missing => placeholder(i18n.tr("gallery-image-loading")),
    };

    let caption = text(item.display_name())
        .size(typography::CAPTION)
        .width(Length::Fixed(sizing::THUMBNAIL))
        .wrapping(text::Wrapping::None);

    button(Column::new().spacing(spacing::XXS).push(preview).push(caption))
        .on_press(Message::Open(index))
        .padding(spacing::XXS)
        .style(styles::button::thumbnail)
        .into()
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(typography::CAPTION))
        .center_x(Length::Fixed(sizing::THUMBNAIL))
        .center_y(Length::Fixed(sizing::THUMBNAIL))
        .style(styles::container::placeholder)
        .into()
}

fn footer<'a>(status: FooterStatus, i18n: &'a I18n) -> Element<'a, Message> {
    match status {
        FooterStatus::Loading => text(i18n.tr("gallery-loading")).size(typography::BODY).into(),
        FooterStatus::LoadMore(page_size) => {
            let label = i18n.tr_with_args("gallery-load-more", &[("count", &page_size.to_string())]);
            button(text(label).size(typography::BODY))
                .on_press(Message::LoadMore)
                .style(styles::button::primary)
                .into()
        }
        FooterStatus::AllLoaded => text(i18n.tr("gallery-all-loaded")).size(typography::BODY).into(),
        FooterStatus::Empty => text(i18n.tr("gallery-empty")).size(typography::BODY).into(),
    }
}
