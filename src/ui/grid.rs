// SPDX-License-Identifier: MPL-2.0
//! Grid layout: every filtered device as a card in a scrollable grid.

use crate::app::orchestrator::{self, Message};
use crate::domain::device::catalog;
use crate::i18n::fluent::I18n;
use crate::layout::scale;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::device_frame;
use iced::alignment::Horizontal;
use iced::widget::{mouse_area, scrollable, Column, Container, Row, Text};
use iced::{mouse, Element, Length, Size};

/// Render the grid for the area left below the toolbar.
pub fn view<'a>(
    state: &'a orchestrator::State,
    i18n: &'a I18n,
    area: Size,
) -> Element<'a, Message> {
    let usable = Size::new((area.width - 2.0 * spacing::MD).max(0.0), area.height);
    let card = scale::grid_card_box(usable, state.card_size());
    let columns = scale::grid_columns(usable.width, state.card_size().width);
    let devices: Vec<_> = catalog::filtered(state.active_filter()).collect();

    let mut grid = Column::new().spacing(spacing::LG).padding(spacing::MD);
    for chunk in devices.chunks(columns) {
        let mut row = Row::new().spacing(scale::GRID_CARD_GUTTER);
        for &device in chunk {
            let fit = scale::fit_scale(device, state.orientation(), card, state.max_scale());
            let frame = device_frame::view(device_frame::ViewContext {
                i18n,
                device,
                orientation: state.orientation(),
                scale: fit,
                preview: state.preview(device.id()),
                squeeze: 1.0,
                dim: 0.0,
            });

            let (width, height) = device.screen_size(state.orientation());
            let form_factor = i18n.tr(device.form_factor.i18n_key());
            let caption = Column::new()
                .align_x(Horizontal::Center)
                .push(Text::new(device.name).size(typography::BODY))
                .push(
                    Text::new(format!("{width} × {height} · {form_factor}"))
                        .size(typography::CAPTION),
                );

            let card_content = Column::new()
                .spacing(spacing::XS)
                .align_x(Horizontal::Center)
                .push(
                    Container::new(frame)
                        .width(Length::Fixed(card.width))
                        .height(Length::Fixed(card.height))
                        .align_x(Horizontal::Center)
                        .align_y(iced::alignment::Vertical::Center),
                )
                .push(caption);

            row = row.push(
                mouse_area(card_content)
                    .on_press(Message::OpenFullscreen(device.id()))
                    .interaction(mouse::Interaction::Pointer),
            );
        }
        grid = grid.push(row);
    }

    if devices.is_empty() {
        grid = grid.push(Text::new(i18n.tr("grid-empty")));
    }

    scrollable(Container::new(grid).width(Length::Fill).align_x(Horizontal::Center))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
