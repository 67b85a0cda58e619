// SPDX-License-Identifier: MPL-2.0
//! Carousel layout: the three selected devices on a turning circle.
//!
//! Placements come from [`crate::layout::carousel`]. The flat projection
//! folds depth into scale, the facing rotation into a horizontal squeeze
//! and opacity into a darkening scrim.

use crate::app::orchestrator::{self, Message};
use crate::domain::device::{catalog, CarouselCategory, Orientation};
use crate::i18n::fluent::I18n;
use crate::layout::carousel::{self as positioner, Placement};
use crate::layout::scale;
use crate::ui::design_tokens::{opacity, spacing, typography};
use crate::ui::device_frame;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{mouse_area, Column, Container, Stack, Text};
use iced::{mouse, Element, Length, Padding, Size};

/// Share of the area one device may occupy before placement scaling.
const SLOT_WIDTH_SHARE: f32 = 0.42;
const SLOT_HEIGHT_SHARE: f32 = 0.72;

/// How much depth lifts a slot toward the horizon.
const DEPTH_LIFT: f32 = 0.4;

/// Render the carousel for the area left below the toolbar.
pub fn view<'a>(
    state: &'a orchestrator::State,
    i18n: &'a I18n,
    area: Size,
) -> Element<'a, Message> {
    let angle = state.carousel_angle();
    let slot_box = Size::new(area.width * SLOT_WIDTH_SHARE, area.height * SLOT_HEIGHT_SHARE);

    let mut stage = Stack::new().width(Length::Fill).height(Length::Fill);
    for slot in positioner::draw_order(angle) {
        let category = CarouselCategory::ALL[slot];
        let device_id = state.selection().get(category);
        let Some(device) = catalog::find(device_id) else {
            continue;
        };
        let placement = positioner::place(slot, angle);
        let fit = scale::fit_scale(device, Orientation::Portrait, slot_box, state.max_scale());

        let frame = device_frame::view(device_frame::ViewContext {
            i18n,
            device,
            orientation: Orientation::Portrait,
            scale: (fit * placement.scale).max(scale::MIN_SCALE),
            preview: state.preview(device_id),
            squeeze: positioner::perspective_squeeze(&placement),
            dim: opacity::OPAQUE - placement.opacity,
        });

        let clickable = mouse_area(frame)
            .on_press(Message::OpenLightbox(device_id))
            .interaction(mouse::Interaction::Pointer);

        stage = stage.push(
            Container::new(clickable)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .padding(slot_offset(&placement)),
        );
    }

    let front = CarouselCategory::ALL[positioner::front_slot(angle)];
    let caption = Text::new(format!(
        "{} · {}",
        i18n.tr(front.i18n_key()),
        state.selection().get(front)
    ))
    .size(typography::BODY);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(stage)
        .push(caption)
        .into()
}

/// Padding that moves a centered slot by its placement offset.
///
/// Padding one side by `2d` shifts the center of the remaining space by `d`.
fn slot_offset(placement: &Placement) -> Padding {
    let lift = -placement.z * DEPTH_LIFT * 2.0;
    let horizontal = placement.x * 2.0;
    Padding {
        top: 0.0,
        right: (-horizontal).max(0.0),
        bottom: lift.max(0.0),
        left: horizontal.max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_slot_is_not_offset() {
        let padding = slot_offset(&positioner::place(0, 0.0));
        assert!(padding.left.abs() < 1e-3);
        assert!(padding.right.abs() < 1e-3);
        assert!(padding.bottom.abs() < 1e-3);
    }

    #[test]
    fn side_slots_move_in_opposite_directions() {
        let right = slot_offset(&positioner::place(1, 0.0));
        let left = slot_offset(&positioner::place(2, 0.0));
        assert!(right.left > 0.0 && right.right == 0.0);
        assert!(left.right > 0.0 && left.left == 0.0);
        assert!(right.bottom > 0.0, "back slots are lifted");
    }
}
