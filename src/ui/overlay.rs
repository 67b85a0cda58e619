// SPDX-License-Identifier: MPL-2.0
//! Fullscreen (grid) and lightbox (carousel) views of a single device.
//!
//! Both draw the device as large as the window allows over a scrim. A click
//! on the scrim, the close button or `Escape` dismisses them.

use crate::app::orchestrator::{self, Message};
use crate::domain::device::{catalog, DeviceId, Orientation};
use crate::i18n::fluent::I18n;
use crate::layout::scale;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::device_frame;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, Column, Container, Row, Space, Stack, Text};
use iced::{mouse, Element, Length, Size};

/// Which single-device view is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Fullscreen,
    Lightbox,
}

impl Kind {
    fn close_message(self) -> Message {
        match self {
            Kind::Fullscreen => Message::CloseFullscreen,
            Kind::Lightbox => Message::CloseLightbox,
        }
    }
}

/// Returns the open overlay, if any.
#[must_use]
pub fn active(state: &orchestrator::State) -> Option<(Kind, DeviceId)> {
    state
        .lightbox_device()
        .map(|device| (Kind::Lightbox, device))
        .or_else(|| state.fullscreen_device().map(|device| (Kind::Fullscreen, device)))
}

/// Render the overlay for `device` over the whole window.
pub fn view<'a>(
    state: &'a orchestrator::State,
    i18n: &'a I18n,
    kind: Kind,
    device_id: DeviceId,
    viewport: Size,
) -> Option<Element<'a, Message>> {
    let device = catalog::find(device_id)?;
    // The lightbox shows carousel devices upright.
    let orientation = match kind {
        Kind::Fullscreen => state.orientation(),
        Kind::Lightbox => Orientation::Portrait,
    };
    let fit = scale::fit_scale(
        device,
        orientation,
        scale::overlay_box(viewport),
        state.max_scale(),
    );

    let frame = device_frame::view(device_frame::ViewContext {
        i18n,
        device,
        orientation,
        scale: fit,
        preview: state.preview(device_id),
        squeeze: 1.0,
        dim: 0.0,
    });

    let (width, height) = device.screen_size(orientation);
    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Text::new(format!("{} · {width} × {height}", device.name))
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("overlay-close")).size(typography::BODY))
                .padding(spacing::XS)
                .on_press(kind.close_message())
                .style(styles::button::overlay(
                    palette::WHITE,
                    opacity::OVERLAY_MEDIUM,
                    opacity::OVERLAY_HOVER,
                )),
        );

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(header)
        .push(
            // Claims the cursor so clicks on the device do not reach the scrim.
            Container::new(mouse_area(frame).interaction(mouse::Interaction::Idle))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );

    let scrim = mouse_area(
        Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::scrim(opacity::OVERLAY_HOVER, 0.0)),
    )
    .on_press(kind.close_message());

    Some(Stack::new().push(scrim).push(content).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::LayoutMode;

    #[test]
    fn lightbox_takes_precedence_over_fullscreen() {
        let overrides = orchestrator::Overrides {
            layout: Some(LayoutMode::Carousel),
            ..Default::default()
        };
        let (mut state, _) = orchestrator::State::new(&Config::default(), overrides);
        assert_eq!(active(&state), None);

        let phone = state
            .selection()
            .get(crate::domain::device::CarouselCategory::Phone);
        state.handle(Message::OpenLightbox(phone));
        assert_eq!(active(&state), Some((Kind::Lightbox, phone)));
    }

    #[test]
    fn close_messages_match_kind() {
        assert!(matches!(Kind::Fullscreen.close_message(), Message::CloseFullscreen));
        assert!(matches!(Kind::Lightbox.close_message(), Message::CloseLightbox));
    }
}
