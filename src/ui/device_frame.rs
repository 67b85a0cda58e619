// SPDX-License-Identifier: MPL-2.0
//! A device mockup with its preview viewport.
//!
//! The frame is a bezel container holding the screen, with the ornaments
//! from [`Chrome`] stacked on top. Laptops get a keyboard deck and desktops
//! a stand below the frame.

use crate::app::orchestrator::Message;
use crate::application::port::{LoadError, LoadedContent};
use crate::domain::device::{DeviceDescriptor, Orientation};
use crate::i18n::fluent::I18n;
use crate::preview::chrome::{Chrome, Ornament};
use crate::preview::{self, Phase};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{Element, Length, Padding};

/// Contextual data needed to render one device.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub device: &'static DeviceDescriptor,
    pub orientation: Orientation,
    pub scale: f32,
    /// Mounted preview; `None` draws a switched-off screen.
    pub preview: Option<&'a preview::State>,
    /// Horizontal compression in `(0, 1]` simulating a turned device.
    pub squeeze: f32,
    /// Darkening applied over the whole mockup, `0.0` for none.
    pub dim: f32,
}

/// Render a device mockup.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let chrome = Chrome::new(ctx.device, ctx.orientation, ctx.scale);
    let squeeze = ctx.squeeze.clamp(0.05, 1.0);
    let frame_width = chrome.frame_width() * squeeze;
    let frame_height = chrome.frame_height();
    let screen_corner = (chrome.radius - chrome.bezel).max(0.0);

    let screen = Container::new(screen_content(&ctx, chrome.scale))
        .width(Length::Fixed(chrome.screen_width * squeeze))
        .height(Length::Fixed(chrome.screen_height))
        .clip(true)
        .style(styles::container::screen(screen_corner));

    let body = Container::new(screen)
        .width(Length::Fixed(frame_width))
        .height(Length::Fixed(frame_height))
        .padding(Padding {
            top: chrome.bezel,
            right: chrome.bezel * squeeze,
            bottom: chrome.bezel,
            left: chrome.bezel * squeeze,
        })
        .style(styles::container::bezel(chrome.radius));

    let mut frame = Stack::new().push(body);
    for ornament in &chrome.ornaments {
        if let Some(layer) = ornament_layer(*ornament, &chrome, squeeze) {
            frame = frame.push(layer);
        }
    }
    if ctx.dim > opacity::TRANSPARENT {
        frame = frame.push(
            Container::new(Text::new(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::scrim(ctx.dim, chrome.radius)),
        );
    }

    let mut mockup = Column::new().align_x(Horizontal::Center).push(frame);
    if chrome.has(Ornament::KeyboardDeck) {
        mockup = mockup.push(
            Container::new(Text::new(""))
                .width(Length::Fixed(frame_width * 1.12))
                .height(Length::Fixed(sizing::KEYBOARD_DECK_HEIGHT * chrome.scale))
                .style(styles::container::metal(chrome.bezel)),
        );
    }
    if chrome.has(Ornament::Stand) {
        mockup = mockup
            .push(
                Container::new(Text::new(""))
                    .width(Length::Fixed(sizing::STAND_WIDTH * 0.3 * chrome.scale * squeeze))
                    .height(Length::Fixed(sizing::STAND_HEIGHT * chrome.scale))
                    .style(styles::container::metal(0.0)),
            )
            .push(
                Container::new(Text::new(""))
                    .width(Length::Fixed(sizing::STAND_WIDTH * chrome.scale * squeeze))
                    .height(Length::Fixed(sizing::KEYBOARD_DECK_HEIGHT * 0.5 * chrome.scale))
                    .style(styles::container::metal(chrome.bezel * 0.5)),
            );
    }

    mockup.into()
}

/// Positions one ornament over the frame, or `None` for ornaments drawn
/// below it.
fn ornament_layer<'a>(
    ornament: Ornament,
    chrome: &Chrome,
    squeeze: f32,
) -> Option<Element<'a, Message>> {
    let scale = chrome.scale;
    let (width, height, align_x, align_y, padding) = match ornament {
        Ornament::Notch => (
            sizing::NOTCH_WIDTH * scale,
            sizing::NOTCH_HEIGHT * scale,
            Horizontal::Center,
            Vertical::Top,
            Padding::ZERO.top(chrome.bezel),
        ),
        Ornament::DynamicIsland => (
            sizing::ISLAND_WIDTH * scale,
            sizing::ISLAND_HEIGHT * scale,
            Horizontal::Center,
            Vertical::Top,
            Padding::ZERO.top(chrome.bezel + spacing::XS * scale),
        ),
        Ornament::HomeButton | Ornament::CameraDot => {
            let size = if ornament == Ornament::HomeButton {
                (chrome.bezel * 0.8).min(sizing::HOME_BUTTON * scale)
            } else {
                (chrome.bezel * 0.4).min(sizing::CAMERA_DOT * scale)
            };
            let inset = (chrome.bezel - size) / 2.0;
            // Home button sits in the chin, camera in the forehead.
            let at_end = ornament == Ornament::HomeButton;
            if chrome.landscape {
                let align = if at_end { Horizontal::Right } else { Horizontal::Left };
                let padding = if at_end {
                    Padding::ZERO.right(inset * squeeze)
                } else {
                    Padding::ZERO.left(inset * squeeze)
                };
                (size, size, align, Vertical::Center, padding)
            } else {
                let align = if at_end { Vertical::Bottom } else { Vertical::Top };
                let padding = if at_end {
                    Padding::ZERO.bottom(inset)
                } else {
                    Padding::ZERO.top(inset)
                };
                (size, size, Horizontal::Center, align, padding)
            }
        }
        Ornament::KeyboardDeck | Ornament::Stand => return None,
    };

    let corner = height.min(width) / 2.0;
    let detail = Container::new(Text::new(""))
        .width(Length::Fixed(width * squeeze))
        .height(Length::Fixed(height))
        .style(styles::container::ornament(corner));

    Some(
        Container::new(detail)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(align_x)
            .align_y(align_y)
            .padding(padding)
            .into(),
    )
}

fn screen_content<'a>(ctx: &ViewContext<'a>, scale: f32) -> Element<'a, Message> {
    let Some(preview) = ctx.preview else {
        return Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &iced::Theme| iced::widget::container::Style {
                background: Some(iced::Background::Color(palette::SCREEN_OFF)),
                ..Default::default()
            })
            .into();
    };

    let body: Element<'a, Message> = match preview.phase() {
        Phase::Loading => Text::new(ctx.i18n.tr("preview-loading"))
            .size(typography::BODY)
            .into(),
        Phase::Loaded => loaded_summary(ctx.i18n, preview, scale),
        Phase::Failed(kind) => {
            let retry = button(Text::new(ctx.i18n.tr("preview-retry")).size(typography::BODY_SM))
                .padding(spacing::XS)
                .on_press(Message::Preview(preview.device(), preview::Message::Retry))
                .style(styles::button::overlay(
                    palette::WHITE,
                    opacity::OVERLAY_STRONG,
                    opacity::OVERLAY_HOVER,
                ));

            let mut card = Column::new()
                .spacing(spacing::XS)
                .align_x(Horizontal::Center)
                .push(Text::new(ctx.i18n.tr(kind.i18n_key())).size(typography::BODY_SM));
            if let Some(err) = preview.error() {
                card = card.push(Text::new(error_detail(ctx.i18n, err)).size(typography::CAPTION));
            }
            Container::new(card.push(retry))
                .padding(spacing::SM)
                .style(styles::container::failure)
                .into()
        }
    };

    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XS)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn loaded_summary<'a>(i18n: &I18n, preview: &preview::State, scale: f32) -> Element<'a, Message> {
    let Some(content) = preview.content() else {
        return Text::new(i18n.tr("preview-loaded")).into();
    };

    let heading = content
        .title
        .clone()
        .unwrap_or_else(|| host_of(content).to_owned());
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(heading).size(typography::TITLE_SM));

    // Detail lines are unreadable on thumbnails.
    if scale >= 0.3 {
        let status = content.status.to_string();
        let size = format_bytes(content.bytes);
        column = column
            .push(Text::new(content.final_url.clone()).size(typography::CAPTION))
            .push(
                Text::new(i18n.tr_with_args(
                    "preview-summary",
                    &[("status", status.as_str()), ("size", size.as_str())],
                ))
                .size(typography::CAPTION),
            );
    }
    column.into()
}

fn host_of(content: &LoadedContent) -> &str {
    content
        .final_url
        .split("://")
        .nth(1)
        .and_then(|rest| rest.split('/').next())
        .unwrap_or(&content.final_url)
}

/// Localized technical detail for a load error.
pub fn error_detail(i18n: &I18n, err: &LoadError) -> String {
    match err {
        LoadError::Status(code) => {
            let code = code.to_string();
            i18n.tr_with_args(err.i18n_key(), &[("status", code.as_str())])
        }
        LoadError::Transport(detail) => {
            i18n.tr_with_args(err.i18n_key(), &[("detail", detail.as_str())])
        }
        LoadError::Timeout => i18n.tr(err.i18n_key()),
    }
}

/// Human-readable size using binary multiples.
#[must_use]
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 3] = ["B", "KB", "MB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
