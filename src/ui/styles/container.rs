// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Toolbar surface, derived from the active theme background.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color { a: opacity::SURFACE, ..base })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Device body around the screen. `corner` is the scaled outer radius.
pub fn bezel(corner: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::BEZEL)),
        border: Border {
            color: palette::BEZEL_EDGE,
            width: border::WIDTH_MD,
            radius: corner.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Screen area inside the bezel.
pub fn screen(corner: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(palette.background.base.color)),
            text_color: Some(palette.background.base.text),
            border: Border {
                radius: corner.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Solid hardware detail (notch, island, camera, home button).
pub fn ornament(corner: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::BEZEL)),
        border: Border {
            color: palette::BEZEL_EDGE,
            width: border::WIDTH_SM,
            radius: corner.into(),
        },
        ..Default::default()
    }
}

/// Brushed metal of a laptop deck or a desktop stand.
pub fn metal(corner: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::ALUMINIUM)),
        border: Border {
            radius: corner.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Darkening layer; `alpha` 0 is fully transparent.
pub fn scrim(alpha: f32, corner: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha.clamp(opacity::TRANSPARENT, opacity::OPAQUE),
            ..palette::BLACK
        })),
        border: Border {
            radius: corner.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Message card shown on a failed preview.
pub fn failure(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border: Border {
            color: crate::ui::design_tokens::palette::ERROR_500,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
