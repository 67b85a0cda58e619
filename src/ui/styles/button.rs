// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the selected option of a toggle group, and for primary actions.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (background, border_color, shadow) = match status {
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::SM),
        button::Status::Disabled => {
            let bg = if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            };
            (bg, palette::GRAY_400, iced::Shadow::default())
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if status == button::Status::Disabled {
            palette::GRAY_400
        } else {
            WHITE
        },
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        ..Default::default()
    }
}

/// Style for the other options of a toggle group.
/// Adapts to light/dark theme.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    let (background, border_color) = match status {
        button::Status::Hovered => {
            let hover_bg = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            (hover_bg, palette::PRIMARY_500)
        }
        _ => (bg_color, palette::GRAY_400),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if status == button::Status::Disabled {
            palette::GRAY_400
        } else {
            text_color
        },
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Picks [`selected`] or [`unselected`].
pub fn toggle(is_selected: bool) -> fn(&Theme, button::Status) -> button::Style {
    if is_selected {
        selected
    } else {
        unselected
    }
}

/// Translucent button drawn over a preview (retry, close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OPAQUE,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::SM,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_button_uses_brand_colors() {
        let style = selected(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::PRIMARY_500)));
    }

    #[test]
    fn toggle_switches_between_styles() {
        let theme = Theme::Light;
        let on = toggle(true)(&theme, button::Status::Active);
        let off = toggle(false)(&theme, button::Status::Active);
        assert_ne!(on.background, off.background);
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let style_fn = overlay(WHITE, 0.5, 0.8);
        let normal = style_fn(&Theme::Dark, button::Status::Active);
        let hover = style_fn(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }
}
