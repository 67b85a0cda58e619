// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared colors, spacing and sizes for every view of the mockup window.

## Organization

- **Palette**: Base colors, including device hardware tones
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component and ornament sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_mockup::ui::design_tokens::{palette, opacity, spacing};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);

    // Device hardware
    pub const BEZEL: Color = Color::from_rgb(0.08, 0.08, 0.09);
    pub const BEZEL_EDGE: Color = Color::from_rgb(0.22, 0.22, 0.24);
    pub const ALUMINIUM: Color = Color::from_rgb(0.72, 0.73, 0.75);
    pub const SCREEN_OFF: Color = Color::from_rgb(0.04, 0.04, 0.05);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Height of the toolbar strip above the previews, room for the URL
    /// error line included.
    pub const TOOLBAR_HEIGHT: f32 = 128.0;

    /// Width of the device name field in the carousel selectors.
    pub const DEVICE_PICKER_WIDTH: f32 = 200.0;

    // Ornaments, in device pixels before scaling
    pub const NOTCH_WIDTH: f32 = 160.0;
    pub const NOTCH_HEIGHT: f32 = 30.0;
    pub const ISLAND_WIDTH: f32 = 120.0;
    pub const ISLAND_HEIGHT: f32 = 35.0;
    pub const HOME_BUTTON: f32 = 50.0;
    pub const CAMERA_DOT: f32 = 12.0;
    pub const KEYBOARD_DECK_HEIGHT: f32 = 24.0;
    pub const STAND_WIDTH: f32 = 360.0;
    pub const STAND_HEIGHT: f32 = 90.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for the toolbar, card captions and preview messages.

    /// Medium title - App name, prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Page title inside a preview
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Device dimensions, status lines
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(sizing::ISLAND_WIDTH < sizing::NOTCH_WIDTH);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
