// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

All of the dashboard's design tokens in one place.

## Organization

- **Palette**: Base colors (near-black surfaces, lime accent)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use asset_deck::ui::design_tokens::{palette, spacing, opacity};
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
    pub const GRAY_950: Color = Color::from_rgb(0.004, 0.004, 0.004); // #010101
    pub const GRAY_900: Color = Color::from_rgb(0.094, 0.094, 0.094); // #181818
    pub const GRAY_800: Color = Color::from_rgb(0.157, 0.157, 0.157); // #282828
    pub const GRAY_700: Color = Color::from_rgb(0.2, 0.2, 0.2); // #333333
    pub const GRAY_400: Color = Color::from_rgb(0.533, 0.533, 0.533); // #888888
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.941, 0.941, 0.941); // #F0F0F0

    // Brand accent (lime)
    pub const ACCENT_300: Color = Color::from_rgb(0.937, 1.0, 0.4);
    pub const ACCENT_500: Color = Color::from_rgb(0.898, 1.0, 0.0); // #E5FF00
    pub const ACCENT_700: Color = Color::from_rgb(0.698, 0.78, 0.0);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
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
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    // Navigation
    pub const NAV_ITEM_HEIGHT: f32 = 40.0;

    // Asset cards
    pub const CARD_WIDTH: f32 = 220.0;
    pub const CARD_THUMB_HEIGHT: f32 = 124.0;
    pub const LIST_THUMB_WIDTH: f32 = 96.0;
    pub const LIST_THUMB_HEIGHT: f32 = 54.0;

    // Component widths
    pub const ELEMENTS_BAR_WIDTH: f32 = 64.0;
    pub const SIDEBAR_WIDTH: f32 = 271.0;
    pub const SETTINGS_PANEL_WIDTH: f32 = 420.0;
    pub const EDITOR_PANEL_WIDTH: f32 = 380.0;
    pub const DIALOG_WIDTH: f32 = 460.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: Page, panel and section headings
    //! - Body: Primary content text
    //! - Caption: Badges, timestamps, small info

    /// Large title - Page headings ("All Assets")
    pub const TITLE_LG: f32 = 24.0;

    /// Medium title - Panel and dialog headings
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Navigation items, form inputs
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Badges, timestamps, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Separators, input fields, cards
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Selected cards, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 10.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
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
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Sizing validation
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::CARD_THUMB_HEIGHT < sizing::CARD_WIDTH);
    assert!(sizing::ELEMENTS_BAR_WIDTH < sizing::SIDEBAR_WIDTH);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::ACCENT_500.g >= 0.0 && palette::ACCENT_500.g <= 1.0);
};
