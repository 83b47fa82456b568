// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing, sizes and type scale of the home page.

## Organization

- **Palette**: Base colors (near-black surfaces, brand red)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes (cards, hero, navbar, modal)
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_flix::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Dim the page behind the detail modal
let backdrop = Color {
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
    /// Page background (#141414).
    pub const PAGE_900: Color = Color::from_rgb(0.078, 0.078, 0.078);
    /// Modal panel surface (#181818).
    pub const SURFACE_850: Color = Color::from_rgb(0.094, 0.094, 0.094);
    /// Card placeholder and menu surface (#2f2f2f).
    pub const GRAY_800: Color = Color::from_rgb(0.184, 0.184, 0.184);
    pub const GRAY_600: Color = Color::from_rgb(0.427, 0.427, 0.431);
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.6);
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.8, 0.8);

    // Brand
    /// Wordmark and avatar red (#e50914).
    pub const BRAND_RED: Color = Color::from_rgb(0.898, 0.035, 0.078);
    /// "% Match" green (#46d369).
    pub const MATCH_GREEN: Color = Color::from_rgb(0.275, 0.827, 0.412);
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
    pub const OVERLAY_PRESSED: f32 = 0.9;
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
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Content cards (2:3 poster)
    pub const CARD_WIDTH: f32 = 180.0;
    pub const CARD_HEIGHT: f32 = 270.0;
    /// Scale applied to a hovered card.
    pub const CARD_HOVER_SCALE: f32 = 1.1;
    pub const CARD_GAP: f32 = 8.0;

    // Rows
    pub const ROW_ARROW_WIDTH: f32 = 48.0;
    pub const ROW_HORIZONTAL_PADDING: f32 = 48.0;

    // Hero
    pub const HERO_HEIGHT: f32 = 560.0;
    pub const HERO_TEXT_WIDTH: f32 = 560.0;
    pub const HERO_DOT: f32 = 10.0;

    // Chrome
    pub const NAVBAR_HEIGHT: f32 = 68.0;
    pub const AVATAR: f32 = 32.0;
    pub const ROUND_BUTTON: f32 = 36.0;
    pub const BUTTON_HEIGHT: f32 = 40.0;

    // Modal
    pub const MODAL_WIDTH: f32 = 850.0;
    pub const MODAL_BACKDROP_HEIGHT: f32 = 400.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero title
    pub const DISPLAY: f32 = 48.0;

    /// Modal title, brand wordmark
    pub const TITLE_LG: f32 = 30.0;

    /// Row headings
    pub const TITLE_MD: f32 = 20.0;

    pub const BODY_LG: f32 = 18.0;

    pub const BODY: f32 = 14.0;

    /// Badges and card overlay details
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
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

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
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

    assert!(sizing::CARD_HOVER_SCALE > 1.0);
    assert!(sizing::CARD_HEIGHT > sizing::CARD_WIDTH);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);
};
