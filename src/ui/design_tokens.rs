// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing and sizes shared by every widget of the maintenance console.

## Organization

- **Palette**: Base and semantic colors
- **Opacity**: Standardized opacity levels, including backdrops
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Overlay and control sizes
- **Typography**: Font size scale
- **Border**, **Radius**, **Shadow**

## Examples

```
use maintech_ui::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};
assert!(backdrop.a < 1.0);
assert_eq!(spacing::MD, 16.0);
```
"#]

use iced::Color;

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.129, 0.145, 0.161);
    pub const GRAY_700: Color = Color::from_rgb(0.286, 0.314, 0.341);
    pub const GRAY_400: Color = Color::from_rgb(0.545, 0.573, 0.604);
    pub const GRAY_200: Color = Color::from_rgb(0.914, 0.925, 0.937);
    pub const GRAY_100: Color = Color::from_rgb(0.973, 0.976, 0.980);

    // Brand
    pub const PRIMARY_400: Color = Color::from_rgb(0.239, 0.545, 0.992);
    pub const PRIMARY_500: Color = Color::from_rgb(0.051, 0.431, 0.992);
    pub const PRIMARY_700: Color = Color::from_rgb(0.031, 0.259, 0.596);

    // Semantic
    pub const SUCCESS_500: Color = Color::from_rgb(0.098, 0.529, 0.329);
    pub const INFO_500: Color = Color::from_rgb(0.051, 0.792, 0.941);
    pub const WARNING_500: Color = Color::from_rgb(1.0, 0.757, 0.027);
    pub const DANGER_500: Color = Color::from_rgb(0.863, 0.208, 0.271);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Modal and offcanvas backdrops.
    pub const BACKDROP: f32 = 0.6;
    /// Toasts before they finish fading in or while fading out.
    pub const FADING: f32 = 0.4;
    pub const OPAQUE: f32 = 1.0;
}

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    pub const SIDEBAR_WIDTH: f32 = 240.0;
    pub const SUBMENU_WIDTH: f32 = 220.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const MODAL_WIDTH: f32 = 560.0;
    pub const OFFCANVAS_WIDTH: f32 = 360.0;
    pub const DROPDOWN_WIDTH: f32 = 200.0;
    pub const POPOVER_WIDTH: f32 = 260.0;
}

pub mod typography {
    /// Dialog and page titles
    pub const TITLE_MD: f32 = 20.0;

    /// Section headers, toast titles
    pub const TITLE_SM: f32 = 16.0;

    /// Most UI text
    pub const BODY: f32 = 14.0;

    /// Field errors, hints
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

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
        blur_radius: 16.0,
    };
}

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > opacity::OVERLAY_MEDIUM && opacity::BACKDROP < 1.0);

    assert!(sizing::MODAL_WIDTH > sizing::OFFCANVAS_WIDTH);
    assert!(sizing::POPOVER_WIDTH > sizing::DROPDOWN_WIDTH);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
