// SPDX-License-Identifier: MPL-2.0
//! Surfaces for modals, offcanvas panels, dropdowns, popovers and tooltips.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK},
    radius, shadow,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed layer behind a modal or offcanvas panel.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        ..Default::default()
    }
}

fn surface(theme: &Theme, rad: f32, elevation: iced::Shadow) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: rad.into(),
        },
        shadow: elevation,
        ..Default::default()
    }
}

/// Modal dialog body.
pub fn modal(theme: &Theme) -> container::Style {
    surface(theme, radius::MD, shadow::LG)
}

/// Offcanvas side panel. Square corners, it is flush with the window edge.
pub fn offcanvas(theme: &Theme) -> container::Style {
    surface(theme, 0.0, shadow::LG)
}

/// Dropdown menus and popovers.
pub fn floating(theme: &Theme) -> container::Style {
    surface(theme, radius::SM, shadow::MD)
}

/// Tooltip bubble. Inverted colors so it reads on any background.
pub fn tooltip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Sidebar and submenu panel.
pub fn sidebar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}
