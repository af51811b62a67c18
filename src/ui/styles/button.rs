// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn filled(fill: Color, hover: Color, text_color: Color, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(fill)),
            text_color,
            border: Border {
                color: fill,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover)),
            text_color,
            border: Border {
                color: fill,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Main call to action (save, next, finish).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::PRIMARY_500, palette::PRIMARY_400, WHITE, status)
}

/// Destructive or failing action.
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::DANGER_500, palette::DANGER_500, WHITE, status)
}

/// Active tab, expanded accordion header, current sidebar item.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    primary(theme, status)
}

/// Secondary actions and inactive members of single-open groups.
/// Adapts to light/dark theme.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;

    let (bg_color, text_color, hover_bg) = if is_light {
        (palette::GRAY_100, palette::GRAY_900, palette::GRAY_200)
    } else {
        (palette::GRAY_700, WHITE, palette::GRAY_900)
    };

    let mut style = filled(bg_color, hover_bg, text_color, status);
    if !matches!(status, button::Status::Disabled) {
        style.border.color = if matches!(status, button::Status::Hovered) {
            palette::PRIMARY_500
        } else {
            palette::GRAY_400
        };
    }
    style
}

/// Borderless item inside a dropdown menu or the sidebar.
pub fn menu_item(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.palette().text;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: 0.12,
            ..palette::PRIMARY_500
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
