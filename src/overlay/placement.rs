// SPDX-License-Identifier: MPL-2.0
//! Positioning of tooltips and popovers next to their anchor.

use crate::config::PLACEMENT_GAP;
use iced::{Point, Rectangle, Size};
use std::str::FromStr;

/// Side of the anchor the floating element is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl FromStr for Side {
    type Err = std::convert::Infallible;

    /// Unknown values fall back to [`Side::Top`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "bottom" => Side::Bottom,
            "left" => Side::Left,
            "right" => Side::Right,
            _ => Side::Top,
        })
    }
}

/// Top-left corner for an element of `size` placed on `side` of `anchor`,
/// separated by [`PLACEMENT_GAP`] and centred on the anchor's other axis.
#[must_use]
pub fn place(anchor: Rectangle, size: Size, side: Side) -> Point {
    let center_x = anchor.x + anchor.width / 2.0 - size.width / 2.0;
    let center_y = anchor.y + anchor.height / 2.0 - size.height / 2.0;

    match side {
        Side::Top => Point::new(center_x, anchor.y - size.height - PLACEMENT_GAP),
        Side::Bottom => Point::new(center_x, anchor.y + anchor.height + PLACEMENT_GAP),
        Side::Left => Point::new(anchor.x - size.width - PLACEMENT_GAP, center_y),
        Side::Right => Point::new(anchor.x + anchor.width + PLACEMENT_GAP, center_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> Rectangle {
        Rectangle::new(Point::new(100.0, 200.0), Size::new(40.0, 20.0))
    }

    #[test]
    fn top_placement_sits_above_with_gap() {
        let point = place(anchor(), Size::new(60.0, 30.0), Side::Top);
        assert_eq!(point, Point::new(90.0, 160.0));
    }

    #[test]
    fn bottom_placement_sits_below_with_gap() {
        let point = place(anchor(), Size::new(60.0, 30.0), Side::Bottom);
        assert_eq!(point, Point::new(90.0, 230.0));
    }

    #[test]
    fn left_and_right_center_vertically() {
        let size = Size::new(50.0, 10.0);
        assert_eq!(place(anchor(), size, Side::Left), Point::new(40.0, 205.0));
        assert_eq!(place(anchor(), size, Side::Right), Point::new(150.0, 205.0));
    }

    #[test]
    fn unknown_side_defaults_to_top() {
        assert_eq!("diagonal".parse::<Side>(), Ok(Side::Top));
        assert_eq!(" Right ".parse::<Side>(), Ok(Side::Right));
    }
}
