// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style overrides the dropdown understands.
//!
//! Only the properties that affect placement or that the headless views carry through are
//! modelled here; everything else about appearance belongs to the host's styling system.

use kurbo::Insets;

/// An 8-bit RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// CSS `gray`.
    pub const GRAY: Self = Self::new(128, 128, 128, 255);
    /// CSS `lightgray`.
    pub const LIGHT_GRAY: Self = Self::new(211, 211, 211, 255);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Text appearance. Unset fields inherit from whatever the style is merged over.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TextStyle {
    /// Font size in logical pixels.
    pub font_size: Option<f64>,
    /// Text color.
    pub color: Option<Rgba8>,
    /// Background behind the text.
    pub background: Option<Rgba8>,
    /// Horizontal padding.
    pub padding_horizontal: Option<f64>,
    /// Vertical padding.
    pub padding_vertical: Option<f64>,
}

impl TextStyle {
    /// Trigger text.
    pub const BUTTON: Self = Self {
        font_size: Some(12.0),
        color: None,
        background: None,
        padding_horizontal: None,
        padding_vertical: None,
    };

    /// Default row text.
    pub const ROW: Self = Self {
        font_size: Some(11.0),
        color: Some(Rgba8::GRAY),
        background: Some(Rgba8::WHITE),
        padding_horizontal: Some(6.0),
        padding_vertical: Some(10.0),
    };

    /// Extra styling for the highlighted (selected) row.
    pub const HIGHLIGHTED_ROW: Self = Self {
        font_size: None,
        color: Some(Rgba8::BLACK),
        background: None,
        padding_horizontal: None,
        padding_vertical: None,
    };

    /// Layer `over` on top of `self`; fields set in `over` win.
    #[must_use]
    pub fn merge(self, over: &Self) -> Self {
        Self {
            font_size: over.font_size.or(self.font_size),
            color: over.color.or(self.color),
            background: over.background.or(self.background),
            padding_horizontal: over.padding_horizontal.or(self.padding_horizontal),
            padding_vertical: over.padding_vertical.or(self.padding_vertical),
        }
    }
}

/// Box model of a container: size, border, and padding.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoxStyle {
    /// Declared width.
    pub width: Option<f64>,
    /// Declared height.
    pub height: Option<f64>,
    /// Border width on every edge.
    pub border_width: Option<f64>,
    /// Padding on every edge.
    pub padding: Option<f64>,
    /// Padding on the left and right edges.
    pub padding_horizontal: Option<f64>,
    /// Padding on the top and bottom edges.
    pub padding_vertical: Option<f64>,
    /// Padding on the left edge.
    pub padding_left: Option<f64>,
    /// Padding on the bottom edge.
    pub padding_bottom: Option<f64>,
}

impl BoxStyle {
    /// Border plus the most specific left padding.
    pub fn leading_inset(&self) -> f64 {
        let padding = self
            .padding_left
            .or(self.padding_horizontal)
            .or(self.padding)
            .unwrap_or(0.0);
        self.border_width.unwrap_or(0.0) + padding
    }

    /// Border plus the most specific bottom padding.
    pub fn bottom_inset(&self) -> f64 {
        let padding = self
            .padding_bottom
            .or(self.padding_vertical)
            .or(self.padding)
            .unwrap_or(0.0);
        self.border_width.unwrap_or(0.0) + padding
    }

    /// Insets as consumed by placement: leading edge in `x0`, bottom edge in `y1`.
    pub fn insets(&self) -> Insets {
        Insets::new(self.leading_inset(), 0.0, 0.0, self.bottom_inset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_the_overlay_fields() {
        let caller = TextStyle {
            color: Some(Rgba8::new(10, 20, 30, 255)),
            ..TextStyle::default()
        };
        let merged = TextStyle::ROW.merge(&caller).merge(&TextStyle::HIGHLIGHTED_ROW);
        assert_eq!(merged.color, Some(Rgba8::BLACK));
        assert_eq!(merged.font_size, Some(11.0));
        assert_eq!(merged.background, Some(Rgba8::WHITE));

        let unhighlighted = TextStyle::ROW.merge(&caller);
        assert_eq!(unhighlighted.color, Some(Rgba8::new(10, 20, 30, 255)));
    }

    #[test]
    fn insets_use_the_most_specific_padding() {
        let style = BoxStyle {
            border_width: Some(1.0),
            padding: Some(8.0),
            padding_horizontal: Some(4.0),
            ..BoxStyle::default()
        };
        assert_eq!(style.leading_inset(), 5.0);
        assert_eq!(style.bottom_inset(), 9.0);

        let specific = BoxStyle {
            padding_left: Some(2.0),
            padding_bottom: Some(3.0),
            ..style
        };
        assert_eq!(specific.insets(), Insets::new(3.0, 0.0, 0.0, 4.0));
        assert_eq!(BoxStyle::default().insets(), Insets::ZERO);
    }
}
