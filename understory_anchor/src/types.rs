// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for overlay placement: requests, anchors, and results.

use kurbo::{Insets, Rect, Size};

use crate::DEFAULT_HAIRLINE;
use crate::placement::default_overlay_height;

/// Vertical anchor of an overlay, measured from the matching viewport edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum VerticalAnchor {
    /// Distance from the top of the viewport to the top of the overlay.
    Top(f64),
    /// Distance from the bottom of the viewport to the bottom of the overlay.
    Bottom(f64),
}

/// Horizontal anchor of an overlay, measured from the matching viewport edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HorizontalAnchor {
    /// Distance from the left of the viewport to the left of the overlay.
    Left(f64),
    /// Distance from the right of the viewport to the right of the overlay.
    Right(f64),
}

/// Where an overlay sits in the viewport.
///
/// Each axis carries exactly one anchor. A missing `width` or `height` means the host should
/// fall back to the overlay's intrinsic (styled) size on that axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverlayRect {
    /// Vertical anchor.
    pub vertical: VerticalAnchor,
    /// Horizontal anchor.
    pub horizontal: HorizontalAnchor,
    /// Explicit width, if any.
    pub width: Option<f64>,
    /// Explicit height, if any.
    pub height: Option<f64>,
}

impl OverlayRect {
    /// Returns a copy moved by `dy` along the vertical axis (positive is downward).
    #[must_use]
    pub fn offset_vertical(self, dy: f64) -> Self {
        let vertical = match self.vertical {
            VerticalAnchor::Top(top) => VerticalAnchor::Top(top + dy),
            VerticalAnchor::Bottom(bottom) => VerticalAnchor::Bottom(bottom - dy),
        };
        Self { vertical, ..self }
    }

    /// Returns a copy moved by `dx` along the horizontal axis (positive is rightward).
    #[must_use]
    pub fn offset_horizontal(self, dx: f64) -> Self {
        let horizontal = match self.horizontal {
            HorizontalAnchor::Left(left) => HorizontalAnchor::Left(left + dx),
            HorizontalAnchor::Right(right) => HorizontalAnchor::Right(right - dx),
        };
        Self { horizontal, ..self }
    }

    /// Resolve the anchored rect into an absolute rectangle in viewport coordinates.
    ///
    /// `intrinsic` supplies the size used on any axis without an explicit dimension.
    #[must_use]
    pub fn resolve(&self, viewport: Size, intrinsic: Size) -> Rect {
        let width = self.width.unwrap_or(intrinsic.width);
        let height = self.height.unwrap_or(intrinsic.height);
        let x0 = match self.horizontal {
            HorizontalAnchor::Left(left) => left,
            HorizontalAnchor::Right(right) => viewport.width - right - width,
        };
        let y0 = match self.vertical {
            VerticalAnchor::Top(top) => top,
            VerticalAnchor::Bottom(bottom) => viewport.height - bottom - height,
        };
        Rect::new(x0, y0, x0 + width, y0 + height)
    }
}

/// Which side of the trigger the overlay opens on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpenDirection {
    /// The overlay starts just below the trigger.
    Below,
    /// The overlay ends at the trigger's top edge (clamped to the viewport).
    Above,
}

/// Which trigger edge the overlay is aligned with horizontally.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalSide {
    /// The overlay's left edge follows the trigger's left edge.
    Left,
    /// The overlay's right edge follows the trigger's right edge.
    Right,
}

/// Inputs to [`compute_placement`](crate::compute_placement).
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementRequest {
    /// Trigger rectangle in viewport coordinates.
    pub trigger: Rect,
    /// Size of the viewport the overlay is presented in.
    pub viewport: Size,
    /// Declared overlay height. `None` (or zero) falls back to `intrinsic_height`.
    pub overlay_height: Option<f64>,
    /// Height used when no height is declared.
    pub intrinsic_height: f64,
    /// Declared overlay width, carried explicitly when the overlay is right-anchored.
    pub overlay_width: Option<f64>,
    /// Insets of the trigger's container.
    ///
    /// Only the leading edge (`x0`) and the bottom edge (`y1`) are consulted.
    pub insets: Insets,
    /// Force the overlay to be exactly as wide as the trigger.
    pub auto_width: bool,
}

impl PlacementRequest {
    /// Create a request with no declared size, no insets, and auto width off.
    pub fn new(trigger: Rect, viewport: Size) -> Self {
        Self {
            trigger,
            viewport,
            overlay_height: None,
            intrinsic_height: default_overlay_height(DEFAULT_HAIRLINE),
            overlay_width: None,
            insets: Insets::ZERO,
            auto_width: false,
        }
    }

    /// Set the declared overlay height.
    #[must_use]
    pub fn with_overlay_height(mut self, height: f64) -> Self {
        self.overlay_height = Some(height);
        self
    }

    /// Set the declared overlay width.
    #[must_use]
    pub fn with_overlay_width(mut self, width: f64) -> Self {
        self.overlay_width = Some(width);
        self
    }

    /// Set the container insets.
    #[must_use]
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Set whether the overlay should match the trigger's width.
    #[must_use]
    pub fn with_auto_width(mut self, auto_width: bool) -> Self {
        self.auto_width = auto_width;
        self
    }

    /// The height the placement works with: the declared height, or the intrinsic one.
    pub fn resolved_height(&self) -> f64 {
        declared(self.overlay_height).unwrap_or(self.intrinsic_height)
    }

    /// The declared width, ignoring zero and NaN.
    pub fn resolved_width(&self) -> Option<f64> {
        declared(self.overlay_width)
    }
}

/// Zero and NaN count as "not declared".
fn declared(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Output of [`compute_placement`](crate::compute_placement).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Final overlay rect, possibly replaced by an [`AdjustFrame`](crate::AdjustFrame) hook.
    pub rect: OverlayRect,
    /// Vertical direction chosen before any adjustment.
    pub direction: OpenDirection,
    /// Horizontal side chosen before any adjustment.
    pub side: HorizontalSide,
    /// Whether an adjustment hook produced `rect`.
    pub adjusted: bool,
}
