// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The placement algorithm.

use crate::types::{
    HorizontalAnchor, HorizontalSide, OpenDirection, OverlayRect, Placement, PlacementRequest,
    VerticalAnchor,
};

/// Height of one default row, in logical pixels.
pub const DEFAULT_ROW_EXTENT: f64 = 33.0;

/// Number of default rows visible in an overlay with no declared height.
pub const DEFAULT_VISIBLE_ROWS: u32 = 5;

/// Default hairline (separator) thickness, in logical pixels.
pub const DEFAULT_HAIRLINE: f64 = 1.0;

/// Intrinsic overlay height: five default rows, each followed by a hairline separator.
pub fn default_overlay_height(hairline: f64) -> f64 {
    (DEFAULT_ROW_EXTENT + hairline) * f64::from(DEFAULT_VISIBLE_ROWS)
}

/// Hook that gets the final word on an overlay's rect.
///
/// The returned rect replaces the computed one verbatim.
pub trait AdjustFrame {
    /// Return the rect to use instead of `proposed`.
    fn adjust(&self, proposed: OverlayRect) -> OverlayRect;
}

impl<F> AdjustFrame for F
where
    F: Fn(OverlayRect) -> OverlayRect,
{
    fn adjust(&self, proposed: OverlayRect) -> OverlayRect {
        self(proposed)
    }
}

/// Compute where an overlay should appear relative to its trigger.
///
/// See the crate documentation for the rules. All inputs are assumed finite.
pub fn compute_placement(
    request: &PlacementRequest,
    adjust: Option<&dyn AdjustFrame>,
) -> Placement {
    let trigger = request.trigger;
    let height = request.resolved_height();

    let bottom_space = request.viewport.height - trigger.y0 - trigger.height();
    let right_space = request.viewport.width - trigger.x0;

    // Ties, and any case with at least as much room below as above, open downward.
    let direction = if bottom_space >= height || bottom_space >= trigger.y0 {
        OpenDirection::Below
    } else {
        OpenDirection::Above
    };
    let vertical = match direction {
        OpenDirection::Below => {
            VerticalAnchor::Top(trigger.y0 + trigger.height() + request.insets.y1)
        }
        OpenDirection::Above => VerticalAnchor::Top((trigger.y0 - height).max(0.0)),
    };

    let (side, horizontal, mut width) = if right_space >= trigger.x0 {
        (
            HorizontalSide::Left,
            HorizontalAnchor::Left(trigger.x0 - request.insets.x0),
            None,
        )
    } else {
        (
            HorizontalSide::Right,
            HorizontalAnchor::Right(right_space - trigger.width()),
            request.resolved_width(),
        )
    };

    if request.auto_width {
        width = Some(trigger.width());
    }

    let computed = OverlayRect {
        vertical,
        horizontal,
        width,
        height: Some(height),
    };
    log::trace!(
        "placement: bottom_space={bottom_space} right_space={right_space} -> {direction:?}/{side:?}"
    );

    match adjust {
        Some(hook) => Placement {
            rect: hook.adjust(computed),
            direction,
            side,
            adjusted: true,
        },
        None => Placement {
            rect: computed,
            direction,
            side,
            adjusted: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Insets, Rect, Size};

    const PHONE: Size = Size::new(400.0, 800.0);

    fn trigger(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::new(x, y, x + w, y + h)
    }

    #[test]
    fn opens_above_when_bottom_is_cramped() {
        let request = PlacementRequest::new(trigger(20.0, 700.0, 100.0, 40.0), PHONE)
            .with_overlay_height(165.0);
        let placement = compute_placement(&request, None);

        assert_eq!(placement.direction, OpenDirection::Above);
        assert_eq!(placement.rect.vertical, VerticalAnchor::Top(535.0));
        assert_eq!(placement.rect.height, Some(165.0));
        assert_eq!(placement.side, HorizontalSide::Left);
        assert_eq!(placement.rect.horizontal, HorizontalAnchor::Left(20.0));
        assert_eq!(placement.rect.width, None);
    }

    #[test]
    fn right_anchors_near_right_edge_and_carries_width() {
        let request = PlacementRequest::new(trigger(350.0, 100.0, 40.0, 40.0), PHONE)
            .with_overlay_width(200.0);
        let placement = compute_placement(&request, None);

        assert_eq!(placement.side, HorizontalSide::Right);
        assert_eq!(placement.rect.horizontal, HorizontalAnchor::Right(10.0));
        assert_eq!(placement.rect.width, Some(200.0));
        assert_eq!(placement.direction, OpenDirection::Below);
        assert_eq!(placement.rect.vertical, VerticalAnchor::Top(140.0));
    }

    #[test]
    fn right_anchored_without_declared_width_leaves_width_open() {
        let request = PlacementRequest::new(trigger(350.0, 100.0, 40.0, 40.0), PHONE);
        let placement = compute_placement(&request, None);
        assert_eq!(placement.side, HorizontalSide::Right);
        assert_eq!(placement.rect.width, None);
    }

    #[test]
    fn fitting_below_wins_regardless_of_space_above() {
        // 200px below, 500px above: the overlay fits below, so it opens below.
        let request = PlacementRequest::new(trigger(0.0, 500.0, 50.0, 100.0), PHONE)
            .with_overlay_height(150.0);
        let placement = compute_placement(&request, None);
        assert_eq!(placement.direction, OpenDirection::Below);
        assert_eq!(placement.rect.vertical, VerticalAnchor::Top(600.0));
    }

    #[test]
    fn more_room_below_opens_below_even_when_it_does_not_fit() {
        // 300px below, 100px above, overlay 400px tall: neither side fits, below is larger.
        let viewport = Size::new(400.0, 500.0);
        let request = PlacementRequest::new(trigger(0.0, 100.0, 50.0, 100.0), viewport)
            .with_overlay_height(400.0);
        let placement = compute_placement(&request, None);
        assert_eq!(placement.direction, OpenDirection::Below);
    }

    #[test]
    fn equal_room_above_and_below_opens_below() {
        let viewport = Size::new(400.0, 500.0);
        let request = PlacementRequest::new(trigger(0.0, 200.0, 50.0, 100.0), viewport)
            .with_overlay_height(400.0);
        let placement = compute_placement(&request, None);
        assert_eq!(placement.direction, OpenDirection::Below);
    }

    #[test]
    fn opening_above_clamps_to_viewport_top() {
        let viewport = Size::new(400.0, 420.0);
        let request = PlacementRequest::new(trigger(0.0, 300.0, 50.0, 100.0), viewport)
            .with_overlay_height(350.0);
        let placement = compute_placement(&request, None);
        assert_eq!(placement.direction, OpenDirection::Above);
        assert_eq!(placement.rect.vertical, VerticalAnchor::Top(0.0));
    }

    #[test]
    fn insets_shift_left_edge_and_top() {
        let request = PlacementRequest::new(trigger(30.0, 10.0, 100.0, 20.0), PHONE)
            .with_insets(Insets::new(4.0, 0.0, 0.0, 3.0));
        let placement = compute_placement(&request, None);
        assert_eq!(placement.rect.horizontal, HorizontalAnchor::Left(26.0));
        assert_eq!(placement.rect.vertical, VerticalAnchor::Top(33.0));
    }

    #[test]
    fn auto_width_overrides_declared_width() {
        let request = PlacementRequest::new(trigger(350.0, 100.0, 40.0, 40.0), PHONE)
            .with_overlay_width(200.0)
            .with_auto_width(true);
        let placement = compute_placement(&request, None);
        assert_eq!(placement.rect.width, Some(40.0));

        let left = PlacementRequest::new(trigger(10.0, 100.0, 64.0, 40.0), PHONE)
            .with_auto_width(true);
        assert_eq!(compute_placement(&left, None).rect.width, Some(64.0));
    }

    #[test]
    fn undeclared_height_uses_intrinsic_height() {
        let viewport = Size::new(100.0, 1000.0);
        let request = PlacementRequest::new(trigger(0.0, 0.0, 10.0, 10.0), viewport);
        let placement = compute_placement(&request, None);
        assert_eq!(placement.rect.height, Some(default_overlay_height(DEFAULT_HAIRLINE)));
        assert_eq!(default_overlay_height(0.0), 165.0);

        let zero = request.with_overlay_height(0.0);
        assert_eq!(zero.resolved_height(), default_overlay_height(DEFAULT_HAIRLINE));
    }

    #[test]
    fn adjust_hook_replaces_rect_verbatim() {
        let request = PlacementRequest::new(trigger(20.0, 20.0, 40.0, 40.0), PHONE);
        let replacement = OverlayRect {
            vertical: VerticalAnchor::Bottom(5.0),
            horizontal: HorizontalAnchor::Right(7.0),
            width: None,
            height: None,
        };
        let hook = move |_: OverlayRect| replacement;
        let placement = compute_placement(&request, Some(&hook));
        assert!(placement.adjusted);
        assert_eq!(placement.rect, replacement);
        // The reported directions still describe the computed placement.
        assert_eq!(placement.direction, OpenDirection::Below);
        assert_eq!(placement.side, HorizontalSide::Left);
    }

    #[test]
    fn every_geometry_yields_a_single_anchor_per_axis() {
        let viewport = Size::new(400.0, 800.0);
        for xi in 0..8 {
            for yi in 0..16 {
                let t = trigger(f64::from(xi) * 50.0, f64::from(yi) * 50.0, 40.0, 30.0);
                let request = PlacementRequest::new(t, viewport).with_overlay_height(165.0);
                let placement = compute_placement(&request, None);
                // Computed placements are always top-anchored with a non-negative top.
                match placement.rect.vertical {
                    VerticalAnchor::Top(top) => assert!(top >= 0.0, "top {top} for {t:?}"),
                    VerticalAnchor::Bottom(_) => panic!("computed placement used a bottom anchor"),
                }
                let expected_side = if viewport.width - t.x0 >= t.x0 {
                    HorizontalSide::Left
                } else {
                    HorizontalSide::Right
                };
                assert_eq!(placement.side, expected_side, "side for {t:?}");
            }
        }
    }

    #[test]
    fn resolve_produces_absolute_rects() {
        let rect = OverlayRect {
            vertical: VerticalAnchor::Top(100.0),
            horizontal: HorizontalAnchor::Right(10.0),
            width: Some(200.0),
            height: None,
        };
        let abs = rect.resolve(Size::new(400.0, 800.0), Size::new(120.0, 165.0));
        assert_eq!(abs, Rect::new(190.0, 100.0, 390.0, 265.0));

        let bottom = OverlayRect {
            vertical: VerticalAnchor::Bottom(20.0),
            horizontal: HorizontalAnchor::Left(5.0),
            width: None,
            height: Some(50.0),
        };
        let abs = bottom.resolve(Size::new(400.0, 800.0), Size::new(120.0, 165.0));
        assert_eq!(abs, Rect::new(5.0, 730.0, 125.0, 780.0));
    }

    #[test]
    fn offsets_move_along_the_anchor_axis() {
        let rect = OverlayRect {
            vertical: VerticalAnchor::Bottom(20.0),
            horizontal: HorizontalAnchor::Right(10.0),
            width: None,
            height: None,
        };
        let moved = rect.offset_vertical(5.0).offset_horizontal(3.0);
        assert_eq!(moved.vertical, VerticalAnchor::Bottom(15.0));
        assert_eq!(moved.horizontal, HorizontalAnchor::Right(7.0));
    }
}
