// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_anchor --heading-base-level=0

//! Understory Anchor: placement of a floating overlay relative to a trigger.
//!
//! Given the measured rectangle of a trigger control, the size of the viewport, and the
//! overlay's declared size, [`compute_placement`] decides where the overlay should appear:
//!
//! - **Vertically**, the overlay opens below the trigger when it fits there, *or* when there is
//!   at least as much room below the trigger as above it. Otherwise it opens above, clamped so
//!   it never starts above the top of the viewport.
//! - **Horizontally**, the overlay shares the trigger's left edge when there is at least as much
//!   room to the right of the trigger's left edge as to its left. Otherwise it is anchored by
//!   its right edge to the trigger's right edge, and the declared width is carried explicitly
//!   because the overlay then grows leftward from a computed right offset.
//! - With `auto_width`, the overlay is exactly as wide as the trigger.
//! - Finally an optional [`AdjustFrame`] hook receives the computed [`OverlayRect`] and may
//!   replace it wholesale. The hook has the final say; nothing is merged back.
//!
//! The result is an anchored [`OverlayRect`] rather than an absolute rectangle: each axis carries
//! exactly one anchor ([`VerticalAnchor`], [`HorizontalAnchor`]) so a host can feed it straight
//! into an absolutely positioned layer. [`OverlayRect::resolve`] turns it into a
//! [`kurbo::Rect`] when a concrete box is needed (for example to hit-test the backdrop).
//!
//! This crate does not measure anything and does not present anything. Hosts measure the trigger
//! with their own layout engine and hand the result over in viewport coordinates.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_anchor::{
//!     HorizontalAnchor, OpenDirection, PlacementRequest, VerticalAnchor, compute_placement,
//! };
//!
//! // A trigger near the bottom of a 400×800 viewport.
//! let trigger = Rect::new(20.0, 700.0, 120.0, 740.0);
//! let request =
//!     PlacementRequest::new(trigger, Size::new(400.0, 800.0)).with_overlay_height(165.0);
//!
//! let placement = compute_placement(&request, None);
//! assert_eq!(placement.direction, OpenDirection::Above);
//! assert_eq!(placement.rect.vertical, VerticalAnchor::Top(535.0));
//! assert_eq!(placement.rect.horizontal, HorizontalAnchor::Left(20.0));
//! ```
//!
//! ## Overriding the frame
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_anchor::{OverlayRect, PlacementRequest, compute_placement};
//!
//! let request = PlacementRequest::new(Rect::new(0.0, 0.0, 50.0, 20.0), Size::new(300.0, 300.0));
//! // Nudge the overlay two pixels down.
//! let nudge = |r: OverlayRect| r.offset_vertical(2.0);
//! let placement = compute_placement(&request, Some(&nudge));
//! assert!(placement.adjusted);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std`.

#![no_std]

mod placement;
mod types;

pub use placement::{
    AdjustFrame, DEFAULT_HAIRLINE, DEFAULT_ROW_EXTENT, DEFAULT_VISIBLE_ROWS, compute_placement,
    default_overlay_height,
};
pub use types::{
    HorizontalAnchor, HorizontalSide, OpenDirection, OverlayRect, Placement, PlacementRequest,
    VerticalAnchor,
};
