// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where an overlay lands for triggers in each corner of a viewport.
//!
//! Run:
//! - `cargo run -p understory_demos --example anchor_placement`

use kurbo::{Rect, Size};
use understory_anchor::{PlacementRequest, compute_placement, default_overlay_height};

fn main() {
    let viewport = Size::new(400.0, 800.0);
    let height = default_overlay_height(1.0);
    let triggers = [
        ("top left", Rect::new(10.0, 10.0, 110.0, 50.0)),
        ("top right", Rect::new(290.0, 10.0, 390.0, 50.0)),
        ("bottom left", Rect::new(10.0, 750.0, 110.0, 790.0)),
        ("bottom right", Rect::new(290.0, 750.0, 390.0, 790.0)),
    ];

    for (name, trigger) in triggers {
        let request = PlacementRequest::new(trigger, viewport)
            .with_overlay_height(height)
            .with_overlay_width(160.0);
        let placement = compute_placement(&request, None);
        let resolved = placement.rect.resolve(viewport, Size::new(160.0, height));
        println!(
            "{name:>12}: {:?}/{:?} -> {resolved:?}",
            placement.direction, placement.side
        );
    }
}
