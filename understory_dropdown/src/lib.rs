// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_dropdown --heading-base-level=0

//! Understory Dropdown: a headless, anchored selection widget.
//!
//! A [`Dropdown`] is a trigger control that, when pressed, shows a floating overlay listing
//! options next to the trigger. Pressing an option selects it and closes the overlay. The crate
//! decides *what* should be on screen and *when*; the host decides how to draw it.
//!
//! ## Pieces
//!
//! - [`DropdownProps`]: caller configuration (options, default index and text, flags, styles).
//! - [`SelectionMachine`]: the `Closed → Loading | Ready → Closed` state machine and its three
//!   veto hooks (*will show*, *will hide*, *on select*), each answering with a [`Policy`].
//! - [`GeometryProvider`] and [`MeasureTicket`]: the one asynchronous step. The host measures the
//!   trigger and answers later; answers to superseded or revoked requests are dropped.
//! - [`understory_anchor`]: where the overlay goes, with an optional frame-adjust hook.
//! - [`adapt_row`]: every rendered row becomes a [`PressableRow`] that reports its index, while a
//!   renderer's own pressable element keeps its kind and props.
//! - [`ButtonView`] and [`OverlayView`]: headless descriptions the host presents.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_dropdown::{Dropdown, DropdownProps, MeasureTicket, OverlayContent, Status};
//!
//! let props = DropdownProps {
//!     default_index: Some(1),
//!     ..DropdownProps::with_options(vec!["apple", "banana", "cherry"])
//! };
//! let mut dropdown: Dropdown<&str> = Dropdown::new(props).with_viewport(Size::new(400.0, 800.0));
//! assert_eq!(dropdown.display_text(), "banana");
//!
//! // The host measures the trigger when asked, then reports back with the ticket.
//! let mut pending = None;
//! dropdown.press_trigger(&mut |ticket: MeasureTicket| {
//!     pending = Some(ticket);
//!     true
//! });
//! let ticket = pending.unwrap();
//! dropdown.on_measured(ticket, Rect::new(20.0, 100.0, 120.0, 140.0));
//! assert_eq!(dropdown.status(), Status::Ready);
//!
//! // Present the overlay, then forward a row press.
//! let overlay = dropdown.overlay().unwrap();
//! let OverlayContent::List(mut list) = overlay.content else { unreachable!() };
//! let row = list.row_mut(2).unwrap();
//! let outcome = dropdown.activate_row(row);
//! assert!(outcome.committed && outcome.dismissed);
//! assert_eq!(dropdown.display_text(), "cherry");
//! assert!(dropdown.overlay().is_none());
//! ```
//!
//! ## Vetoes
//!
//! Hooks may return `bool`, `()`, or a [`Policy`]. Only an explicit `false` (or
//! [`Policy::Deny`]) vetoes; anything else allows the default action.
//!
//! ```rust
//! use understory_dropdown::{Dropdown, DropdownProps};
//!
//! let mut dropdown: Dropdown<&str> = Dropdown::new(DropdownProps::with_options(vec!["a", "b"]))
//!     .on_select(|index, _: &&str| index != 1)
//!     .on_will_hide(|| ());
//! let outcome = dropdown.on_row_activated(1);
//! // The selection was refused, but the overlay still closed.
//! assert!(!outcome.committed);
//! assert!(outcome.dismissed);
//! assert_eq!(dropdown.display_text(), "Please select...");
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dropdown;
mod geometry;
mod machine;
mod policy;
mod props;
mod row;
mod state;
mod style;
mod view;

pub use dropdown::Dropdown;
pub use geometry::{GeometryProvider, MeasureTicket};
pub use machine::{RowActivation, SelectionMachine};
pub use policy::Policy;
pub use props::{DEFAULT_TEXT, DropdownProps, KeyboardDismissMode};
pub use row::{
    PressHandler, Pressable, PressableKind, PressableRow, RowBody, RowElement, RowKey, RowPress,
    TextRow, adapt_row,
};
pub use state::{SelectionState, Status, derive_display, display_text_for, resolve_index};
pub use style::{BoxStyle, Rgba8, TextStyle};
pub use view::{
    AnimationType, ButtonView, ListEntry, ListView, OverlayContent, OverlayView, SeparatorView,
};

pub use understory_anchor;
