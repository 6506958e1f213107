// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless descriptions of what the host should present.

use alloc::string::String;
use alloc::vec::Vec;

use understory_anchor::Placement;

use crate::props::KeyboardDismissMode;
use crate::row::{PressableRow, RowKey};
use crate::style::{Rgba8, TextStyle};

/// The trigger control.
#[derive(Debug)]
pub struct ButtonView<C> {
    /// Text to show.
    pub text: String,
    /// Cascaded text style.
    pub text_style: TextStyle,
    /// Icon from the icon renderer, if one is installed.
    pub icon: Option<C>,
    /// Background: the highlight color while open, transparent otherwise.
    pub background: Rgba8,
    /// Opacity while pressed.
    pub active_opacity: f64,
    /// Presses are ignored.
    pub disabled: bool,
    /// Accessibility flag.
    pub accessible: bool,
    /// Whether the overlay is open.
    pub open: bool,
}

/// How the overlay appears and disappears.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnimationType {
    /// Appear instantly.
    None,
    /// Fade in and out.
    Fade,
}

/// A separator between two rows.
#[derive(Debug, PartialEq)]
pub enum SeparatorView<C> {
    /// The default rule.
    Hairline {
        /// Key of the separator.
        key: RowKey,
        /// Thickness in logical pixels.
        thickness: f64,
        /// Rule color.
        color: Rgba8,
    },
    /// Content from the separator renderer.
    Custom {
        /// Key of the separator.
        key: RowKey,
        /// Rendered content.
        content: C,
    },
}

impl<C> SeparatorView<C> {
    /// The separator's key.
    pub fn key(&self) -> RowKey {
        match self {
            Self::Hairline { key, .. } | Self::Custom { key, .. } => *key,
        }
    }
}

/// One entry of the list, in display order.
#[derive(Debug)]
pub enum ListEntry<C, P = ()> {
    /// An adapted row.
    Row(PressableRow<C, P>),
    /// A separator following the row with the same index.
    Separator(SeparatorView<C>),
}

/// The scrollable list of rows.
///
/// Every option gets a row; virtualizing hosts can instead build rows on demand with
/// [`Dropdown::row`](crate::Dropdown::row).
#[derive(Debug)]
pub struct ListView<C, P = ()> {
    /// Rows interleaved with separators.
    pub entries: Vec<ListEntry<C, P>>,
    /// The list may scroll.
    pub scroll_enabled: bool,
    /// Show the vertical scroll indicator.
    pub shows_scroll_indicator: bool,
    /// Keyboard handling while scrolling.
    pub keyboard_dismiss_mode: KeyboardDismissMode,
}

impl<C, P> ListView<C, P> {
    /// Iterate the rows, skipping separators.
    pub fn rows(&self) -> impl Iterator<Item = &PressableRow<C, P>> {
        self.entries.iter().filter_map(|entry| match entry {
            ListEntry::Row(row) => Some(row),
            ListEntry::Separator(_) => None,
        })
    }

    /// The row reporting option `index`, mutably (to fire its press).
    pub fn row_mut(&mut self, index: usize) -> Option<&mut PressableRow<C, P>> {
        self.entries.iter_mut().find_map(|entry| match entry {
            ListEntry::Row(row) if row.index() == index => Some(row),
            _ => None,
        })
    }
}

/// What fills the overlay surface.
#[derive(Debug)]
pub enum OverlayContent<C, P = ()> {
    /// Options are absent: show a small progress indicator.
    Loading,
    /// The option list.
    List(ListView<C, P>),
}

/// The floating overlay.
#[derive(Debug)]
pub struct OverlayView<C, P = ()> {
    /// Where the surface goes.
    pub placement: Placement,
    /// Entry/exit animation.
    pub animation: AnimationType,
    /// Accessibility flag of the backdrop.
    pub accessible: bool,
    /// Surface content.
    pub content: OverlayContent<C, P>,
}
