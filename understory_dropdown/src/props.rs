// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-supplied configuration.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::style::{BoxStyle, Rgba8, TextStyle};

/// Placeholder shown on the trigger when nothing is selected.
pub const DEFAULT_TEXT: &str = "Please select...";

/// How the list treats an on-screen keyboard while scrolling.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyboardDismissMode {
    /// Leave the keyboard alone.
    #[default]
    Never,
    /// Dismiss the keyboard when a drag begins.
    OnDrag,
    /// Dismiss the keyboard interactively with the drag.
    Interactive,
}

/// Configuration of a [`Dropdown`](crate::Dropdown).
///
/// The option collection is shared with the caller and only ever read. Replacing any field is
/// done through [`Dropdown::set_props`](crate::Dropdown::set_props), which re-derives the
/// display state.
#[derive(Clone, Debug)]
pub struct DropdownProps<T> {
    /// Options to choose from. `None` means "still loading".
    pub options: Option<Rc<[T]>>,
    /// Index used whenever no valid selection is held.
    pub default_index: Option<usize>,
    /// Trigger text when neither a selection nor a default index applies.
    pub default_text: String,
    /// Ignore trigger presses.
    pub disabled: bool,
    /// Accessibility flag forwarded to the trigger, the backdrop, and wrapped rows.
    pub accessible: bool,
    /// Allow the list to scroll.
    pub scroll_enabled: bool,
    /// Fade the overlay in and out.
    pub animated: bool,
    /// Show the list's vertical scroll indicator.
    pub shows_scroll_indicator: bool,
    /// Keyboard handling while the list scrolls.
    pub keyboard_dismiss_mode: KeyboardDismissMode,
    /// Make the overlay exactly as wide as the trigger.
    pub auto_width: bool,
    /// Opacity of the trigger while pressed.
    pub button_opacity: f64,
    /// Trigger background while the overlay is open.
    pub button_highlight_background: Rgba8,
    /// Thickness of separators, also used to size the intrinsic overlay height.
    pub hairline_width: f64,
    /// Box model of the trigger's container.
    pub button_style: BoxStyle,
    /// Box model of the overlay surface.
    pub overlay_style: BoxStyle,
    /// Trigger text style.
    pub text_style: TextStyle,
    /// Default row text style.
    pub row_text_style: TextStyle,
    /// Extra style for the highlighted default row.
    pub highlighted_row_text_style: TextStyle,
}

impl<T> Default for DropdownProps<T> {
    fn default() -> Self {
        Self {
            options: None,
            default_index: None,
            default_text: String::from(DEFAULT_TEXT),
            disabled: false,
            accessible: false,
            scroll_enabled: true,
            animated: true,
            shows_scroll_indicator: true,
            keyboard_dismiss_mode: KeyboardDismissMode::Never,
            auto_width: false,
            button_opacity: 0.2,
            button_highlight_background: Rgba8::TRANSPARENT,
            hairline_width: understory_anchor::DEFAULT_HAIRLINE,
            button_style: BoxStyle::default(),
            overlay_style: BoxStyle::default(),
            text_style: TextStyle::default(),
            row_text_style: TextStyle::default(),
            highlighted_row_text_style: TextStyle::default(),
        }
    }
}

impl<T> DropdownProps<T> {
    /// Props over the given options with every other field at its default.
    pub fn with_options(options: Vec<T>) -> Self {
        Self {
            options: Some(Rc::from(options)),
            ..Self::default()
        }
    }

    /// The options as a slice, if present.
    pub fn options(&self) -> Option<&[T]> {
        self.options.as_deref()
    }

    /// The option at `index`, if options are present and the index is in range.
    pub fn option(&self, index: usize) -> Option<&T> {
        self.options().and_then(|options| options.get(index))
    }
}
