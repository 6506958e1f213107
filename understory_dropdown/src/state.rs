// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection state and the pure rules that derive it from props.

use alloc::string::String;

use crate::props::DropdownProps;

/// Display mode of the dropdown.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Status {
    /// The overlay is not shown.
    #[default]
    Closed,
    /// The overlay is shown but options are absent; a progress indicator stands in for the list.
    Loading,
    /// The overlay is shown with its list.
    Ready,
}

impl Status {
    /// Open status for the current option presence.
    pub const fn open_for(options_present: bool) -> Self {
        if options_present { Self::Ready } else { Self::Loading }
    }

    /// Returns `true` unless closed.
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Everything the dropdown remembers between events.
///
/// `selected_index` is checked against the options when it is set but not afterwards; if the
/// options shrink, the index may go stale until the next selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Current display mode.
    pub status: Status,
    /// Selected option, if any.
    pub selected_index: Option<usize>,
    /// Text shown on the trigger.
    pub display_text: String,
}

/// Pick the index a selection request resolves to.
///
/// Missing requests, missing options, and out-of-range indices all fall back to
/// `default_index`. The fallback is not itself range-checked.
pub fn resolve_index<T>(props: &DropdownProps<T>, requested: Option<usize>) -> Option<usize> {
    match (requested, props.options()) {
        (Some(index), Some(options)) if index < options.len() => Some(index),
        _ => props.default_index,
    }
}

/// Trigger text for `index`: the rendered option, or the default text when there is none.
pub fn display_text_for<T, F>(props: &DropdownProps<T>, index: Option<usize>, text_of: F) -> String
where
    F: FnOnce(&T) -> String,
{
    index
        .and_then(|index| props.option(index))
        .map_or_else(|| props.default_text.clone(), text_of)
}

/// Re-derive state after a configuration change.
///
/// - An open dropdown switches between [`Status::Loading`] and [`Status::Ready`] with option
///   presence.
/// - With no selection held, the default index takes over and the text follows it (or the
///   default text when the default index is absent too).
/// - A held selection, and its text, are kept as they are.
pub fn derive_display<T, F>(
    props: &DropdownProps<T>,
    prior: SelectionState,
    text_of: F,
) -> SelectionState
where
    F: FnOnce(&T) -> String,
{
    let status = if prior.status.is_open() {
        Status::open_for(props.options.is_some())
    } else {
        Status::Closed
    };
    if prior.selected_index.is_some() {
        return SelectionState { status, ..prior };
    }
    let selected_index = props.default_index;
    SelectionState {
        status,
        selected_index,
        display_text: display_text_for(props, selected_index, text_of),
    }
}
