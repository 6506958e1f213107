// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The open/select/close state machine and its veto hooks.
//!
//! [`SelectionMachine`] owns a [`SelectionState`] and processes the dropdown's lifecycle events.
//! It does not measure anything: opening is split into a decision
//! ([`SelectionMachine::on_trigger_activated`]) and a commit ([`SelectionMachine::open`]) so the
//! caller can measure the trigger in between.
//!
//! Three hooks can veto default actions by returning [`Policy::Deny`]:
//!
//! - *will show*: consulted when the trigger is activated.
//! - *will hide*: consulted on dismissal requests, including the dismissal after a row press.
//! - *on select*: consulted when a row is pressed, before the selection is committed.
//!
//! Selection and dismissal are gated independently: vetoing the selection of a row still
//! closes the overlay unless *will hide* vetoes that as well.
//!
//! Hooks run without any recovery; a panicking hook unwinds through the machine.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt;
use core::fmt::Display;

use crate::policy::{Policy, consult};
use crate::props::DropdownProps;
use crate::state::{SelectionState, Status, derive_display, display_text_for, resolve_index};

type VetoHook = Box<dyn FnMut() -> Policy>;
type SelectHook<T> = Box<dyn FnMut(usize, &T) -> Policy>;
type TextRenderer<T> = Box<dyn Fn(&T) -> String>;

/// What happened when a row was pressed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RowActivation {
    /// The selection (index and display text) was updated.
    pub committed: bool,
    /// The overlay was closed.
    pub dismissed: bool,
}

/// Selection state machine: `Closed → Loading | Ready → Closed`.
pub struct SelectionMachine<T> {
    state: SelectionState,
    will_show: Option<VetoHook>,
    will_hide: Option<VetoHook>,
    on_select: Option<SelectHook<T>>,
    button_text: Option<TextRenderer<T>>,
}

impl<T> fmt::Debug for SelectionMachine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionMachine")
            .field("state", &self.state)
            .field("will_show", &self.will_show.is_some())
            .field("will_hide", &self.will_hide.is_some())
            .field("on_select", &self.on_select.is_some())
            .field("button_text", &self.button_text.is_some())
            .finish()
    }
}

impl<T: Display> SelectionMachine<T> {
    /// Create a closed machine whose selection is derived from `props`.
    pub fn new(props: &DropdownProps<T>) -> Self {
        let mut machine = Self {
            state: SelectionState {
                status: Status::Closed,
                selected_index: None,
                display_text: props.default_text.clone(),
            },
            will_show: None,
            will_hide: None,
            on_select: None,
            button_text: None,
        };
        machine.sync(props);
        machine
    }

    /// Install the hook consulted before opening.
    pub fn set_will_show<R: Into<Policy>>(&mut self, mut hook: impl FnMut() -> R + 'static) {
        self.will_show = Some(Box::new(move || hook().into()));
    }

    /// Install the hook consulted before closing.
    pub fn set_will_hide<R: Into<Policy>>(&mut self, mut hook: impl FnMut() -> R + 'static) {
        self.will_hide = Some(Box::new(move || hook().into()));
    }

    /// Install the hook consulted before a pressed row becomes the selection.
    pub fn set_on_select<R: Into<Policy>>(
        &mut self,
        mut hook: impl FnMut(usize, &T) -> R + 'static,
    ) {
        self.on_select = Some(Box::new(move |index: usize, item: &T| hook(index, item).into()));
    }

    /// Install the renderer for trigger text and refresh the current text with it.
    pub fn set_button_text(
        &mut self,
        renderer: impl Fn(&T) -> String + 'static,
        props: &DropdownProps<T>,
    ) {
        self.button_text = Some(Box::new(renderer));
        let text = display_text_for(props, self.state.selected_index, |item| self.text_of(item));
        self.state.display_text = text;
    }

    /// Current state.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Trigger text for an option.
    pub fn text_of(&self, item: &T) -> String {
        match &self.button_text {
            Some(render) => render(item),
            None => item.to_string(),
        }
    }

    /// Re-derive the state after `props` changed.
    pub fn sync(&mut self, props: &DropdownProps<T>) {
        let prior = core::mem::take(&mut self.state);
        let next = derive_display(props, prior, |item| self.text_of(item));
        self.state = next;
    }

    /// Commit an opening; the status follows option presence.
    pub fn open(&mut self, props: &DropdownProps<T>) {
        let status = Status::open_for(props.options.is_some());
        log::debug!("dropdown open ({status:?})");
        self.state.status = status;
    }

    /// Close. Always succeeds.
    pub fn hide(&mut self) {
        if self.state.status.is_open() {
            log::debug!("dropdown closed");
        }
        self.state.status = Status::Closed;
    }

    /// Select `index`, substituting the default index for missing or out-of-range requests.
    ///
    /// The selected index is always updated, even when it resolves to "no selection". Does not
    /// close the overlay.
    pub fn select(&mut self, index: Option<usize>, props: &DropdownProps<T>) {
        let resolved = resolve_index(props, index);
        let text = display_text_for(props, resolved, |item| self.text_of(item));
        log::debug!("dropdown select {index:?} -> {resolved:?}");
        self.state.selected_index = resolved;
        self.state.display_text = text;
    }

    /// Ask the *will show* hook whether the trigger may open the overlay.
    pub fn on_trigger_activated(&mut self) -> Policy {
        let policy = consult(self.will_show.as_deref_mut(), |hook| hook());
        if !policy.is_allowed() {
            log::debug!("dropdown open vetoed");
        }
        policy
    }

    /// Backdrop press or system back: close unless *will hide* vetoes.
    ///
    /// Returns `true` if the machine closed.
    pub fn on_request_dismiss(&mut self) -> bool {
        let policy = consult(self.will_hide.as_deref_mut(), |hook| hook());
        if policy.is_allowed() {
            self.hide();
            true
        } else {
            log::debug!("dropdown close vetoed");
            false
        }
    }

    /// A row was pressed: commit it unless *on select* vetoes, then request dismissal.
    ///
    /// An index with no option (the options shrank under an open overlay) is replaced by the
    /// default index, exactly as in [`Self::select`]. When that resolves to no option either,
    /// the selection is cleared to the default without consulting *on select*.
    pub fn on_row_activated(&mut self, index: usize, props: &DropdownProps<T>) -> RowActivation {
        let resolved = resolve_index(props, Some(index));
        let target = resolved.and_then(|at| props.option(at).map(|item| (at, item)));
        let committed = match target {
            Some((at, item)) => {
                let policy = consult(self.on_select.as_deref_mut(), |hook| hook(at, item));
                if policy.is_allowed() {
                    let text = self.text_of(item);
                    log::debug!("dropdown row {index} selected as {at}");
                    self.state.selected_index = Some(at);
                    self.state.display_text = text;
                    true
                } else {
                    log::debug!("dropdown row {index} selection vetoed");
                    false
                }
            }
            None => {
                log::debug!("dropdown row {index} resolves to no option");
                self.state.selected_index = resolved;
                self.state.display_text = props.default_text.clone();
                true
            }
        };
        let dismissed = self.on_request_dismiss();
        RowActivation {
            committed,
            dismissed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::Cell;

    fn abc(default_index: Option<usize>) -> DropdownProps<&'static str> {
        DropdownProps {
            default_index,
            ..DropdownProps::with_options(vec!["a", "b", "c"])
        }
    }

    fn opened(props: &DropdownProps<&'static str>) -> SelectionMachine<&'static str> {
        let mut machine = SelectionMachine::new(props);
        machine.open(props);
        machine
    }

    #[test]
    fn construction_reflects_default_index() {
        let machine = SelectionMachine::new(&abc(Some(1)));
        assert_eq!(machine.state().status, Status::Closed);
        assert_eq!(machine.state().selected_index, Some(1));
        assert_eq!(machine.state().display_text, "b");
    }

    #[test]
    fn out_of_range_select_matches_select_of_default() {
        let props = abc(Some(2));
        let mut a = SelectionMachine::new(&props);
        let mut b = SelectionMachine::new(&props);
        a.select(Some(7), &props);
        b.select(Some(2), &props);
        assert_eq!(a.state(), b.state());

        let mut c = SelectionMachine::new(&props);
        c.select(None, &props);
        assert_eq!(c.state(), b.state());
    }

    #[test]
    fn select_none_without_default_shows_default_text() {
        let props = abc(None);
        let mut machine = SelectionMachine::new(&props);
        machine.select(Some(0), &props);
        assert_eq!(machine.state().display_text, "a");
        machine.select(None, &props);
        assert_eq!(machine.state().selected_index, None);
        assert_eq!(machine.state().display_text, "Please select...");
    }

    #[test]
    fn select_uses_button_text_renderer() {
        let props = abc(None);
        let mut machine = SelectionMachine::new(&props);
        machine.set_button_text(|s: &&str| format!("<{s}>"), &props);
        machine.select(Some(1), &props);
        assert_eq!(machine.state().display_text, "<b>");
    }

    #[test]
    fn open_status_follows_option_presence() {
        let loading: DropdownProps<&str> = DropdownProps::default();
        let mut machine = SelectionMachine::new(&loading);
        machine.open(&loading);
        assert_eq!(machine.state().status, Status::Loading);

        let ready = abc(None);
        machine.sync(&ready);
        assert_eq!(machine.state().status, Status::Ready);

        machine.hide();
        assert_eq!(machine.state().status, Status::Closed);
    }

    #[test]
    fn will_show_false_denies() {
        let mut machine = SelectionMachine::new(&abc(None));
        assert_eq!(machine.on_trigger_activated(), Policy::Allow);
        machine.set_will_show(|| false);
        assert_eq!(machine.on_trigger_activated(), Policy::Deny);
        machine.set_will_show(|| ());
        assert_eq!(machine.on_trigger_activated(), Policy::Allow);
    }

    #[test]
    fn dismiss_respects_will_hide() {
        let props = abc(None);
        let mut machine = opened(&props);
        machine.set_will_hide(|| false);
        assert!(!machine.on_request_dismiss());
        assert!(machine.state().status.is_open());

        machine.set_will_hide(|| true);
        assert!(machine.on_request_dismiss());
        assert_eq!(machine.state().status, Status::Closed);
    }

    #[test]
    fn vetoed_selection_still_dismisses() {
        let props = abc(Some(0));
        let mut machine = opened(&props);
        let seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&seen);
        machine.set_on_select(move |index, item: &&str| {
            sink.set(Some((index, *item)));
            false
        });

        let outcome = machine.on_row_activated(2, &props);
        assert_eq!(
            outcome,
            RowActivation {
                committed: false,
                dismissed: true
            }
        );
        assert_eq!(seen.get(), Some((2, "c")));
        assert_eq!(machine.state().selected_index, Some(0));
        assert_eq!(machine.state().display_text, "a");
        assert_eq!(machine.state().status, Status::Closed);
    }

    #[test]
    fn selection_and_dismissal_gates_are_independent() {
        let props = abc(None);
        let mut machine = opened(&props);
        machine.set_will_hide(|| false);

        let outcome = machine.on_row_activated(1, &props);
        assert!(outcome.committed);
        assert!(!outcome.dismissed);
        assert_eq!(machine.state().display_text, "b");
        assert_eq!(machine.state().status, Status::Ready);
    }

    #[test]
    fn out_of_range_row_matches_select_of_default() {
        let props = abc(Some(1));
        let mut pressed = SelectionMachine::new(&props);
        pressed.select(Some(0), &props);
        pressed.open(&props);
        let outcome = pressed.on_row_activated(7, &props);

        let mut selected = SelectionMachine::new(&props);
        selected.select(Some(7), &props);
        assert!(outcome.committed);
        assert!(outcome.dismissed);
        assert_eq!(pressed.state(), selected.state());
        assert_eq!(pressed.state().selected_index, Some(1));
        assert_eq!(pressed.state().display_text, "b");
    }

    #[test]
    fn out_of_range_row_is_gated_as_the_default() {
        let props = abc(Some(2));
        let mut machine = opened(&props);
        let seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&seen);
        machine.set_on_select(move |index, item: &&str| {
            sink.set(Some((index, *item)));
            false
        });
        let outcome = machine.on_row_activated(9, &props);
        assert_eq!(seen.get(), Some((2, "c")));
        assert!(!outcome.committed);
        assert_eq!(machine.state().selected_index, Some(2));
    }

    #[test]
    fn out_of_range_row_without_default_clears_selection() {
        let props = abc(None);
        let mut machine = opened(&props);
        machine.select(Some(1), &props);
        let outcome = machine.on_row_activated(5, &props);
        assert!(outcome.committed);
        assert!(outcome.dismissed);
        assert_eq!(machine.state().selected_index, None);
        assert_eq!(machine.state().display_text, "Please select...");
    }
}
