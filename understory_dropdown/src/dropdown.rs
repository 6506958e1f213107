// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dropdown widget: wires the trigger, measurement, placement, rows, and state together.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::fmt::Display;

use kurbo::{Rect, Size};
use understory_anchor::{
    AdjustFrame, Placement, PlacementRequest, compute_placement, default_overlay_height,
};

use crate::geometry::{GeometryProvider, MeasureTicket, Measurement};
use crate::machine::{RowActivation, SelectionMachine};
use crate::policy::Policy;
use crate::props::DropdownProps;
use crate::row::{PressableRow, RowElement, RowKey, TextRow, adapt_row};
use crate::state::{SelectionState, Status};
use crate::style::{Rgba8, TextStyle};
use crate::view::{
    AnimationType, ButtonView, ListEntry, ListView, OverlayContent, OverlayView, SeparatorView,
};

type RowRenderer<T, C, P> = Box<dyn Fn(&T, usize, bool) -> RowElement<C, P>>;
type SeparatorRenderer<C> = Box<dyn Fn(usize, bool) -> C>;
type IconRenderer<C> = Box<dyn Fn(bool) -> C>;

/// An anchored dropdown over options of type `T`.
///
/// `C` is the host's content type (whatever custom renderers produce) and `P` carries the
/// properties of custom pressable rows. Both default to `()` for dropdowns that only use the
/// built-in text rows.
///
/// The dropdown never draws. The host:
///
/// 1. forwards trigger presses to [`Dropdown::press_trigger`] with a [`GeometryProvider`],
/// 2. answers the measurement with [`Dropdown::on_measured`],
/// 3. presents [`Dropdown::button`] and, while it is `Some`, [`Dropdown::overlay`],
/// 4. forwards row presses to [`Dropdown::activate_row`] and backdrop presses or system back to
///    [`Dropdown::request_dismiss`].
pub struct Dropdown<T, C = (), P = ()> {
    props: DropdownProps<T>,
    machine: SelectionMachine<T>,
    measurement: Measurement,
    viewport: Size,
    adjust_frame: Option<Box<dyn AdjustFrame>>,
    render_row: Option<RowRenderer<T, C, P>>,
    render_separator: Option<SeparatorRenderer<C>>,
    render_button_icon: Option<IconRenderer<C>>,
}

impl<T, C, P> fmt::Debug for Dropdown<T, C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dropdown")
            .field("props", &"..")
            .field("machine", &self.machine)
            .field("measurement", &self.measurement)
            .field("viewport", &self.viewport)
            .field("adjust_frame", &self.adjust_frame.is_some())
            .field("render_row", &self.render_row.is_some())
            .field("render_separator", &self.render_separator.is_some())
            .field("render_button_icon", &self.render_button_icon.is_some())
            .finish()
    }
}

impl<T: Display, C, P> Dropdown<T, C, P> {
    /// Create a closed dropdown. The viewport starts empty; set it before opening.
    pub fn new(props: DropdownProps<T>) -> Self {
        let machine = SelectionMachine::new(&props);
        Self {
            props,
            machine,
            measurement: Measurement::default(),
            viewport: Size::ZERO,
            adjust_frame: None,
            render_row: None,
            render_separator: None,
            render_button_icon: None,
        }
    }

    /// Set the viewport size.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }

    /// Hook consulted before opening; return `false` to keep the dropdown closed.
    #[must_use]
    pub fn on_will_show<R: Into<Policy>>(mut self, hook: impl FnMut() -> R + 'static) -> Self {
        self.machine.set_will_show(hook);
        self
    }

    /// Hook consulted before closing; return `false` to keep the dropdown open.
    #[must_use]
    pub fn on_will_hide<R: Into<Policy>>(mut self, hook: impl FnMut() -> R + 'static) -> Self {
        self.machine.set_will_hide(hook);
        self
    }

    /// Hook consulted when a row is pressed; return `false` to keep the previous selection.
    #[must_use]
    pub fn on_select<R: Into<Policy>>(
        mut self,
        hook: impl FnMut(usize, &T) -> R + 'static,
    ) -> Self {
        self.machine.set_on_select(hook);
        self
    }

    /// Hook that may replace the computed overlay rect.
    #[must_use]
    pub fn adjust_frame(mut self, hook: impl AdjustFrame + 'static) -> Self {
        self.adjust_frame = Some(Box::new(hook));
        self
    }

    /// Renderer for rows: `(option, index, highlighted)`.
    #[must_use]
    pub fn render_row(
        mut self,
        renderer: impl Fn(&T, usize, bool) -> RowElement<C, P> + 'static,
    ) -> Self {
        self.render_row = Some(Box::new(renderer));
        self
    }

    /// Renderer for separators: `(index of the row above, adjacent row highlighted)`.
    #[must_use]
    pub fn render_separator(mut self, renderer: impl Fn(usize, bool) -> C + 'static) -> Self {
        self.render_separator = Some(Box::new(renderer));
        self
    }

    /// Renderer for the trigger text of a selected option.
    #[must_use]
    pub fn render_button_text(mut self, renderer: impl Fn(&T) -> String + 'static) -> Self {
        self.machine.set_button_text(renderer, &self.props);
        self
    }

    /// Renderer for the trigger icon: `(is_open)`.
    #[must_use]
    pub fn render_button_icon(mut self, renderer: impl Fn(bool) -> C + 'static) -> Self {
        self.render_button_icon = Some(Box::new(renderer));
        self
    }

    /// Current configuration.
    pub fn props(&self) -> &DropdownProps<T> {
        &self.props
    }

    /// Replace the configuration and re-derive the display state.
    pub fn set_props(&mut self, props: DropdownProps<T>) {
        self.props = props;
        self.machine.sync(&self.props);
    }

    /// Replace only the options (`None` while they load).
    pub fn set_options(&mut self, options: Option<Rc<[T]>>) {
        self.props.options = options;
        self.machine.sync(&self.props);
    }

    /// Current viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Report a new viewport size (for example after a rotation).
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Current selection state.
    pub fn state(&self) -> &SelectionState {
        self.machine.state()
    }

    /// Current display mode.
    pub fn status(&self) -> Status {
        self.state().status
    }

    /// Whether the overlay is open.
    pub fn is_open(&self) -> bool {
        self.status().is_open()
    }

    /// Selected option index, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.state().selected_index
    }

    /// Text shown on the trigger.
    pub fn display_text(&self) -> &str {
        &self.state().display_text
    }

    /// Whether a trigger measurement is outstanding.
    pub fn is_measuring(&self) -> bool {
        self.measurement.is_pending()
    }

    /// The trigger was pressed.
    ///
    /// Ignored while disabled or when the *will show* hook vetoes; otherwise behaves like
    /// [`Dropdown::show`]. Returns `true` if a measurement was started.
    pub fn press_trigger<G>(&mut self, geometry: &mut G) -> bool
    where
        G: GeometryProvider + ?Sized,
    {
        if self.props.disabled {
            log::debug!("dropdown trigger disabled");
            return false;
        }
        if !self.machine.on_trigger_activated().is_allowed() {
            return false;
        }
        self.show(geometry)
    }

    /// Measure the trigger and open once the measurement arrives.
    ///
    /// A second call before the first measurement resolves restarts the sequence. Returns
    /// `false`, changing nothing, if the provider cannot measure the trigger.
    pub fn show<G>(&mut self, geometry: &mut G) -> bool
    where
        G: GeometryProvider + ?Sized,
    {
        let ticket = self.measurement.issue();
        if geometry.measure(ticket) {
            self.measurement.begin(ticket);
            true
        } else {
            log::debug!("dropdown trigger cannot be measured");
            false
        }
    }

    /// Deliver a trigger measurement in viewport coordinates.
    ///
    /// Opens the overlay if `ticket` is the outstanding request; stale tickets are ignored.
    /// Returns `true` if the measurement was applied.
    pub fn on_measured(&mut self, ticket: MeasureTicket, trigger: Rect) -> bool {
        if !self.measurement.complete(ticket, trigger) {
            return false;
        }
        self.machine.open(&self.props);
        true
    }

    /// Close the overlay. Revokes any outstanding measurement.
    pub fn hide(&mut self) {
        self.measurement.cancel();
        self.machine.hide();
    }

    /// Select an option. See [`SelectionMachine::select`].
    pub fn select(&mut self, index: Option<usize>) {
        self.machine.select(index, &self.props);
    }

    /// Backdrop press or system back. Returns `true` if the overlay closed.
    pub fn request_dismiss(&mut self) -> bool {
        let dismissed = self.machine.on_request_dismiss();
        if dismissed {
            self.measurement.cancel();
        }
        dismissed
    }

    /// Row `index` was pressed. See [`SelectionMachine::on_row_activated`].
    pub fn on_row_activated(&mut self, index: usize) -> RowActivation {
        let outcome = self.machine.on_row_activated(index, &self.props);
        if outcome.dismissed {
            self.measurement.cancel();
        }
        outcome
    }

    /// Fire an adapted row's press: the selection first, then the row's own handler.
    pub fn activate_row(&mut self, row: &mut PressableRow<C, P>) -> RowActivation {
        let mut outcome = RowActivation {
            committed: false,
            dismissed: false,
        };
        row.press_mut()
            .fire(|index| outcome = self.on_row_activated(index));
        outcome
    }

    /// Where the overlay goes, if it is open and the trigger has been measured.
    pub fn placement(&self) -> Option<Placement> {
        if !self.is_open() {
            return None;
        }
        let trigger = self.measurement.trigger()?;
        let request = self.placement_request(trigger);
        Some(compute_placement(&request, self.adjust_frame.as_deref()))
    }

    fn placement_request(&self, trigger: Rect) -> PlacementRequest {
        let props = &self.props;
        let overlay_width = props
            .overlay_style
            .width
            .filter(|w| *w != 0.0)
            .or(props.button_style.width);
        PlacementRequest {
            trigger,
            viewport: self.viewport,
            overlay_height: props.overlay_style.height,
            intrinsic_height: default_overlay_height(props.hairline_width),
            overlay_width,
            insets: props.button_style.insets(),
            auto_width: props.auto_width,
        }
    }

    /// Describe the trigger.
    pub fn button(&self) -> ButtonView<C> {
        let open = self.is_open();
        ButtonView {
            text: self.display_text().to_string(),
            text_style: TextStyle::BUTTON.merge(&self.props.text_style),
            icon: self.render_button_icon.as_ref().map(|render| render(open)),
            background: if open {
                self.props.button_highlight_background
            } else {
                Rgba8::TRANSPARENT
            },
            active_opacity: self.props.button_opacity,
            disabled: self.props.disabled,
            accessible: self.props.accessible,
            open,
        }
    }

    /// Describe the overlay, or `None` while it should not be presented.
    pub fn overlay(&self) -> Option<OverlayView<C, P>> {
        let placement = self.placement()?;
        let content = match self.props.options() {
            None => OverlayContent::Loading,
            Some(options) => OverlayContent::List(self.list(options)),
        };
        Some(OverlayView {
            placement,
            animation: if self.props.animated {
                AnimationType::Fade
            } else {
                AnimationType::None
            },
            accessible: self.props.accessible,
            content,
        })
    }

    /// Build the adapted row for option `index`, if it exists.
    pub fn row(&self, index: usize) -> Option<PressableRow<C, P>> {
        let item = self.props.option(index)?;
        Some(self.adapted_row(item, index))
    }

    fn adapted_row(&self, item: &T, index: usize) -> PressableRow<C, P> {
        let highlighted = self.selected_index() == Some(index);
        let element = match &self.render_row {
            Some(render) => render(item, index, highlighted),
            None => self.default_row(item, highlighted),
        };
        adapt_row(element, index, self.props.accessible)
    }

    fn default_row(&self, item: &T, highlighted: bool) -> RowElement<C, P> {
        let mut style = TextStyle::ROW.merge(&self.props.row_text_style);
        if highlighted {
            style = style
                .merge(&TextStyle::HIGHLIGHTED_ROW)
                .merge(&self.props.highlighted_row_text_style);
        }
        RowElement::Text(TextRow {
            text: item.to_string(),
            highlighted,
            style,
        })
    }

    fn separator(&self, index: usize) -> SeparatorView<C> {
        let key = RowKey::Separator(index);
        match &self.render_separator {
            Some(render) => {
                let selected = self.selected_index();
                let adjacent = selected == Some(index) || selected == Some(index + 1);
                SeparatorView::Custom {
                    key,
                    content: render(index, adjacent),
                }
            }
            None => SeparatorView::Hairline {
                key,
                thickness: self.props.hairline_width,
                color: Rgba8::LIGHT_GRAY,
            },
        }
    }

    fn list(&self, options: &[T]) -> ListView<C, P> {
        let mut entries = Vec::with_capacity(options.len() * 2);
        for (index, item) in options.iter().enumerate() {
            if index > 0 {
                entries.push(ListEntry::Separator(self.separator(index - 1)));
            }
            entries.push(ListEntry::Row(self.adapted_row(item, index)));
        }
        ListView {
            entries,
            scroll_enabled: self.props.scroll_enabled,
            shows_scroll_indicator: self.props.shows_scroll_indicator,
            keyboard_dismiss_mode: self.props.keyboard_dismiss_mode,
        }
    }
}
