// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row adaptation: turn whatever a row renderer produced into a pressable row.
//!
//! A row renderer may return plain content or a full pressable element of its own (for example a
//! row with swipe actions or nested buttons). [`adapt_row`] guarantees that every row, however it
//! was rendered, is pressable, carries a stable key, and reports its index when pressed:
//!
//! - A [`RowElement::Pressable`] root is kept. Its kind, props, and children are untouched; only
//!   the key and the press handler are replaced. The caller's own handler is not lost: it runs
//!   right after the row reports its selection.
//! - Any other root ([`RowElement::Text`] or [`RowElement::Content`]) is wrapped, exactly once,
//!   in a default [`PressableKind::Highlight`] container.
//!
//! ```rust
//! use understory_dropdown::{PressableKind, PressableRow, RowElement, RowKey, adapt_row};
//!
//! let row: PressableRow<&str> = adapt_row(RowElement::Content("plain"), 3, true);
//! assert_eq!(row.key(), RowKey::Row(3));
//! assert_eq!(row.kind(), PressableKind::Highlight);
//! assert!(matches!(row, PressableRow::Wrapped { .. }));
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::style::TextStyle;

/// Press handler attached to a pressable element.
pub type PressHandler = Box<dyn FnMut()>;

/// The pressable primitives a row root can be.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PressableKind {
    /// Darkens with an underlay while pressed.
    Highlight,
    /// Fades while pressed.
    Opacity,
    /// No visual feedback.
    WithoutFeedback,
    /// Platform-native ripple feedback.
    NativeFeedback,
}

/// Identity key of an entry in the overlay list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RowKey {
    /// The row for an option index.
    Row(usize),
    /// The separator after an option index.
    Separator(usize),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(index) => write!(f, "row_{index}"),
            Self::Separator(index) => write!(f, "spr_{index}"),
        }
    }
}

/// The default row: an option's text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRow {
    /// Text to show.
    pub text: String,
    /// Whether this row is the current selection.
    pub highlighted: bool,
    /// Fully cascaded style.
    pub style: TextStyle,
}

/// A pressable element produced by a row renderer.
pub struct Pressable<C, P = ()> {
    /// Which primitive this is.
    pub kind: PressableKind,
    /// Key set by the renderer; replaced during adaptation.
    pub key: Option<RowKey>,
    /// Handler set by the renderer; chained after selection during adaptation.
    pub on_press: Option<PressHandler>,
    /// Every other property of the element, carried through untouched.
    pub props: P,
    /// Element content.
    pub children: C,
}

impl<C, P> Pressable<C, P> {
    /// A pressable with no key and no handler.
    pub fn new(kind: PressableKind, props: P, children: C) -> Self {
        Self {
            kind,
            key: None,
            on_press: None,
            props,
            children,
        }
    }

    /// Attach a press handler.
    #[must_use]
    pub fn on_press(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_press = Some(Box::new(handler));
        self
    }
}

impl<C: fmt::Debug, P: fmt::Debug> fmt::Debug for Pressable<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pressable")
            .field("kind", &self.kind)
            .field("key", &self.key)
            .field("on_press", &self.on_press.is_some())
            .field("props", &self.props)
            .field("children", &self.children)
            .finish()
    }
}

/// Root of a rendered row, before adaptation.
#[derive(Debug)]
pub enum RowElement<C, P = ()> {
    /// The built-in text row.
    Text(TextRow),
    /// Plain caller content with no press behavior of its own.
    Content(C),
    /// A caller pressable whose properties must survive adaptation.
    Pressable(Pressable<C, P>),
}

/// Content placed inside a default wrapping container.
#[derive(Debug, PartialEq)]
pub enum RowBody<C> {
    /// The built-in text row.
    Text(TextRow),
    /// Plain caller content.
    Content(C),
}

/// The press behavior injected into every adapted row.
pub struct RowPress {
    index: usize,
    chained: Option<PressHandler>,
}

impl RowPress {
    /// A press that reports `index` and then runs `chained`, if any.
    pub fn new(index: usize, chained: Option<PressHandler>) -> Self {
        Self { index, chained }
    }

    /// The option index this row reports.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether a caller handler runs after the selection.
    pub fn has_chained(&self) -> bool {
        self.chained.is_some()
    }

    /// Report the row's index to `select`, then run the caller's own handler.
    pub fn fire(&mut self, select: impl FnOnce(usize)) {
        select(self.index);
        if let Some(handler) = self.chained.as_mut() {
            handler();
        }
    }
}

impl fmt::Debug for RowPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowPress")
            .field("index", &self.index)
            .field("chained", &self.chained.is_some())
            .finish()
    }
}

/// A row that is guaranteed to be pressable and to report its index.
#[derive(Debug)]
pub enum PressableRow<C, P = ()> {
    /// The renderer's own pressable, with only key and press replaced.
    Preserved {
        /// Primitive kind chosen by the renderer.
        kind: PressableKind,
        /// Injected key.
        key: RowKey,
        /// Renderer props, untouched.
        props: P,
        /// Renderer children, untouched.
        children: C,
        /// Injected press.
        press: RowPress,
    },
    /// Plain content wrapped in a default container.
    Wrapped {
        /// Kind of the wrapping container.
        kind: PressableKind,
        /// Injected key.
        key: RowKey,
        /// Accessibility flag of the container.
        accessible: bool,
        /// Wrapped content.
        body: RowBody<C>,
        /// Injected press.
        press: RowPress,
    },
}

impl<C, P> PressableRow<C, P> {
    /// The row's key.
    pub fn key(&self) -> RowKey {
        match self {
            Self::Preserved { key, .. } | Self::Wrapped { key, .. } => *key,
        }
    }

    /// The pressable kind at the row's root.
    pub fn kind(&self) -> PressableKind {
        match self {
            Self::Preserved { kind, .. } | Self::Wrapped { kind, .. } => *kind,
        }
    }

    /// The option index the row reports.
    pub fn index(&self) -> usize {
        self.press().index()
    }

    /// The injected press.
    pub fn press(&self) -> &RowPress {
        match self {
            Self::Preserved { press, .. } | Self::Wrapped { press, .. } => press,
        }
    }

    /// The injected press, mutably (firing it needs `&mut`).
    pub fn press_mut(&mut self) -> &mut RowPress {
        match self {
            Self::Preserved { press, .. } | Self::Wrapped { press, .. } => press,
        }
    }
}

/// Adapt a rendered row for option `index`.
///
/// `accessible` is applied to the wrapping container only; a preserved pressable keeps whatever
/// its props say.
pub fn adapt_row<C, P>(
    element: RowElement<C, P>,
    index: usize,
    accessible: bool,
) -> PressableRow<C, P> {
    let key = RowKey::Row(index);
    match element {
        RowElement::Pressable(pressable) => PressableRow::Preserved {
            kind: pressable.kind,
            key,
            props: pressable.props,
            children: pressable.children,
            press: RowPress::new(index, pressable.on_press),
        },
        RowElement::Text(text) => wrap(RowBody::Text(text), key, index, accessible),
        RowElement::Content(content) => wrap(RowBody::Content(content), key, index, accessible),
    }
}

fn wrap<C, P>(body: RowBody<C>, key: RowKey, index: usize, accessible: bool) -> PressableRow<C, P> {
    PressableRow::Wrapped {
        kind: PressableKind::Highlight,
        key,
        accessible,
        body,
        press: RowPress::new(index, None),
    }
}
