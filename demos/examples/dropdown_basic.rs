// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A dropdown driven by a pretend host: deferred measurement, a vetoed row, and a custom row.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example dropdown_basic`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Rect, Size};
use understory_dropdown::{
    Dropdown, DropdownProps, ListEntry, MeasureTicket, OverlayContent, OverlayView, Pressable,
    PressableKind, PressableRow, RowElement, SeparatorView,
};

/// Stand-in for a layout engine that answers measurements on the next frame.
#[derive(Debug, Default)]
struct Host {
    queued: Vec<MeasureTicket>,
}

impl Host {
    /// Answer every queued measurement with the trigger's current rect.
    fn flush(&mut self, dropdown: &mut Dropdown<&'static str, String>, trigger: Rect) {
        for ticket in self.queued.drain(..) {
            let applied = dropdown.on_measured(ticket, trigger);
            println!("  measurement {} applied: {applied}", ticket.generation());
        }
    }
}

impl understory_dropdown::GeometryProvider for Host {
    fn measure(&mut self, ticket: MeasureTicket) -> bool {
        self.queued.push(ticket);
        true
    }
}

fn describe(overlay: &OverlayView<String>) {
    println!("  placement: {:?}", overlay.placement.rect);
    match &overlay.content {
        OverlayContent::Loading => println!("  (loading)"),
        OverlayContent::List(list) => {
            for entry in &list.entries {
                match entry {
                    ListEntry::Row(PressableRow::Wrapped { key, body, .. }) => {
                        println!("  {key}: {body:?}");
                    }
                    ListEntry::Row(PressableRow::Preserved {
                        key,
                        kind,
                        children,
                        ..
                    }) => {
                        println!("  {key}: {kind:?} {children}");
                    }
                    ListEntry::Separator(SeparatorView::Hairline { key, thickness, .. }) => {
                        println!("  {key}: hairline {thickness}");
                    }
                    ListEntry::Separator(SeparatorView::Custom { key, content }) => {
                        println!("  {key}: {content}");
                    }
                }
            }
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("dropdown demo starting");

    let fruits = vec!["apple", "banana", "cherry", "durian"];
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);

    let mut dropdown: Dropdown<&str, String> = Dropdown::new(DropdownProps {
        default_index: Some(0),
        ..DropdownProps::with_options(fruits)
    })
    .with_viewport(Size::new(400.0, 800.0))
    .on_select(move |index, fruit: &&str| {
        sink.borrow_mut().push(format!("on_select({index}, {fruit})"));
        // Nobody likes durian.
        *fruit != "durian"
    })
    .render_row(|fruit, index, highlighted| {
        if index == 2 {
            RowElement::Pressable(
                Pressable::new(PressableKind::Opacity, (), format!("[{fruit}]"))
                    .on_press(|| println!("  custom row handler ran")),
            )
        } else {
            RowElement::Content(format!("{}{fruit}", if highlighted { "* " } else { "" }))
        }
    })
    .render_button_icon(|open| String::from(if open { "▲" } else { "▼" }));

    let trigger = Rect::new(20.0, 700.0, 160.0, 740.0);
    let mut host = Host::default();

    println!("trigger shows {:?}", dropdown.display_text());

    // Two presses before the host answers: only the second measurement counts.
    dropdown.press_trigger(&mut host);
    dropdown.press_trigger(&mut host);
    host.flush(&mut dropdown, trigger);

    let overlay = dropdown.overlay().unwrap();
    describe(&overlay);

    let OverlayContent::List(mut list) = overlay.content else {
        return;
    };
    let outcome = dropdown.activate_row(list.row_mut(3).unwrap());
    println!("durian: {outcome:?}, trigger shows {:?}", dropdown.display_text());

    dropdown.press_trigger(&mut host);
    host.flush(&mut dropdown, trigger);
    let mut row = dropdown.row(2).unwrap();
    let outcome = dropdown.activate_row(&mut row);
    println!("cherry: {outcome:?}, trigger shows {:?}", dropdown.display_text());
    println!("button: {:?}", dropdown.button());

    for event in events.borrow().iter() {
        println!("event: {event}");
    }
}
