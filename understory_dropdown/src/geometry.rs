// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger measurement: the one asynchronous step before the overlay can open.
//!
//! Opening asks a [`GeometryProvider`] to measure the trigger and hands it a [`MeasureTicket`].
//! The host answers later through [`Dropdown::on_measured`](crate::Dropdown::on_measured) with the
//! same ticket. Every request supersedes the previous one, and closing the dropdown revokes the
//! outstanding one, so an answer that arrives late is recognised by its ticket and dropped.
//!
//! There is no timeout. A provider that never answers leaves the dropdown closed.

use kurbo::Rect;

/// Identifies one measurement request.
///
/// Tickets are ordered by issue time; only the most recent outstanding ticket is honoured.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MeasureTicket(u64);

impl MeasureTicket {
    /// The request's generation number.
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Host-side measurement of the trigger in viewport coordinates.
pub trait GeometryProvider {
    /// Start measuring the trigger for `ticket`.
    ///
    /// Return `false` when the trigger cannot be measured at all (for example it is not
    /// mounted); the request is then abandoned and the dropdown stays as it was.
    fn measure(&mut self, ticket: MeasureTicket) -> bool;
}

impl<F> GeometryProvider for F
where
    F: FnMut(MeasureTicket) -> bool,
{
    fn measure(&mut self, ticket: MeasureTicket) -> bool {
        self(ticket)
    }
}

/// Bookkeeping for outstanding and completed measurements.
#[derive(Clone, Debug, Default)]
pub(crate) struct Measurement {
    generation: u64,
    pending: Option<MeasureTicket>,
    trigger: Option<Rect>,
}

impl Measurement {
    /// Issue a fresh ticket without making it outstanding yet.
    pub(crate) fn issue(&mut self) -> MeasureTicket {
        self.generation = self.generation.wrapping_add(1);
        MeasureTicket(self.generation)
    }

    /// Record `ticket` (from [`Self::issue`]) as the outstanding request.
    pub(crate) fn begin(&mut self, ticket: MeasureTicket) {
        if let Some(previous) = self.pending.replace(ticket) {
            log::trace!("measurement {} superseded", previous.0);
        }
    }

    /// Revoke the outstanding request, if any.
    pub(crate) fn cancel(&mut self) {
        self.pending = None;
    }

    /// Accept a result if it answers the outstanding request.
    pub(crate) fn complete(&mut self, ticket: MeasureTicket, trigger: Rect) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            self.trigger = Some(trigger);
            true
        } else {
            log::trace!("stale measurement {} discarded", ticket.0);
            false
        }
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Most recently accepted trigger rectangle.
    pub(crate) fn trigger(&self) -> Option<Rect> {
        self.trigger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_ticket_completes() {
        let mut m = Measurement::default();
        let first = m.issue();
        m.begin(first);
        let second = m.issue();
        m.begin(second);
        assert!(first < second);

        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!m.complete(first, rect));
        assert_eq!(m.trigger(), None);
        assert!(m.complete(second, rect));
        assert_eq!(m.trigger(), Some(rect));
        // A ticket completes at most once.
        assert!(!m.complete(second, rect));
    }

    #[test]
    fn cancel_revokes_outstanding_ticket() {
        let mut m = Measurement::default();
        let ticket = m.issue();
        m.begin(ticket);
        assert!(m.is_pending());
        m.cancel();
        assert!(!m.is_pending());
        assert!(!m.complete(ticket, Rect::ZERO));
    }

    #[test]
    fn unused_tickets_never_complete() {
        let mut m = Measurement::default();
        let outstanding = m.issue();
        m.begin(outstanding);
        // Issued but never begun, as when a provider refuses the request.
        let refused = m.issue();
        assert_eq!(refused.generation(), 2);
        assert!(!m.complete(refused, Rect::ZERO));
        assert!(m.complete(outstanding, Rect::ZERO));
    }
}
