//! Action Slots
//!
//! One slot per user action. Starting the action issues a fresh [`Ticket`] and
//! supersedes whatever was in flight; only the current ticket may apply its
//! response and clear the busy state.

/// Identifies one in-flight request of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionSlot {
    issued: u64,
    in_flight: Option<u64>,
}

impl ActionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a request, superseding any in-flight one
    pub fn start(&mut self) -> Ticket {
        self.issued += 1;
        self.in_flight = Some(self.issued);
        Ticket(self.issued)
    }

    /// Settle a request. Returns `false` for a superseded ticket, whose
    /// response must be dropped.
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        if self.in_flight == Some(ticket.0) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.in_flight == Some(ticket.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_clears_busy() {
        let mut slot = ActionSlot::new();
        let ticket = slot.start();
        assert!(slot.is_busy());
        assert!(slot.finish(ticket));
        assert!(!slot.is_busy());
    }

    #[test]
    fn test_superseded_ticket_is_ignored() {
        let mut slot = ActionSlot::new();
        let first = slot.start();
        let second = slot.start();
        assert!(!slot.finish(first));
        assert!(slot.is_busy());
        assert!(slot.finish(second));
        assert!(!slot.finish(second));
    }
}
