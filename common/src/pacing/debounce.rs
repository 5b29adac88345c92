/// Identifies one input pushed into a [`Debounce`]. Only the ticket of the
/// most recent input settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Trailing-edge debounce over a changing value.
///
/// Every push supersedes the previous one; the owner restarts its timer with
/// the new ticket and hands that ticket back to [`Debounce::settle`] once the
/// quiet window has passed.
#[derive(Debug)]
pub struct Debounce<T> {
    delay_ms: u32,
    latest: u64,
    pending: Option<T>,
}

impl<T> Debounce<T> {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            latest: 0,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn push(&mut self, value: T) -> Ticket {
        self.latest += 1;
        self.pending = Some(value);
        Ticket(self.latest)
    }

    /// Releases the pending value if `ticket` belongs to the latest push.
    pub fn settle(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 != self.latest {
            return None;
        }
        self.pending.take()
    }

    /// Drops the pending value so no outstanding ticket can release it.
    pub fn cancel(&mut self) {
        self.latest += 1;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_value_propagates() {
        let mut debounce = Debounce::new(300);
        let first = debounce.push("r");
        let second = debounce.push("ru");
        let third = debounce.push("rust");

        assert_eq!(debounce.settle(first), None);
        assert_eq!(debounce.settle(second), None);
        assert_eq!(debounce.settle(third), Some("rust"));
    }

    #[test]
    fn settles_once() {
        let mut debounce = Debounce::new(300);
        let ticket = debounce.push(1);
        assert_eq!(debounce.settle(ticket), Some(1));
        assert_eq!(debounce.settle(ticket), None);
    }

    #[test]
    fn new_input_after_settle_starts_fresh_window() {
        let mut debounce = Debounce::new(300);
        let first = debounce.push("a");
        assert_eq!(debounce.settle(first), Some("a"));
        let second = debounce.push("b");
        assert_eq!(debounce.settle(first), None);
        assert_eq!(debounce.settle(second), Some("b"));
    }

    #[test]
    fn cancel_invalidates_outstanding_ticket() {
        let mut debounce = Debounce::new(300);
        let ticket = debounce.push("tag");
        debounce.cancel();
        assert_eq!(debounce.settle(ticket), None);
    }
}
