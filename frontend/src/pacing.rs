//! Browser timers for the pacing state machines in `common::pacing`.
//!
//! Each debounced input and throttled action owns its own `Timeout`. A
//! `Timeout` cancels itself when dropped, so replacing it restarts the wait
//! and dropping the owning component releases every pending timer.

use common::pacing::{Admission, Debounce, Throttle, Ticket};
use gloo_timers::callback::Timeout;
use yew::Callback;

fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// A value that reaches the component only after a quiet period.
pub struct Debounced<T> {
    state: Debounce<T>,
    /// Held so that dropping or replacing it cancels the wait.
    #[allow(dead_code)]
    timer: Option<Timeout>,
}

impl<T> Debounced<T> {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            state: Debounce::new(delay_ms),
            timer: None,
        }
    }

    /// Records `value` and restarts the wait. `on_quiet` receives the ticket
    /// to hand back to [`Debounced::settle`].
    pub fn push(&mut self, value: T, on_quiet: Callback<Ticket>) {
        let ticket = self.state.push(value);
        self.timer = Some(Timeout::new(self.state.delay_ms(), move || {
            on_quiet.emit(ticket)
        }));
    }

    /// Called from the quiet-period message. The fired `Timeout` stays in
    /// place until the next push replaces it: it may still be on the stack.
    pub fn settle(&mut self, ticket: Ticket) -> Option<T> {
        self.state.settle(ticket)
    }
}

/// An action limited to one run per window with a coalesced trailing run.
pub struct Throttled<T> {
    state: Throttle<T>,
    #[allow(dead_code)]
    timer: Option<Timeout>,
}

impl<T> Throttled<T> {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            state: Throttle::new(delay_ms),
            timer: None,
        }
    }

    /// Returns the arguments to run with now, or `None` when the call was
    /// deferred. Deferred calls come back through `on_trailing`, after which
    /// the owner calls [`Throttled::fire`].
    pub fn call(&mut self, args: T, on_trailing: Callback<()>) -> Option<T> {
        match self.state.call(now_ms(), args) {
            Admission::Run(args) => Some(args),
            Admission::Schedule { wait_ms } => {
                self.timer = Some(Timeout::new(wait_ms.ceil() as u32, move || {
                    on_trailing.emit(())
                }));
                None
            }
            Admission::Coalesced => None,
        }
    }

    /// Forgets a deferred call. Used when the arguments it carries no longer
    /// make sense, e.g. a page number computed before the filters changed.
    pub fn cancel(&mut self) {
        self.state.cancel();
        self.timer = None;
    }

    pub fn fire(&mut self) -> Option<T> {
        self.state.fire(now_ms())
    }
}
