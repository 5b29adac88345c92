//! Timing state machines behind the debounced inputs and throttled actions.
//!
//! These types hold no timers. The caller supplies the clock (milliseconds)
//! and owns the timer that eventually calls back into them.

mod debounce;
mod sequence;
mod throttle;

pub use debounce::{Debounce, Ticket};
pub use sequence::{RequestSequence, RequestToken};
pub use throttle::{Admission, Throttle};
