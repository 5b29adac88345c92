/// What the caller must do with a throttled call.
#[derive(Debug, Clone, PartialEq)]
pub enum Admission<T> {
    /// Outside the cooldown: execute now with these arguments.
    Run(T),
    /// Inside the cooldown: arm a timer for `wait_ms` and call
    /// [`Throttle::fire`] when it elapses.
    Schedule { wait_ms: f64 },
    /// A trailing execution is already armed; its arguments were replaced.
    Coalesced,
}

/// Leading-edge throttle with a single coalesced trailing call.
///
/// At most one execution happens per `delay_ms` window, plus exactly one
/// trailing execution when calls arrived during the cooldown. The trailing
/// execution always uses the most recent arguments.
#[derive(Debug)]
pub struct Throttle<T> {
    delay_ms: f64,
    last_run: Option<f64>,
    trailing: Option<T>,
    armed: bool,
}

impl<T> Throttle<T> {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            last_run: None,
            trailing: None,
            armed: false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn call(&mut self, now_ms: f64, args: T) -> Admission<T> {
        if self.armed {
            self.trailing = Some(args);
            return Admission::Coalesced;
        }

        match self.last_run {
            Some(last) if now_ms - last < self.delay_ms => {
                self.trailing = Some(args);
                self.armed = true;
                Admission::Schedule {
                    wait_ms: self.delay_ms - (now_ms - last),
                }
            }
            _ => {
                self.last_run = Some(now_ms);
                Admission::Run(args)
            }
        }
    }

    /// Disarms a pending trailing execution and drops its arguments. A timer
    /// that still fires afterwards finds nothing to run.
    pub fn cancel(&mut self) {
        self.armed = false;
        self.trailing = None;
    }

    /// Called when the armed timer elapses. Returns the arguments of the
    /// trailing execution, if one is still pending.
    pub fn fire(&mut self, now_ms: f64) -> Option<T> {
        self.armed = false;
        let args = self.trailing.take()?;
        self.last_run = Some(now_ms);
        Some(args)
    }
}
