//! `setTimeout` backed timer driver

use gloo_timers::callback::Timeout;
use salesclose_core::{TimerDriver, TimerKind};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

/// Longest delay `setTimeout` accepts
const MAX_DELAY_MS: u32 = i32::MAX as u32;

pub fn delay_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).map_or(MAX_DELAY_MS, |ms| ms.min(MAX_DELAY_MS))
}

/// One browser timeout per [`TimerKind`]
pub struct GlooTimers {
    pending: HashMap<TimerKind, Timeout>,
    on_fire: Rc<dyn Fn(TimerKind)>,
}

impl GlooTimers {
    pub fn new(on_fire: impl Fn(TimerKind) + 'static) -> Self {
        Self {
            pending: HashMap::new(),
            on_fire: Rc::new(on_fire),
        }
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.pending.contains_key(&kind)
    }
}

impl TimerDriver for GlooTimers {
    fn arm(&mut self, kind: TimerKind, delay: Duration) {
        let on_fire = self.on_fire.clone();
        let timeout = Timeout::new(delay_millis(delay), move || {
            // Handlers may re-arm this kind, which drops the handle owning
            // this closure, so they run after it returns.
            wasm_bindgen_futures::spawn_local(async move { on_fire(kind) });
        });
        // Dropping the previous handle clears its timeout.
        self.pending.insert(kind, timeout);
    }

    fn cancel(&mut self, kind: TimerKind) {
        self.pending.remove(&kind);
    }
}
