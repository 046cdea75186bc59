//! Window level listeners for user input

use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo_utils::window;
use std::rc::Rc;

/// Input events that count as activity
pub const ACTIVITY_EVENTS: [&str; 5] = ["mousemove", "mousedown", "keydown", "scroll", "touchstart"];

/// Listeners stay attached until this value is dropped.
pub struct ActivityListeners {
    _listeners: Vec<EventListener>,
}

impl ActivityListeners {
    pub fn attach(on_activity: impl Fn() + 'static) -> Self {
        let on_activity: Rc<dyn Fn()> = Rc::new(on_activity);
        let window = window();

        let listeners = ACTIVITY_EVENTS
            .iter()
            .map(|event| {
                let on_activity = on_activity.clone();
                // Capture phase so scrolls inside panels are seen too.
                let options = EventListenerOptions {
                    phase: EventListenerPhase::Capture,
                    passive: true,
                };
                EventListener::new_with_options(&window, *event, options, move |_| on_activity())
            })
            .collect();

        Self {
            _listeners: listeners,
        }
    }
}
