#![forbid(unsafe_code)]

//! Scoped event-listener registrations.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::error::WebError;
use crate::events::WindowEvent;

struct Registration {
    target: EventTarget,
    event: WindowEvent,
    callback: Closure<dyn FnMut(Event)>,
}

/// Listeners registered together and removed together.
///
/// Dropping the set (or calling [`release`](Self::release)) unregisters every
/// listener and frees its closure.
#[derive(Default)]
pub struct ListenerSet {
    registrations: Vec<Registration>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        target: &EventTarget,
        event: WindowEvent,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<(), WebError> {
        let options = AddEventListenerOptions::new();
        options.set_passive(event.passive());
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event.name(),
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|_| WebError::Listener(event.name()))?;
        self.registrations.push(Registration {
            target: target.clone(),
            event,
            callback,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn release(&mut self) {
        for registration in self.registrations.drain(..) {
            let removed = registration.target.remove_event_listener_with_callback(
                registration.event.name(),
                registration.callback.as_ref().unchecked_ref(),
            );
            if removed.is_err() {
                driftfield_core::warn!(
                    event = registration.event.name(),
                    "failed to remove listener"
                );
            }
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.release();
    }
}
