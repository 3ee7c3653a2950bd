use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, TouchEvent, TouchList};

use super::config::GestureConfig;
use super::handlers::GestureHandlers;
use super::recognizer::{ContactPoint, Gesture};
use super::session::{TOUCH_EVENTS, TouchFrame, TouchSession};

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("failed to register {event} listener: {reason}")]
    Listener { event: &'static str, reason: String },
}

type TouchListener = Closure<dyn FnMut(TouchEvent)>;

// Dropping the attachment removes the listeners and the session behind them.
pub struct SurfaceAttachment {
    element: HtmlElement,
    listener: TouchListener,
    registered: Vec<&'static str>,
}

impl SurfaceAttachment {
    pub fn attach(
        element: &HtmlElement,
        config: GestureConfig,
        handlers: Rc<RefCell<GestureHandlers>>,
    ) -> Result<Self, SurfaceError> {
        let mut session = TouchSession::new(config);
        let listener = {
            let el = element.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                let event_type = e.type_();
                let frame = touch_frame(&el, &e);
                if event_type == "touchmove" && frame.active.len() >= 2 {
                    e.prevent_default();
                }
                let gesture = session.handle_event(&event_type, &frame);
                trace!(%event_type, active = frame.active.len(), phase = ?session.phase(), "touch");
                emit(&handlers, gesture);
            }) as Box<dyn FnMut(_)>)
        };

        let mut attachment = Self {
            element: element.clone(),
            listener,
            registered: Vec::with_capacity(TOUCH_EVENTS.len()),
        };
        for event in TOUCH_EVENTS {
            attachment.listen(event)?;
        }
        debug!("gesture surface attached");
        Ok(attachment)
    }

    fn listen(&mut self, event: &'static str) -> Result<(), SurfaceError> {
        self.element
            .add_event_listener_with_callback(event, self.listener.as_ref().unchecked_ref())
            .map_err(|e| SurfaceError::Listener {
                event,
                reason: format!("{e:?}"),
            })?;
        self.registered.push(event);
        Ok(())
    }
}

impl Drop for SurfaceAttachment {
    fn drop(&mut self) {
        for event in self.registered.drain(..) {
            let _ = self
                .element
                .remove_event_listener_with_callback(event, self.listener.as_ref().unchecked_ref());
        }
        debug!("gesture surface detached");
    }
}

// Handlers are cloned out first: a handler may re-render the owner, which
// rewrites the shared cell.
fn emit(handlers: &Rc<RefCell<GestureHandlers>>, gesture: Option<Gesture>) {
    let Some(gesture) = gesture else {
        return;
    };
    debug!(?gesture, "gesture recognized");
    let current = handlers.borrow().clone();
    current.dispatch(gesture);
}

fn touch_frame(el: &HtmlElement, e: &TouchEvent) -> TouchFrame {
    let timestamp = e.time_stamp();
    TouchFrame {
        active: contact_points(el, &e.touches(), timestamp),
        changed: contact_points(el, &e.changed_touches(), timestamp),
        timestamp,
    }
}

fn contact_points(el: &HtmlElement, touches: &TouchList, timestamp: f64) -> Vec<ContactPoint> {
    let rect = el.get_bounding_client_rect();
    (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|t| {
            ContactPoint::new(
                t.client_x() as f64 - rect.left(),
                t.client_y() as f64 - rect.top(),
                timestamp,
            )
        })
        .collect()
}
