// One recognizer per surface attachment, fed from plain touch frames.

use super::config::GestureConfig;
use super::recognizer::{ContactPoint, Gesture, GestureRecognizer, Phase};

pub const TOUCH_EVENTS: [&str; 4] = ["touchstart", "touchmove", "touchend", "touchcancel"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchKind {
    Start,
    Move,
    End,
}

impl TouchKind {
    pub fn from_event_type(ty: &str) -> Option<Self> {
        match ty {
            "touchstart" => Some(Self::Start),
            "touchmove" => Some(Self::Move),
            // cancel lifts contacts the same way end does
            "touchend" | "touchcancel" => Some(Self::End),
            _ => None,
        }
    }
}

// `touches` and `changedTouches` of one event, in element coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchFrame {
    pub active: Vec<ContactPoint>,
    pub changed: Vec<ContactPoint>,
    pub timestamp: f64,
}

#[derive(Debug, Clone)]
pub struct TouchSession {
    recognizer: GestureRecognizer,
}

impl TouchSession {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            recognizer: GestureRecognizer::new(config),
        }
    }

    pub fn phase(&self) -> Phase {
        self.recognizer.phase()
    }

    pub fn handle(&mut self, kind: TouchKind, frame: &TouchFrame) -> Option<Gesture> {
        let r = &mut self.recognizer;
        match kind {
            TouchKind::Start => r.contact_start(&frame.active),
            TouchKind::Move => r.contact_move(&frame.active),
            TouchKind::End => r.contact_end(frame.active.len(), &frame.changed, frame.timestamp),
        }
    }

    pub fn handle_event(&mut self, event_type: &str, frame: &TouchFrame) -> Option<Gesture> {
        let kind = TouchKind::from_event_type(event_type)?;
        self.handle(kind, frame)
    }
}
