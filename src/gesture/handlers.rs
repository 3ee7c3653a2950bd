use yew::Callback;

use super::recognizer::{Gesture, SwipeDirection};

#[derive(Clone, Default, PartialEq)]
pub struct GestureHandlers {
    pub on_swipe_left: Option<Callback<()>>,
    pub on_swipe_right: Option<Callback<()>>,
    pub on_swipe_up: Option<Callback<()>>,
    pub on_swipe_down: Option<Callback<()>>,
    pub on_pinch_start: Option<Callback<()>>,
    pub on_pinch: Option<Callback<f64>>,
    pub on_pinch_end: Option<Callback<()>>,
    pub on_tap: Option<Callback<()>>,
    pub on_double_tap: Option<Callback<()>>,
}

impl GestureHandlers {
    pub fn dispatch(&self, gesture: Gesture) {
        let unit = match gesture {
            Gesture::Pinch(scale) => {
                if let Some(cb) = &self.on_pinch {
                    cb.emit(scale);
                }
                return;
            }
            Gesture::Tap => &self.on_tap,
            Gesture::DoubleTap => &self.on_double_tap,
            Gesture::Swipe(SwipeDirection::Left) => &self.on_swipe_left,
            Gesture::Swipe(SwipeDirection::Right) => &self.on_swipe_right,
            Gesture::Swipe(SwipeDirection::Up) => &self.on_swipe_up,
            Gesture::Swipe(SwipeDirection::Down) => &self.on_swipe_down,
            Gesture::PinchStart => &self.on_pinch_start,
            Gesture::PinchEnd => &self.on_pinch_end,
        };
        if let Some(cb) = unit {
            cb.emit(());
        }
    }
}
