// Gallery state for the photo viewer.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 4.0;
pub const DOUBLE_TAP_ZOOM: f64 = 2.0;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub src: String,
    pub caption: String,
}

impl Photo {
    pub fn new(src: &str, caption: &str) -> Self {
        Self {
            src: src.to_string(),
            caption: caption.to_string(),
        }
    }
}

pub fn default_photos() -> Vec<Photo> {
    vec![
        Photo::new("photos/ceremony.jpg", "The ceremony"),
        Photo::new("photos/first-dance.jpg", "First dance"),
        Photo::new("photos/toast.jpg", "Toasts from the wedding party"),
        Photo::new("photos/cake.jpg", "Cutting the cake"),
        Photo::new("photos/sparklers.jpg", "Sparkler send-off"),
    ]
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    pub photos: Vec<Photo>,
    pub index: usize,
    pub zoom: f64,
    pub pinch_base_zoom: f64,
    pub show_caption: bool,
}

impl GalleryState {
    pub fn new(photos: Vec<Photo>) -> Self {
        Self {
            photos,
            index: 0,
            zoom: MIN_ZOOM,
            pinch_base_zoom: MIN_ZOOM,
            show_caption: true,
        }
    }

    pub fn current(&self) -> Option<&Photo> {
        self.photos.get(self.index)
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoom > MIN_ZOOM
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GalleryAction {
    Next,
    Prev,
    BeginZoom,
    Zoom(f64),
    EndZoom,
    ToggleZoom,
    ShowCaption,
    HideCaption,
    ToggleCaption,
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GalleryAction::*;
        let mut new = (*self).clone();
        match action {
            Next | Prev => {
                // Paging is disabled while zoomed in.
                if new.photos.is_empty() || new.is_zoomed() {
                    return self;
                }
                let len = new.photos.len();
                new.index = match action {
                    Next => (new.index + 1) % len,
                    _ => (new.index + len - 1) % len,
                };
                new.zoom = MIN_ZOOM;
            }
            BeginZoom => {
                new.pinch_base_zoom = new.zoom;
            }
            Zoom(scale) => {
                new.zoom = (new.pinch_base_zoom * scale).clamp(MIN_ZOOM, MAX_ZOOM);
            }
            EndZoom => {
                new.pinch_base_zoom = new.zoom;
            }
            ToggleZoom => {
                new.zoom = if new.is_zoomed() { MIN_ZOOM } else { DOUBLE_TAP_ZOOM };
            }
            ShowCaption => new.show_caption = true,
            HideCaption => new.show_caption = false,
            ToggleCaption => new.show_caption = !new.show_caption,
        }
        Rc::new(new)
    }
}
