use yew::prelude::*;

use crate::gesture::{GestureConfig, GestureHandlers, use_gestures};
use crate::model::{GalleryAction, GalleryState};

#[derive(Properties, PartialEq, Clone)]
pub struct PhotoViewerProps {
    pub gallery: UseReducerHandle<GalleryState>,
    pub config: GestureConfig,
}

#[function_component(PhotoViewer)]
pub fn photo_viewer(props: &PhotoViewerProps) -> Html {
    let surface_ref = use_node_ref();
    let last_gesture = use_state(String::new);

    let on = |action: GalleryAction, label: &'static str| {
        let gallery = props.gallery.clone();
        let last_gesture = last_gesture.clone();
        Some(Callback::from(move |_: ()| {
            gallery.dispatch(action.clone());
            last_gesture.set(label.to_string());
        }))
    };
    let handlers = GestureHandlers {
        on_swipe_left: on(GalleryAction::Next, "swipe left"),
        on_swipe_right: on(GalleryAction::Prev, "swipe right"),
        on_swipe_up: on(GalleryAction::ShowCaption, "swipe up"),
        on_swipe_down: on(GalleryAction::HideCaption, "swipe down"),
        on_pinch_start: on(GalleryAction::BeginZoom, "pinch"),
        on_pinch: {
            let gallery = props.gallery.clone();
            Some(Callback::from(move |scale: f64| {
                gallery.dispatch(GalleryAction::Zoom(scale))
            }))
        },
        on_pinch_end: on(GalleryAction::EndZoom, "pinch end"),
        on_tap: on(GalleryAction::ToggleCaption, "tap"),
        on_double_tap: on(GalleryAction::ToggleZoom, "double tap"),
    };
    use_gestures(surface_ref.clone(), props.config.clone(), handlers);

    let prev = {
        let gallery = props.gallery.clone();
        Callback::from(move |_| gallery.dispatch(GalleryAction::Prev))
    };
    let next = {
        let gallery = props.gallery.clone();
        Callback::from(move |_| gallery.dispatch(GalleryAction::Next))
    };

    let gallery = &*props.gallery;
    let img_style = format!(
        "max-width:100%; max-height:100%; transform:scale({:.3}); transition:transform 0.08s linear; user-select:none; pointer-events:none;",
        gallery.zoom
    );
    // The surface is always mounted so the gesture hook has an element to attach to.
    let content = match gallery.current() {
        Some(photo) => html! { <img src={photo.src.clone()} alt={photo.caption.clone()} style={img_style} /> },
        None => html! { <div style="padding:24px; opacity:0.7;">{"No photos yet."}</div> },
    };
    let caption_bar = match gallery.current() {
        Some(photo) if gallery.show_caption => html! {
            <div style="position:absolute; left:0; right:0; bottom:0; padding:14px 18px; background:rgba(0,0,0,0.6); display:flex; justify-content:space-between; align-items:center; gap:12px;">
                <button onclick={prev}>{"‹"}</button>
                <span style="flex:1; text-align:center;">{ photo.caption.clone() }</span>
                <span style="font-size:12px; opacity:0.7;">{ format!("{}/{}", gallery.index + 1, gallery.photos.len()) }</span>
                <button onclick={next}>{"›"}</button>
            </div>
        },
        _ => html! {},
    };

    html! {<div style="position:relative; width:100vw; height:100vh; background:#0d1117; overflow:hidden;">
        <div ref={surface_ref} style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; touch-action:none;">
            { content }
        </div>
        { caption_bar }
        if !last_gesture.is_empty() {
            <div style="position:absolute; top:12px; left:12px; font-size:11px; opacity:0.6;">{ (*last_gesture).clone() }</div>
        }
    </div>}
}
