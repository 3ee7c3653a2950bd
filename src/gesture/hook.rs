use tracing::warn;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::config::GestureConfig;
use super::handlers::GestureHandlers;
use super::surface::SurfaceAttachment;

// Re-attaches (fresh session) when node or config change; handlers can
// change every render without resetting a gesture.
#[hook]
pub fn use_gestures(node: NodeRef, config: GestureConfig, handlers: GestureHandlers) {
    let handlers_cell = use_mut_ref(GestureHandlers::default);
    *handlers_cell.borrow_mut() = handlers;

    use_effect_with((node, config), move |(node, config)| {
        let attachment = node.cast::<HtmlElement>().and_then(|el| {
            match SurfaceAttachment::attach(&el, config.clone(), handlers_cell) {
                Ok(a) => Some(a),
                Err(e) => {
                    warn!(error = %e, "gesture surface unavailable");
                    None
                }
            }
        });
        move || drop(attachment)
    });
}
