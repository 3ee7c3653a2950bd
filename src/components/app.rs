use super::{photo_viewer::PhotoViewer, settings_modal::SettingsModal};
use crate::gesture::GestureConfig;
use crate::model::{GalleryState, default_photos};
use tracing::info;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let gallery = use_reducer(|| GalleryState::new(default_photos()));
    let config = use_state(GestureConfig::load);
    let open_settings = use_state(|| false);

    // Persist threshold changes
    {
        use_effect_with((*config).clone(), move |cfg| {
            cfg.save();
            info!(
                swipe_threshold = cfg.swipe_threshold,
                pinch_threshold = cfg.pinch_threshold,
                "gesture config applied"
            );
            || ()
        });
    }

    let on_change = {
        let config = config.clone();
        Callback::from(move |cfg: GestureConfig| config.set(cfg))
    };
    let on_reset = {
        let config = config.clone();
        Callback::from(move |_| {
            GestureConfig::clear_saved();
            config.set(GestureConfig::default());
        })
    };
    let toggle_settings = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(!*open_settings))
    };
    let close_settings = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(false))
    };

    html! {
        <div id="root" style="position:relative;">
            <PhotoViewer gallery={gallery.clone()} config={(*config).clone()} />
            <div style="position:absolute; top:12px; right:12px;">
                <button onclick={toggle_settings}>{"⚙"}</button>
            </div>
            <SettingsModal
                show={*open_settings}
                config={(*config).clone()}
                on_change={on_change}
                on_reset={on_reset}
                on_close={close_settings}
            />
        </div>
    }
}
