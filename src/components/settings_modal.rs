use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::gesture::GestureConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub config: GestureConfig,
    pub on_change: Callback<GestureConfig>,
    pub on_reset: Callback<()>,
    pub on_close: Callback<()>,
}

fn input_value(e: &Event) -> Option<f64> {
    e.target_dyn_into::<HtmlInputElement>()?
        .value()
        .parse::<f64>()
        .ok()
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    // Out-of-range values are dropped here; the saved config always validates.
    let swipe_cb = {
        let cb = props.on_change.clone();
        let base = props.config.clone();
        Callback::from(move |e: Event| {
            let Some(v) = input_value(&e) else { return };
            let next = GestureConfig {
                swipe_threshold: v,
                ..base.clone()
            };
            if next.validate().is_ok() {
                cb.emit(next);
            }
        })
    };
    let pinch_cb = {
        let cb = props.on_change.clone();
        let base = props.config.clone();
        Callback::from(move |e: Event| {
            let Some(v) = input_value(&e) else { return };
            let next = GestureConfig {
                pinch_threshold: v,
                ..base.clone()
            };
            if next.validate().is_ok() {
                cb.emit(next);
            }
        })
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:300px; max-width:420px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Gesture Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <label style="display:flex; flex-direction:column; gap:4px;">
                <span>{ format!("Swipe distance: {:.0}px", props.config.swipe_threshold) }</span>
                <input type="range" min="10" max="200" step="5"
                    value={props.config.swipe_threshold.to_string()}
                    onchange={swipe_cb} />
            </label>
            <label style="display:flex; flex-direction:column; gap:4px;">
                <span>{ format!("Pinch sensitivity: {:.2}", props.config.pinch_threshold) }</span>
                <input type="range" min="0" max="0.5" step="0.01"
                    value={props.config.pinch_threshold.to_string()}
                    onchange={pinch_cb} />
            </label>
            <div style="display:flex; gap:8px;">
                <button onclick={reset_cb} style="flex:1;">{"Reset to defaults"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Swipe distance is how far a finger must travel to change photos. Pinch sensitivity is how much the zoom must change before the photo updates."}</div>
        </div>
    </div>}
}
