use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::SplashSettings;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsPanelProps {
    pub settings: SplashSettings,
    pub on_change: Callback<SplashSettings>,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component]
pub fn SettingsPanel(props: &SettingsPanelProps) -> Html {
    let min_cb = {
        let cb = props.on_change.clone();
        let current = props.settings.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(v) = input.value().parse::<f64>() {
                cb.emit(SplashSettings {
                    min_radius: v,
                    ..current.clone()
                });
            }
        })
    };
    let max_cb = {
        let cb = props.on_change.clone();
        let current = props.settings.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(v) = input.value().parse::<f64>() {
                cb.emit(SplashSettings {
                    max_radius: v,
                    ..current.clone()
                });
            }
        })
    };
    let color_cb = {
        let cb = props.on_change.clone();
        let current = props.settings.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(SplashSettings {
                color_hex: input.value(),
                ..current.clone()
            });
        })
    };
    let reset_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |_| cb.emit(SplashSettings::default()))
    };

    let row_style = "display:flex; align-items:center; gap:8px;";
    html! {
        <div style="background:#161b22; border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:10px; font-size:14px; max-width:340px;">
            <h3 style="margin:0; font-size:16px;">{"Splash Settings"}</h3>
            <label style={row_style}>
                <span style="flex:1;">{"Min radius"}</span>
                <input type="number" min="1" step="1" value={props.settings.min_radius.to_string()} oninput={min_cb} />
            </label>
            <label style={row_style}>
                <span style="flex:1;">{"Max radius"}</span>
                <input type="number" min="1" step="1" value={props.settings.max_radius.to_string()} oninput={max_cb} />
            </label>
            <label style={row_style}>
                <span style="flex:1;">{"Colour"}</span>
                <input type="color" value={props.settings.color().to_hex_rgb()} oninput={color_cb} />
            </label>
            if let Some(err) = props.error.clone() {
                <div style="color:#f85149; font-size:12px;">{ err }</div>
            }
            <button onclick={reset_cb} style="align-self:flex-start; padding:4px 10px; font-size:12px;">{"Reset to defaults"}</button>
        </div>
    }
}
