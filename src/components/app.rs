use super::{settings_panel::SettingsPanel, splash::Splash};
use crate::model::Rgba;
use crate::state::SplashSettings;
use yew::prelude::*;

const CARD_STYLE: &str = "background:#161b22; border:1px solid #30363d; border-radius:10px; display:flex; align-items:center; justify-content:center; user-select:none; cursor:pointer;";

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(SplashSettings::load);

    // Persist settings on every change
    {
        let settings = settings.clone();
        use_effect_with((*settings).clone(), move |_| {
            settings.save();
            || ()
        });
    }

    let on_change = {
        let settings = settings.clone();
        Callback::from(move |s: SplashSettings| settings.set(s))
    };
    let error = settings.to_config().err().map(|e| e.to_string());
    let color = settings.color();
    let (min_radius, max_radius) = (settings.min_radius, settings.max_radius);

    html! {
        <div style="padding:16px; display:flex; flex-direction:column; gap:16px; color:#c9d1d9; background:#0e1116; min-height:100vh; box-sizing:border-box;">
            <h2 style="margin:0; color:#58a6ff;">{"Tap Splash"}</h2>
            <p style="margin:0; opacity:0.8;">{"Tap a card. Dragging before release cancels the splash."}</p>
            <SettingsPanel settings={(*settings).clone()} on_change={on_change} error={error} />
            <div style="display:flex; flex-wrap:wrap; gap:24px; align-items:flex-start;">
                <Splash splash_color={Some(color)} min_radius={min_radius} max_radius={max_radius}>
                    <div style={format!("{} width:40px; height:40px;", CARD_STYLE)}>{"S"}</div>
                </Splash>
                <Splash splash_color={Some(color)} min_radius={min_radius} max_radius={max_radius}>
                    <div style={format!("{} width:100px; height:80px;", CARD_STYLE)}>{"Medium"}</div>
                </Splash>
                <Splash splash_color={Some(color)} min_radius={min_radius} max_radius={max_radius}>
                    <div style={format!("{} width:300px; height:300px;", CARD_STYLE)}>{"Large"}</div>
                </Splash>
                <Splash splash_color={Some(Rgba::new(88, 166, 255, 255))}>
                    <div style={format!("{} width:160px; height:90px;", CARD_STYLE)}>{"Blue, defaults"}</div>
                </Splash>
            </div>
        </div>
    }
}
