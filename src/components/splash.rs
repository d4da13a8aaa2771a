use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};
use yew::prelude::*;

use super::raf_ticker::RafTicker;
use crate::model::{DEFAULT_MAX_RADIUS, DEFAULT_MIN_RADIUS, Point, Rgba, Size, SplashConfig};
use crate::render::{Overlay, SplashPainter, SplashSnapshot};
use crate::state::{SplashController, TapOutcome, TapState};

#[derive(Properties, PartialEq, Clone)]
pub struct SplashProps {
    pub children: Html,
    /// Ring colour; opaque black when unset.
    #[prop_or_default]
    pub splash_color: Option<Rgba>,
    #[prop_or(DEFAULT_MIN_RADIUS)]
    pub min_radius: f64,
    #[prop_or(DEFAULT_MAX_RADIUS)]
    pub max_radius: f64,
}

/// Wraps `children` and plays an expanding ring where they are tapped.
/// With invalid radii only the children are rendered.
#[function_component]
pub fn Splash(props: &SplashProps) -> Html {
    let color = props.splash_color.unwrap_or_default();
    match SplashConfig::new(props.min_radius, props.max_radius, color) {
        Ok(config) => html! {
            <SplashLayer config={config}>{ props.children.clone() }</SplashLayer>
        },
        Err(e) => {
            log::error!("splash disabled: {e}");
            html! { <>{ props.children.clone() }</> }
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
struct SplashLayerProps {
    config: SplashConfig,
    children: Html,
}

type ControllerCell = Rc<std::cell::RefCell<Option<SplashController<RafTicker>>>>;
type PaintedCell = Rc<std::cell::RefCell<Option<SplashSnapshot>>>;
type OverlayCell = Rc<std::cell::RefCell<Overlay>>;

#[function_component]
fn SplashLayer(props: &SplashLayerProps) -> Html {
    let wrapper_ref = use_node_ref();
    let canvas_ref = use_node_ref();
    let tap = use_mut_ref(TapState::default);
    let controller: ControllerCell = use_mut_ref(|| None);
    let painted: PaintedCell = use_mut_ref(|| None);
    let overlay: OverlayCell = use_mut_ref(|| Overlay::new(&props.config, 1.0));
    let refresh = use_force_update();

    // Controller + clock live from mount (or config change) until cleanup.
    {
        let controller = controller.clone();
        let canvas_ref = canvas_ref.clone();
        let tap = tap.clone();
        let painted = painted.clone();
        let overlay = overlay.clone();
        use_effect_with(props.config, move |config| {
            *overlay.borrow_mut() = Overlay::new(config, device_pixel_ratio());
            match RafTicker::new() {
                Some(ticker) => {
                    let weak = Rc::downgrade(&controller);
                    ticker.set_on_frame(move |now| {
                        let Some(cell) = weak.upgrade() else {
                            return false;
                        };
                        let geometry = *overlay.borrow();
                        let (keep, snapshot) = {
                            let mut guard = cell.borrow_mut();
                            let Some(ctrl) = guard.as_mut() else {
                                return false;
                            };
                            let keep = ctrl.tick(now);
                            let origin = geometry.to_canvas(tap.borrow().origin);
                            (keep, ctrl.snapshot(origin, None))
                        };
                        paint_frame(&canvas_ref, &painted, &geometry, snapshot);
                        keep
                    });
                    *controller.borrow_mut() = Some(SplashController::new(*config, ticker));
                }
                None => log::warn!("no browser window; splash animation unavailable"),
            }
            move || {
                if let Some(mut ctrl) = controller.borrow_mut().take() {
                    ctrl.dispose();
                }
            }
        });
    }

    let onpointerdown = {
        let tap = tap.clone();
        let wrapper_ref = wrapper_ref.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: PointerEvent| {
            let Some((pos, _)) = local_hit(&wrapper_ref, &e) else {
                return;
            };
            if tap.borrow_mut().pointer_down(pos) == TapOutcome::Refresh {
                refresh.force_update();
            }
        })
    };
    let onpointermove = {
        let tap = tap.clone();
        let wrapper_ref = wrapper_ref.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: PointerEvent| {
            let Some((pos, _)) = local_hit(&wrapper_ref, &e) else {
                return;
            };
            let pressed = e.buttons() != 0;
            if tap.borrow_mut().pointer_move(pos, pressed) == TapOutcome::Refresh {
                refresh.force_update();
            }
        })
    };
    let onpointerup = {
        let tap = tap.clone();
        let wrapper_ref = wrapper_ref.clone();
        let canvas_ref = canvas_ref.clone();
        let controller = controller.clone();
        let painted = painted.clone();
        let overlay = overlay.clone();
        let config = props.config;
        Callback::from(move |e: PointerEvent| {
            let Some((pos, size)) = local_hit(&wrapper_ref, &e) else {
                return;
            };
            if tap.borrow_mut().pointer_up(pos) != TapOutcome::Trigger {
                return;
            }
            let geometry = Overlay::new(&config, device_pixel_ratio());
            *overlay.borrow_mut() = geometry;
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let (width, height) = geometry.backing_size(size);
                canvas.set_width(width);
                canvas.set_height(height);
            }
            // Resizing wiped the canvas.
            *painted.borrow_mut() = None;
            if let Some(ctrl) = controller.borrow_mut().as_mut() {
                ctrl.trigger(size);
            }
        })
    };

    let armed = tap.borrow().armed;
    let canvas_style = Overlay::new(&props.config, 1.0).css_style();
    html! {
        <div
            ref={wrapper_ref}
            data-armed={if armed { "true" } else { "false" }}
            style="position:relative; display:inline-block; touch-action:manipulation;"
            {onpointerdown}
            {onpointermove}
            {onpointerup}
        >
            { props.children.clone() }
            <canvas
                ref={canvas_ref}
                style={canvas_style}
            />
        </div>
    }
}

/// Pointer position relative to the wrapper, and the wrapper's layout size.
fn local_hit(wrapper_ref: &NodeRef, e: &PointerEvent) -> Option<(Point, Size)> {
    let el = wrapper_ref.cast::<Element>()?;
    let rect = el.get_bounding_client_rect();
    Some((
        Point::new(
            e.client_x() as f64 - rect.left(),
            e.client_y() as f64 - rect.top(),
        ),
        Size::new(rect.width(), rect.height()),
    ))
}

fn device_pixel_ratio() -> f64 {
    web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
}

fn paint_frame(
    canvas_ref: &NodeRef,
    painted: &PaintedCell,
    geometry: &Overlay,
    snapshot: SplashSnapshot,
) {
    // Phase changes always repaint so a finished ring gets cleared.
    let needs_paint = match *painted.borrow() {
        Some(prev) => {
            prev.phase != snapshot.phase || SplashPainter::should_repaint(&prev, &snapshot)
        }
        None => true,
    };
    if !needs_paint {
        return;
    }
    let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
        return;
    };
    let mut ctx = match canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    {
        Some(c) => c,
        None => return,
    };
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    ctx.set_transform(geometry.scale, 0.0, 0.0, geometry.scale, 0.0, 0.0)
        .ok();
    SplashPainter::paint(&snapshot, &mut ctx);
    *painted.borrow_mut() = Some(snapshot);
}
