#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod backdrop;
mod beam;
mod config;
mod constants;
mod dom;
mod frame;
mod paint;
mod surface;
mod viewport;

use backdrop::Backdrop;
use config::BeamsConfig;

type WebBackdrop = Backdrop<dom::CanvasSurface, dom::WindowResize, dom::AnimationFrames, StdRng>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-beams loaded");
    Ok(())
}

/// Animated beam background mounted into a host element.
#[wasm_bindgen]
pub struct BackgroundBeams {
    inner: Rc<RefCell<WebBackdrop>>,
    container: web::HtmlElement,
    canvas: Option<web::HtmlCanvasElement>,
}

#[wasm_bindgen]
impl BackgroundBeams {
    /// Mount with optional `baseHue` (degrees) and `grayscale` inputs.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container: web::HtmlElement,
        base_hue: Option<f64>,
        grayscale: Option<bool>,
    ) -> Result<BackgroundBeams, JsValue> {
        let config = BeamsConfig::default().with_color_overrides(base_hue, grayscale);
        mount(container, config).map_err(to_js)
    }

    /// Mount from `{ baseHue, grayscale, intensity, blur }`.
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(
        container: web::HtmlElement,
        options: JsValue,
    ) -> Result<BackgroundBeams, JsValue> {
        let config = dom::read_options(&options);
        mount(container, config).map_err(to_js)
    }

    /// Mount using the container's `data-*` attributes.
    #[wasm_bindgen(js_name = fromElement)]
    pub fn from_element(container: web::HtmlElement) -> Result<BackgroundBeams, JsValue> {
        let config = dom::read_attributes(&container);
        mount(container, config).map_err(to_js)
    }

    /// Prop change. Takes effect for beams spawned or recycled afterwards.
    #[wasm_bindgen(js_name = setColorMode)]
    pub fn set_color_mode(&self, base_hue: Option<f64>, grayscale: Option<bool>) {
        let mut inner = self.inner.borrow_mut();
        let color = inner
            .config()
            .with_color_overrides(base_hue, grayscale)
            .color;
        inner.set_color_mode(color);
    }

    /// Re-measure the container now, as a window resize would.
    pub fn resize(&self) {
        if let Some(window) = web::window() {
            let viewport = dom::measure(&window, &self.container);
            self.inner.borrow_mut().resize(viewport);
        }
    }

    /// Stop animating and remove the canvas. Safe to call more than once.
    pub fn teardown(&mut self) {
        self.inner.borrow_mut().teardown();
        if let Some(canvas) = self.canvas.take() {
            canvas.remove();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.inner.borrow().is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn grayscale(&self) -> bool {
        self.inner.borrow().config().color.grayscale
    }

    #[wasm_bindgen(getter, js_name = baseHue)]
    pub fn base_hue(&self) -> f64 {
        self.inner.borrow().config().color.base_hue
    }

    #[wasm_bindgen(getter, js_name = beamCount)]
    pub fn beam_count(&self) -> usize {
        self.inner.borrow().pool().len()
    }
}

impl Drop for BackgroundBeams {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn to_js(e: anyhow::Error) -> JsValue {
    log::error!("[beams] mount error: {:?}", e);
    JsValue::from_str(&format!("{:#}", e))
}

fn mount(container: web::HtmlElement, config: BeamsConfig) -> anyhow::Result<BackgroundBeams> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let canvas = dom::create_canvas(&document, &container, &config)?;

    let inner: Rc<RefCell<WebBackdrop>> =
        Rc::new(RefCell::new(Backdrop::new(config, StdRng::from_entropy())));

    let frames = dom::AnimationFrames::new(window.clone(), frame_callback(Rc::downgrade(&inner)));
    let resize = match dom::WindowResize::subscribe(
        &window,
        resize_callback(Rc::downgrade(&inner), window.clone(), container.clone()),
    ) {
        Ok(r) => r,
        Err(e) => {
            canvas.remove();
            return Err(e);
        }
    };

    let viewport = dom::measure(&window, &container);
    inner
        .borrow_mut()
        .mount(dom::CanvasSurface::new(canvas.clone()), resize, frames, viewport);

    Ok(BackgroundBeams {
        inner,
        container,
        canvas: Some(canvas),
    })
}

// Closures hold only a weak handle so dropping the component frees everything.
fn frame_callback(backdrop: Weak<RefCell<WebBackdrop>>) -> Closure<dyn FnMut(f64)> {
    Closure::wrap(Box::new(move |timestamp: f64| {
        if let Some(b) = backdrop.upgrade() {
            b.borrow_mut().frame(timestamp);
        }
    }) as Box<dyn FnMut(f64)>)
}

fn resize_callback(
    backdrop: Weak<RefCell<WebBackdrop>>,
    window: web::Window,
    container: web::HtmlElement,
) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || {
        if let Some(b) = backdrop.upgrade() {
            let viewport = dom::measure(&window, &container);
            b.borrow_mut().resize(viewport);
        }
    }) as Box<dyn FnMut()>)
}
