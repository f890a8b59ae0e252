use crate::config::{BeamsConfig, OptionValue};
use crate::frame::FrameScheduler;
use crate::paint::{Canvas2d, GradientStop};
use crate::surface::ResizeSubscription;
use crate::viewport::{LogicalSize, Viewport};
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Current host box in CSS pixels and the window's device pixel ratio.
pub fn measure(window: &web::Window, container: &web::HtmlElement) -> Viewport {
    let rect = container.get_bounding_client_rect();
    Viewport::new(
        LogicalSize::new(rect.width(), rect.height()),
        window.device_pixel_ratio(),
    )
}

/// Create the backdrop canvas as the first child of `container`, layered
/// behind its content and transparent to pointer input.
pub fn create_canvas(
    document: &web::Document,
    container: &web::HtmlElement,
    config: &BeamsConfig,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    _ = canvas.set_attribute("aria-hidden", "true");

    let style = canvas.style();
    let blur = format!("blur({}px)", config.blur_px);
    let mut props = vec![
        ("position", "absolute"),
        ("inset", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("pointer-events", "none"),
        ("background", "transparent"),
    ];
    if config.blur_px > 0.0 {
        props.push(("filter", blur.as_str()));
    }
    for (name, value) in props {
        style
            .set_property(name, value)
            .map_err(|e| anyhow!("style {}: {:?}", name, e))?;
    }

    container
        .insert_before(&canvas, container.first_child().as_ref())
        .map_err(|e| anyhow!("insert canvas: {:?}", e))?;
    Ok(canvas)
}

/// Read `baseHue`, `grayscale`, `intensity` and `blur` from a plain JS object.
pub fn read_options(options: &JsValue) -> BeamsConfig {
    if !options.is_object() {
        if !options.is_undefined() && !options.is_null() {
            log::warn!("[config] options must be an object, got {:?}", options);
        }
        return BeamsConfig::default();
    }
    BeamsConfig::from_options(|key| {
        js_sys::Reflect::get(options, &JsValue::from_str(key))
            .ok()
            .and_then(option_value)
    })
}

fn option_value(v: JsValue) -> Option<OptionValue> {
    if v.is_undefined() || v.is_null() {
        return None;
    }
    let value = if let Some(n) = v.as_f64() {
        OptionValue::Number(n)
    } else if let Some(b) = v.as_bool() {
        OptionValue::Bool(b)
    } else if let Some(s) = v.as_string() {
        OptionValue::Text(s)
    } else {
        OptionValue::Other(format!("{:?}", v))
    };
    Some(value)
}

pub fn read_attributes(container: &web::HtmlElement) -> BeamsConfig {
    BeamsConfig::from_attributes(|name| container.get_attribute(name))
}

// ---------------- Canvas 2D ----------------

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: Option<web::CanvasRenderingContext2d>,
    warned: bool,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> Self {
        Self {
            canvas,
            ctx: None,
            warned: false,
        }
    }

    fn acquire(&self) -> Option<web::CanvasRenderingContext2d> {
        self.canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
    }
}

impl Canvas2d for CanvasSurface {
    fn ready(&mut self) -> bool {
        if self.ctx.is_none() {
            self.ctx = self.acquire();
            if self.ctx.is_none() && !self.warned {
                log::warn!("[dom] 2d context unavailable; skipping frames until it is");
                self.warned = true;
            }
        }
        self.ctx.is_some()
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn set_scale_transform(&mut self, dpr: f64) {
        if let Some(ctx) = &self.ctx {
            _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        }
    }

    fn clear_rect(&mut self, width: f64, height: f64) {
        if let Some(ctx) = &self.ctx {
            ctx.clear_rect(0.0, 0.0, width, height);
        }
    }

    fn save(&mut self) {
        if let Some(ctx) = &self.ctx {
            ctx.save();
        }
    }

    fn restore(&mut self) {
        if let Some(ctx) = &self.ctx {
            ctx.restore();
        }
    }

    fn translate(&mut self, x: f64, y: f64) {
        if let Some(ctx) = &self.ctx {
            _ = ctx.translate(x, y);
        }
    }

    fn rotate(&mut self, radians: f64) {
        if let Some(ctx) = &self.ctx {
            _ = ctx.rotate(radians);
        }
    }

    fn fill_vertical_gradient(&mut self, width: f64, length: f64, stops: &[GradientStop]) {
        let Some(ctx) = &self.ctx else { return };
        let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, length);
        for stop in stops {
            _ = gradient.add_color_stop(stop.offset as f32, &stop.color.to_string());
        }
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill_rect(0.0, 0.0, width, length);
    }
}

// ---------------- requestAnimationFrame ----------------

pub struct AnimationFrames {
    window: web::Window,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

impl AnimationFrames {
    pub fn new(window: web::Window, callback: Closure<dyn FnMut(f64)>) -> Self {
        Self {
            window,
            callback: Some(callback),
        }
    }
}

impl FrameScheduler for AnimationFrames {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let cb = self.callback.as_ref()?;
        match self
            .window
            .request_animation_frame(cb.as_ref().unchecked_ref())
        {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::error!("[dom] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }

    fn release(&mut self) {
        self.callback = None;
    }
}

// ---------------- window resize ----------------

pub struct WindowResize {
    window: web::Window,
    closure: Option<Closure<dyn FnMut()>>,
}

impl WindowResize {
    pub fn subscribe(window: &web::Window, closure: Closure<dyn FnMut()>) -> anyhow::Result<Self> {
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("add resize listener: {:?}", e))?;
        Ok(Self {
            window: window.clone(),
            closure: Some(closure),
        })
    }
}

impl ResizeSubscription for WindowResize {
    fn unsubscribe(&mut self) {
        if let Some(closure) = self.closure.take() {
            _ = self
                .window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for WindowResize {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
