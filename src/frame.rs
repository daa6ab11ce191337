use crate::clock::AppClock;
use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::{base_line_opacity, line_opacity, FormStore, SceneMotion};
use crate::input;
use crate::overlay;
use crate::render;
use crate::ui;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub store: Rc<RefCell<FormStore>>,
    pub clock: AppClock,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<input::PointerState>>,
    pub gpu: Option<render::GpuState>,

    pub motion: SceneMotion,
    pub last_instant: Instant,
    // Line baseline only moves when the step changes
    pub base_opacity: f32,
    pub base_for_step: Option<usize>,
    pub rendered_revision: Option<u64>,
}

impl FrameContext {
    pub fn new(
        store: Rc<RefCell<FormStore>>,
        clock: AppClock,
        document: web::Document,
        canvas: web::HtmlCanvasElement,
        pointer: Rc<RefCell<input::PointerState>>,
        gpu: Option<render::GpuState>,
    ) -> Self {
        Self {
            store,
            clock,
            document,
            canvas,
            pointer,
            gpu,
            motion: SceneMotion::default(),
            last_instant: Instant::now(),
            base_opacity: base_line_opacity(0),
            base_for_step: None,
            rendered_revision: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        self.store.borrow_mut().tick(self.clock.now());
        self.sync_view();

        let (step, pulse) = {
            let s = self.store.borrow();
            (s.step(), s.pulse_intensity())
        };
        if self.base_for_step != Some(step) {
            self.base_opacity = base_line_opacity(step);
            self.base_for_step = Some(step);
        }

        let pointer_ndc = self.pointer.borrow().ndc;
        let Some(g) = &mut self.gpu else {
            return;
        };
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        let viewport = g.camera().viewport_at_target();
        self.motion.advance(dt_sec, pointer_ndc, viewport);

        let scene = render::SceneFrame {
            model: self.motion.model_matrix(),
            line_opacity: line_opacity(self.base_opacity, pulse),
        };
        match g.render(&scene) {
            Ok(()) => {}
            // Transient: the surface is reconfigured on the next resize check
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("render: surface lost/outdated, skipping frame");
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }

    // Redraw the DOM only when the store moved since the last frame.
    fn sync_view(&mut self) {
        let store = self.store.borrow();
        let rev = store.revision();
        if self.rendered_revision == Some(rev) {
            return;
        }
        ui::render(&self.document, &store);
        overlay::sync(&self.document, store.is_loading());
        self.rendered_revision = Some(rev);
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    field: &crate::core::ParticleField,
    scene_config: &crate::core::SceneConfig,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, field, scene_config).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
