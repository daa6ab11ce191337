//! Agent briefing wizard with a WebGPU particle-field background.
//!
//! `core` is platform independent and holds the store, the wizard layout and
//! the particle generator. Everything else is browser glue and only builds
//! for `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod clock;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod input;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod ui;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::clock::AppClock;
    use crate::constants::CANVAS_ID;
    use crate::core::{DeviceProfile, FormStore, ParticleField};
    use crate::{dom, events, frame, input, ui};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
        dom::sync_canvas_backing_size(canvas);
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            _ = window
                .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
        }
        resize_closure.forget();
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("vektor-web starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        // Device class is decided once; resizes do not change it.
        let viewport_width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let profile = DeviceProfile::from_viewport_width(viewport_width);
        let scene_config = profile.scene_config();
        log::info!(
            "[init] viewport={}px profile={:?} particles={}",
            viewport_width,
            profile,
            scene_config.particle_count
        );

        let store = Rc::new(RefCell::new(FormStore::new()));
        let clock = AppClock::new();
        let pointer = Rc::new(RefCell::new(input::PointerState::default()));

        ui::wire(&document, &store, clock);
        ui::render(&document, &store.borrow());
        events::wire_global_keydown(store.clone(), clock);
        events::wire_pointer_tracking(pointer.clone());

        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        wire_canvas_resize(&canvas);

        let mut rng = StdRng::from_entropy();
        let field = ParticleField::build(&scene_config, &mut rng);
        let gpu = frame::init_gpu(&canvas, &field, &scene_config).await;
        // Scene mounted (or given up on); the form is usable either way.
        store.borrow_mut().set_loading(false);

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
            store, clock, document, canvas, pointer, gpu,
        )));
        frame::start_loop(frame_ctx);
        Ok(())
    }
}
