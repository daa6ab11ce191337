use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the whole window; the scene reads it each frame
/// for parallax. The form sits above the canvas, so listening on the canvas
/// alone would miss most moves.
pub fn wire_pointer_tracking(pointer: Rc<RefCell<input::PointerState>>) {
    let Some(wnd) = web::window() else {
        return;
    };
    let wnd_for_size = wnd.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let width = wnd_for_size
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let height = wnd_for_size
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let ndc = input::client_to_ndc(ev.client_x() as f32, ev.client_y() as f32, width, height);
        pointer.borrow_mut().ndc = ndc;
    }) as Box<dyn FnMut(_)>);

    _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}
