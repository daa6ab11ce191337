use crate::clock::AppClock;
use crate::core::{action_for_key, FormStore, KeyMods};
use crate::ui;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    store: &Rc<RefCell<FormStore>>,
    clock: AppClock,
) {
    let mods = KeyMods {
        ctrl: ev.ctrl_key(),
        meta: ev.meta_key(),
        alt: ev.alt_key(),
    };
    let mode = store.borrow().ui_mode();
    let Some(action) = action_for_key(&ev.key(), mods, mode) else {
        return;
    };
    log::debug!("[keys] {} -> {:?}", ev.key(), action);
    ui::dispatch(store, action, clock);
    ev.prevent_default();
}

pub fn wire_global_keydown(store: Rc<RefCell<FormStore>>, clock: AppClock) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &store, clock);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
