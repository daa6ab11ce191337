//! DOM view of the store: one section per UI mode, the current wizard step's
//! inputs and the review list. The view never holds state of its own; it is
//! redrawn from the store whenever the store's revision moves.

use crate::clock::AppClock;
use crate::core::{step_for_field, step_info, FormField, FormStore, UiAction, UiMode};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const SECTION_IDS: [(UiMode, &str); 4] = [
    (UiMode::Hero, "hero"),
    (UiMode::Wizard, "wizard"),
    (UiMode::Review, "review"),
    (UiMode::Submitted, "submitted"),
];

const BUTTONS: [(&str, UiAction); 7] = [
    ("start", UiAction::Start),
    ("prev", UiAction::Prev),
    ("next", UiAction::Next),
    ("to-review", UiAction::ToReview),
    ("back-to-wizard", UiAction::BackToWizard),
    ("submit", UiAction::Submit),
    ("restart", UiAction::Restart),
];

pub fn dispatch(store: &Rc<RefCell<FormStore>>, action: UiAction, clock: AppClock) {
    if let Err(e) = store.borrow_mut().apply(action, clock.now()) {
        log::error!("[ui] {:?} rejected: {}", action, e);
    }
}

pub fn wire(document: &web::Document, store: &Rc<RefCell<FormStore>>, clock: AppClock) {
    for (id, action) in BUTTONS {
        let store = store.clone();
        dom::add_click_listener(document, id, move || dispatch(&store, action, clock));
    }
    wire_field_inputs(document, store);
    wire_review_list(document, store, clock);
}

fn wire_field_inputs(document: &web::Document, store: &Rc<RefCell<FormStore>>) {
    for el in dom::query_all(document, "[data-field]") {
        let Some(field) = field_of(&el) else {
            continue;
        };
        let store = store.clone();
        let target = el.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            if let Some(value) = read_value(&target) {
                store.borrow_mut().update_field(field, value);
            }
        }) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

// Review rows carry `data-step`; clicking one jumps back to that step.
fn wire_review_list(document: &web::Document, store: &Rc<RefCell<FormStore>>, clock: AppClock) {
    let Some(list) = document.get_element_by_id("review-list") else {
        return;
    };
    let store = store.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let row = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest("[data-step]").ok().flatten());
        let step = row
            .and_then(|r| r.get_attribute("data-step"))
            .and_then(|s| s.parse::<usize>().ok());
        if let Some(step) = step {
            dispatch(&store, UiAction::EditStep(step), clock);
        }
    }) as Box<dyn FnMut(_)>);
    _ = list.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn render(document: &web::Document, store: &FormStore) {
    let mode = store.ui_mode();
    for (m, id) in SECTION_IDS {
        dom::set_hidden(document, id, m != mode);
    }
    match mode {
        UiMode::Wizard => render_wizard(document, store),
        UiMode::Review => render_review(document, store),
        UiMode::Hero | UiMode::Submitted => {}
    }
    sync_inputs(document, store);
}

fn render_wizard(document: &web::Document, store: &FormStore) {
    let step = store.step();
    if let Some(info) = step_info(step) {
        dom::set_text(document, "step-title", info.title);
        dom::set_text(document, "step-prompt", info.prompt);
    }
    dom::set_text(
        document,
        "step-counter",
        &format!("{} / {}", step + 1, store.total_steps()),
    );
    if let Some(fill) = document.get_element_by_id("progress-fill") {
        _ = fill.set_attribute("style", &format!("width:{:.1}%", store.progress() * 100.0));
    }
    dom::set_disabled(document, "prev", store.is_first_step());
    dom::set_text(
        document,
        "next",
        if store.is_last_step() { "Review" } else { "Next" },
    );

    for group in dom::query_all(document, "[data-field-group]") {
        let visible = group
            .get_attribute("data-field-group")
            .and_then(|k| k.parse::<FormField>().ok())
            .map(|f| step_for_field(f) == step)
            .unwrap_or(false);
        let cl = group.class_list();
        _ = if visible {
            cl.remove_1("hidden")
        } else {
            cl.add_1("hidden")
        };
    }
}

fn render_review(document: &web::Document, store: &FormStore) {
    let Some(list) = document.get_element_by_id("review-list") else {
        return;
    };
    list.set_inner_html("");
    for (field, value) in store.form().entries() {
        let Ok(row) = document.create_element("li") else {
            continue;
        };
        _ = row.set_attribute("data-step", &step_for_field(field).to_string());
        if let (Ok(label), Ok(val)) = (document.create_element("span"), document.create_element("span")) {
            _ = label.set_attribute("class", "review-label");
            label.set_text_content(Some(field.label()));
            _ = val.set_attribute("class", "review-value");
            val.set_text_content(Some(if value.is_empty() { "(empty)" } else { value }));
            _ = row.append_child(&label);
            _ = row.append_child(&val);
        }
        _ = list.append_child(&row);
    }
}

// Push store values into inputs that disagree (e.g. after a reset).
fn sync_inputs(document: &web::Document, store: &FormStore) {
    for el in dom::query_all(document, "[data-field]") {
        let Some(field) = field_of(&el) else {
            continue;
        };
        let want = store.field(field);
        if read_value(&el).as_deref() != Some(want) {
            write_value(&el, want);
        }
    }
}

fn field_of(el: &web::Element) -> Option<FormField> {
    let key = el.get_attribute("data-field")?;
    match key.parse::<FormField>() {
        Ok(f) => Some(f),
        Err(e) => {
            log::warn!("[ui] {}", e);
            None
        }
    }
}

fn read_value(el: &web::Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<web::HtmlTextAreaElement>().map(|t| t.value())
}

fn write_value(el: &web::Element, value: &str) {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(t) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        t.set_value(value);
    }
}
