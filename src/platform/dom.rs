//! DOM helpers

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

// Icon library hook: the page may load feather-icons as a global
#[wasm_bindgen(inline_js = "
    export function replace_icons() {
        if (typeof feather !== 'undefined') {
            feather.replace();
            return true;
        }
        return false;
    }
")]
extern "C" {
    fn replace_icons() -> bool;
}

pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Element by id, or `None` if absent
pub fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

/// First descendant of `root` matching `selector`
pub fn find_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// First element in the document matching `selector`
pub fn find(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// All elements in the document matching `selector`
pub fn find_all(document: &Document, selector: &str) -> Vec<Element> {
    collect(document.query_selector_all(selector), selector)
}

/// All descendants of `root` matching `selector`
pub fn find_all_in(root: &Element, selector: &str) -> Vec<Element> {
    collect(root.query_selector_all(selector), selector)
}

fn collect(list: Result<NodeList, JsValue>, selector: &str) -> Vec<Element> {
    let Ok(list) = list else {
        log::warn!("Invalid selector {:?}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

/// Set an inline style property. SVG icons (after the icon library swaps them in)
/// are not `HtmlElement`s, so their `style` object is looked up reflectively.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    } else if let Ok(style) = js_sys::Reflect::get(el, &JsValue::from_str("style")) {
        if let Some(style) = style.dyn_ref::<web_sys::CssStyleDeclaration>() {
            let _ = style.set_property(property, value);
        }
    }
}

/// Add or remove a class
pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

/// Attach a listener for the rest of the page's life
pub fn on(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("Failed to attach {} listener", event);
    }
    closure.forget();
}

/// Whether the OS reports a light color scheme preference
pub fn prefers_light(window: &Window) -> bool {
    window
        .match_media("(prefers-color-scheme: light)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Blocking notification
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// Run the icon library, if the page loaded one
pub fn render_icons() {
    if replace_icons() {
        log::info!("Icons rendered");
    } else {
        log::debug!("No icon library on page");
    }
}
