//! Rotating title driver
//!
//! Runs a [`TitleRotator`] as a chain of `setTimeout` calls, one per step.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::dom;
use crate::rotator::{RotatorStep, TitleRotator};

#[derive(Default)]
struct TimerState {
    timeout: Cell<Option<i32>>,
    stopped: Cell<bool>,
}

/// Stop handle for a running rotator
#[derive(Clone, Default)]
pub struct RotatorHandle {
    state: Rc<TimerState>,
}

impl RotatorHandle {
    /// Cancel the pending step. The title keeps whatever text it shows now.
    pub fn stop(&self) {
        self.state.stopped.set(true);
        if let (Some(id), Some(window)) = (self.state.timeout.take(), dom::window()) {
            window.clear_timeout_with_handle(id);
        }
        log::debug!("Title rotation stopped");
    }

    pub fn is_stopped(&self) -> bool {
        self.state.stopped.get()
    }
}

/// Start rotating titles on `target`
pub fn start_rotator(rotator: TitleRotator, target: Element) -> RotatorHandle {
    let handle = RotatorHandle::default();
    let delay = rotator.start_delay_ms();
    schedule(handle.clone(), Rc::new(RefCell::new(rotator)), target, delay);
    handle
}

fn schedule(handle: RotatorHandle, rotator: Rc<RefCell<TitleRotator>>, target: Element, delay: u32) {
    if handle.is_stopped() {
        return;
    }
    let Some(window) = dom::window() else { return };

    let next = handle.clone();
    // once_into_js frees the closure after it fires
    let callback = Closure::once_into_js(move || {
        if next.is_stopped() {
            return;
        }
        next.state.timeout.set(None);
        let (step, delay) = rotator.borrow_mut().step();
        apply(&target, &step);
        schedule(next, rotator, target, delay);
    });

    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay as i32,
    ) {
        Ok(id) => handle.state.timeout.set(Some(id)),
        Err(_) => log::warn!("Failed to schedule title rotation"),
    }
}

fn apply(target: &Element, step: &RotatorStep) {
    match step {
        RotatorStep::FadeOut => dom::set_style(target, "opacity", "0"),
        RotatorStep::Show(text) => {
            target.set_text_content(Some(text));
            dom::set_style(target, "opacity", "1");
        }
    }
}
