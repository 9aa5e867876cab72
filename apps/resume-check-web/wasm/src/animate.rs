//! requestAnimationFrame and setTimeout drivers
//!
//! Each counter runs its own frame loop and stops when its tween finishes.
//! Loops are never cancelled; a new report simply starts new ones.

use resume_check_core::Tween;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Current time on the same clock as animation frame timestamps
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn request_frame(callback: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window object available"))?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Drive `target`'s text with the rounded tween value until it finishes.
pub fn run_counter(target: Element, tween: Tween) -> Result<(), JsValue> {
    let (initial, done) = tween.sample(now_ms());
    target.set_text_content(Some(&initial.to_string()));
    if done {
        return Ok(());
    }

    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let handle = callback.clone();

    *callback.borrow_mut() = Some(Closure::new(move |now: f64| {
        let (value, done) = tween.sample(now);
        target.set_text_content(Some(&value.to_string()));

        if done {
            // Dropping the closure ends the loop.
            let _ = handle.borrow_mut().take();
        } else if let Some(next) = handle.borrow().as_ref() {
            if let Err(e) = request_frame(next) {
                tracing::warn!("animation frame request failed: {:?}", e);
            }
        }
    }));

    if let Some(first) = callback.borrow().as_ref() {
        request_frame(first)?;
    }
    Ok(())
}

/// Run `f` once after `delay_ms`.
pub fn after_delay(delay_ms: u32, f: impl FnOnce() + 'static) -> Result<i32, JsValue> {
    let window =
        web_sys::window().ok_or_else(|| JsValue::from_str("No window object available"))?;
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms.min(i32::MAX as u32) as i32,
    )
}
