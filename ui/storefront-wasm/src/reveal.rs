//! Scroll-triggered reveal for `.fade-in-on-scroll` elements.

use sf_shop_core::RevealTracker;
use sf_shop_core::reveal::{REVEAL_CLASS, REVEAL_SELECTOR, REVEAL_THRESHOLD};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;

const INDEX_ATTR: &str = "data-reveal-index";

/// Observe every tagged element; each gets the `visible` class once and is
/// then unobserved. The observer disconnects after the last one.
pub fn observe() -> Result<(), JsValue> {
    let targets = dom::query_all(REVEAL_SELECTOR);
    if targets.is_empty() {
        return Ok(());
    }
    for (index, el) in targets.iter().enumerate() {
        el.set_attribute(INDEX_ATTR, &index.to_string())?;
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new(targets.len())));
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(index) = target
                    .get_attribute(INDEX_ATTR)
                    .and_then(|v| v.parse::<usize>().ok())
                else {
                    continue;
                };
                if tracker
                    .borrow_mut()
                    .on_visibility(index, entry.is_intersecting())
                {
                    dom::add_class(&target, REVEAL_CLASS);
                    observer.unobserve(&target);
                }
            }
            if tracker.borrow().is_done() {
                observer.disconnect();
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    for el in &targets {
        observer.observe(el);
    }
    cb.forget();
    Ok(())
}
