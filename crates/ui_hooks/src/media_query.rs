//! Live `matchMedia` state.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use ui_style::Breakpoint;
use wasm_bindgen::JsCast;

use crate::dom::{match_media, EventListenerGuard};

/// Whether `query` currently matches, updated on `change` events.
///
/// Reads `false` when `window` is unavailable. A new query value drops the
/// previous listener and evaluates the new one.
pub fn use_media_query(query: impl Into<MaybeSignal<String>>) -> Signal<bool> {
    let query = query.into();
    let matches = create_rw_signal(false);
    let listener: Rc<RefCell<Option<EventListenerGuard>>> = Rc::default();

    create_effect({
        let listener = Rc::clone(&listener);
        move |_| {
            let query = query.get();
            listener.borrow_mut().take();

            let list = match match_media(&query) {
                Ok(list) => list,
                Err(err) => {
                    logging::warn!("media query unavailable: {err}");
                    matches.set(false);
                    return;
                }
            };
            matches.set(list.matches());

            let list_for_change = list.clone();
            let on_change = move |ev: web_sys::Event| {
                let now = ev
                    .dyn_ref::<web_sys::MediaQueryListEvent>()
                    .map(|change| change.matches())
                    .unwrap_or_else(|| list_for_change.matches());
                matches.set(now);
            };
            match EventListenerGuard::attach(list.into(), "change", on_change) {
                Ok(guard) => *listener.borrow_mut() = Some(guard),
                Err(err) => logging::warn!("media query listener skipped: {err}"),
            }
        }
    });

    on_cleanup(move || {
        listener.borrow_mut().take();
    });

    matches.into()
}

/// Whether the viewport is at least as wide as `breakpoint`.
///
/// `Breakpoint::Base` always matches.
pub fn use_breakpoint(breakpoint: Breakpoint) -> Signal<bool> {
    match breakpoint.media_query() {
        Some(query) => use_media_query(query),
        None => Signal::derive(|| true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_query_reads_false_outside_the_browser() {
        let runtime = create_runtime();
        let wide = use_media_query("(min-width: 768px)".to_string());
        assert!(!wide.get_untracked());
        runtime.dispose();
    }

    #[test]
    fn base_breakpoint_always_matches() {
        let runtime = create_runtime();
        assert!(use_breakpoint(Breakpoint::Base).get_untracked());
        runtime.dispose();
    }
}
