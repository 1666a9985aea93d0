//! Guarded access to browser globals and scoped event-listener registrations.
//!
//! Every accessor returns [`DomError`] instead of panicking when the browser
//! environment is missing (server rendering, native test builds), so hooks can
//! stay inert outside a page.

use leptos::{html, NodeRef};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Browser environment failures surfaced by hook plumbing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// `window` is not reachable.
    #[error("browser window is unavailable")]
    NoWindow,
    /// `document` is not reachable.
    #[error("document is unavailable")]
    NoDocument,
    /// `document.body` is not present.
    #[error("document body is unavailable")]
    NoBody,
    /// `addEventListener` rejected the registration.
    #[error("failed to attach `{event}` listener: {detail}")]
    Listener {
        /// Event type.
        event: &'static str,
        /// Browser error rendering.
        detail: String,
    },
    /// `matchMedia` failed or is unsupported.
    #[error("matchMedia rejected `{query}`: {detail}")]
    MediaQuery {
        /// Query text.
        query: String,
        /// Browser error rendering.
        detail: String,
    },
}

/// Returns the browser window.
pub fn window() -> Result<web_sys::Window, DomError> {
    if cfg!(not(target_arch = "wasm32")) {
        return Err(DomError::NoWindow);
    }
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Returns the current document.
pub fn document() -> Result<web_sys::Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Returns `document.body`.
pub fn body() -> Result<web_sys::HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}

/// Returns `document.activeElement` when it is an HTML element.
pub fn active_html_element() -> Option<web_sys::HtmlElement> {
    document()
        .ok()
        .and_then(|document| document.active_element())
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Evaluates `query` with `window.matchMedia`.
pub fn match_media(query: &str) -> Result<web_sys::MediaQueryList, DomError> {
    let reject = |detail: String| DomError::MediaQuery {
        query: query.to_string(),
        detail,
    };
    window()?
        .match_media(query)
        .map_err(|err| reject(format!("{err:?}")))?
        .ok_or_else(|| reject("unsupported".to_string()))
}

/// An attached event listener, removed when dropped.
pub struct EventListenerGuard {
    target: web_sys::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListenerGuard {
    /// Attaches `handler` for `event` on `target`.
    pub fn attach(
        target: web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, DomError> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(handler));
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|err| DomError::Listener {
                event,
                detail: format!("{err:?}"),
            })?;
        Ok(Self {
            target,
            event,
            closure,
        })
    }

    /// Attaches `handler` for `event` on the document root.
    pub fn on_document(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, DomError> {
        Self::attach(document()?.into(), event, handler)
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// A reactive reference to the element a hook is bound to.
///
/// Implemented for [`NodeRef`]s of the container elements hooks are normally
/// attached to. `get` tracks the reference so effects rerun once the node
/// mounts.
pub trait ContainerRef: Copy + 'static {
    /// Current element, tracked.
    fn get(&self) -> Option<web_sys::HtmlElement>;

    /// Current element, untracked.
    fn get_untracked(&self) -> Option<web_sys::HtmlElement>;
}

macro_rules! container_ref {
    ($($el:ident),+ $(,)?) => {
        $(
            impl ContainerRef for NodeRef<html::$el> {
                fn get(&self) -> Option<web_sys::HtmlElement> {
                    NodeRef::get(self).map(|el| el.unchecked_ref::<web_sys::HtmlElement>().clone())
                }

                fn get_untracked(&self) -> Option<web_sys::HtmlElement> {
                    NodeRef::get_untracked(self)
                        .map(|el| el.unchecked_ref::<web_sys::HtmlElement>().clone())
                }
            }
        )+
    };
}

container_ref!(Div, Section, Article, Aside, Nav, Header, Footer, Main, Form, Ul, Ol);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn globals_are_unavailable_outside_the_browser() {
        assert_eq!(window().err(), Some(DomError::NoWindow));
        assert_eq!(body().err(), Some(DomError::NoWindow));
        assert!(active_html_element().is_none());
    }

    #[test]
    fn document_listeners_fail_soft_without_a_document() {
        let result = EventListenerGuard::on_document("keydown", |_| {});
        assert_eq!(result.err(), Some(DomError::NoWindow));
    }
}
