//! Focus trap: keeps Tab navigation cycling inside a container while active.
//!
//! [`FocusTrap`] is the transition logic, written against [`FocusScope`] so
//! it runs against a fake DOM in tests. [`use_focus_trap`] binds it to the
//! browser: it captures focus on activation, intercepts `Tab` on the
//! document while active, and restores focus on deactivation or disposal.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::*;
use wasm_bindgen::JsCast;

use crate::dom::{active_html_element, ContainerRef, DomError, EventListenerGuard};

/// Selector for focus candidates; results are re-checked with [`is_focusable`].
pub const FOCUSABLE_SELECTOR: &str = "a[href], button:not([disabled]), \
     input:not([disabled]), textarea:not([disabled]), select:not([disabled]), \
     [tabindex]:not([tabindex=\"-1\"])";

/// Attributes that decide whether an element joins the focus cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusCandidate<'a> {
    /// Lower-case tag name.
    pub tag: &'a str,
    /// Whether an `href` attribute is present.
    pub has_href: bool,
    /// Whether a `disabled` attribute is present.
    pub disabled: bool,
    /// Raw `tabindex` attribute.
    pub tabindex: Option<&'a str>,
}

/// Whether a candidate is reachable with Tab.
pub fn is_focusable(candidate: &FocusCandidate<'_>) -> bool {
    if candidate.disabled {
        return false;
    }
    if let Some(index) = candidate
        .tabindex
        .and_then(|raw| raw.trim().parse::<i32>().ok())
    {
        return index >= 0;
    }
    match candidate.tag {
        "a" => candidate.has_href,
        "button" | "input" | "textarea" | "select" => true,
        _ => false,
    }
}

/// Focus operations a trap needs from its environment.
pub trait FocusScope {
    /// Element handle.
    type Node: Clone + PartialEq;

    /// Currently focused element.
    fn active_element(&self) -> Option<Self::Node>;

    /// Focusable descendants of `container` in document order.
    fn focusable_elements(&self, container: &Self::Node) -> Vec<Self::Node>;

    /// Moves focus to `node`.
    fn focus(&self, node: &Self::Node);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Direction of a Tab press.
pub enum TabDirection {
    /// Tab.
    Forward,
    /// Shift+Tab.
    Backward,
}

impl TabDirection {
    /// Direction for a key press with the given shift state.
    pub fn from_shift(shift: bool) -> Self {
        if shift {
            Self::Backward
        } else {
            Self::Forward
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What the trap did with a Tab press.
pub enum TabOutcome {
    /// Let the browser move focus.
    Native,
    /// Focus wrapped to the other end of the set.
    Wrapped,
    /// Nothing to focus; the press is swallowed.
    Blocked,
}

impl TabOutcome {
    /// Whether the key event's default action must be prevented.
    pub fn prevents_default(self) -> bool {
        !matches!(self, Self::Native)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TrapState<N> {
    Inactive,
    Active { restore: Option<N> },
}

/// Two-state focus trap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTrap<N> {
    state: TrapState<N>,
}

impl<N> Default for FocusTrap<N> {
    fn default() -> Self {
        Self {
            state: TrapState::Inactive,
        }
    }
}

impl<N: Clone + PartialEq> FocusTrap<N> {
    /// Creates an inactive trap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the trap is engaged.
    pub fn is_active(&self) -> bool {
        matches!(self.state, TrapState::Active { .. })
    }

    /// Engages the trap on `container`.
    ///
    /// Captures the focused element for later restoration and focuses the
    /// first focusable descendant, if any. Without a container the trap
    /// stays inactive. Returns whether the trap transitioned to active.
    pub fn activate<S>(&mut self, scope: &S, container: Option<&N>) -> bool
    where
        S: FocusScope<Node = N>,
    {
        if self.is_active() {
            return false;
        }
        let Some(container) = container else {
            return false;
        };

        let restore = scope.active_element();
        if let Some(first) = scope.focusable_elements(container).first() {
            scope.focus(first);
        }
        self.state = TrapState::Active { restore };
        true
    }

    /// Handles a Tab press while focus may be inside `container`.
    ///
    /// The focusable set is recomputed on every call.
    pub fn handle_tab<S>(&self, scope: &S, container: &N, direction: TabDirection) -> TabOutcome
    where
        S: FocusScope<Node = N>,
    {
        if !self.is_active() {
            return TabOutcome::Native;
        }

        let elements = scope.focusable_elements(container);
        let (Some(first), Some(last)) = (elements.first(), elements.last()) else {
            return TabOutcome::Blocked;
        };

        let active = scope.active_element();
        match direction {
            TabDirection::Backward if active.as_ref() == Some(first) => {
                scope.focus(last);
                TabOutcome::Wrapped
            }
            TabDirection::Forward if active.as_ref() == Some(last) => {
                scope.focus(first);
                TabOutcome::Wrapped
            }
            _ => TabOutcome::Native,
        }
    }

    /// Disengages the trap and restores the focus captured at activation.
    ///
    /// Returns whether the trap was active.
    pub fn deactivate<S>(&mut self, scope: &S) -> bool
    where
        S: FocusScope<Node = N>,
    {
        match std::mem::replace(&mut self.state, TrapState::Inactive) {
            TrapState::Active { restore } => {
                if let Some(previous) = restore {
                    scope.focus(&previous);
                }
                true
            }
            TrapState::Inactive => false,
        }
    }
}

/// [`FocusScope`] over the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentFocusScope;

impl FocusScope for DocumentFocusScope {
    type Node = web_sys::HtmlElement;

    fn active_element(&self) -> Option<Self::Node> {
        active_html_element()
    }

    fn focusable_elements(&self, container: &Self::Node) -> Vec<Self::Node> {
        let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
            return Vec::new();
        };

        let mut elements = Vec::new();
        for index in 0..nodes.length() {
            let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            else {
                continue;
            };
            let tag = element.tag_name().to_ascii_lowercase();
            let tabindex = element.get_attribute("tabindex");
            let candidate = FocusCandidate {
                tag: &tag,
                has_href: element.has_attribute("href"),
                disabled: element.has_attribute("disabled"),
                tabindex: tabindex.as_deref(),
            };
            if is_focusable(&candidate) {
                elements.push(element);
            }
        }
        elements
    }

    fn focus(&self, node: &Self::Node) {
        let _ = node.focus();
    }
}

struct TrapSession<S: FocusScope, G> {
    scope: S,
    trap: FocusTrap<S::Node>,
    keydown: Option<G>,
}

impl<S: FocusScope, G> TrapSession<S, G> {
    fn new(scope: S) -> Self {
        Self {
            scope,
            trap: FocusTrap::new(),
            keydown: None,
        }
    }

    fn release(&mut self) {
        self.keydown = None;
        self.trap.deactivate(&self.scope);
    }
}

type DocumentSession = TrapSession<DocumentFocusScope, EventListenerGuard>;

/// Tab direction for a key press; `None` for any other key.
fn tab_direction(key: &str, shift: bool) -> Option<TabDirection> {
    (key == "Tab").then(|| TabDirection::from_shift(shift))
}

fn on_tab<C: ContainerRef>(
    session: &Weak<RefCell<DocumentSession>>,
    container: C,
    ev: web_sys::Event,
) {
    let Some(key) = ev.dyn_ref::<web_sys::KeyboardEvent>() else {
        return;
    };
    let Some(direction) = tab_direction(&key.key(), key.shift_key()) else {
        return;
    };
    let Some(session) = session.upgrade() else {
        return;
    };
    let Some(container) = container.get_untracked() else {
        return;
    };

    let outcome = {
        let session = session.borrow();
        session.trap.handle_tab(&session.scope, &container, direction)
    };
    if outcome.prevents_default() {
        ev.prevent_default();
    }
}

/// Traps Tab focus inside `container` while `active` is true.
///
/// Engagement waits until the container has mounted. Focus returns to the
/// previously focused element when `active` turns false or the owner is
/// disposed.
pub fn use_focus_trap<C: ContainerRef>(container: C, active: impl Into<MaybeSignal<bool>>) {
    bind_focus_trap(
        DocumentFocusScope,
        move || container.get(),
        active.into(),
        move |session: Weak<RefCell<DocumentSession>>| {
            EventListenerGuard::on_document("keydown", move |ev| {
                on_tab(&session, container, ev)
            })
        },
    );
}

/// Runs a [`FocusTrap`] over `scope` while `active` holds and `container` yields a node.
///
/// `listen` registers the key listener for a newly engaged trap; the returned
/// guard lives exactly as long as the trap stays engaged.
fn bind_focus_trap<S, G, C, L>(scope: S, container: C, active: MaybeSignal<bool>, listen: L)
where
    S: FocusScope + 'static,
    S::Node: 'static,
    G: 'static,
    C: Fn() -> Option<S::Node> + 'static,
    L: Fn(Weak<RefCell<TrapSession<S, G>>>) -> Result<G, DomError> + 'static,
{
    let session = Rc::new(RefCell::new(TrapSession::new(scope)));

    create_effect({
        let session = Rc::clone(&session);
        move |_| {
            let wanted = active.get();
            let element = container();

            if !wanted {
                session.borrow_mut().release();
                return;
            }
            if session.borrow().trap.is_active() {
                return;
            }
            let Some(element) = element else {
                return;
            };

            let keydown = match listen(Rc::downgrade(&session)) {
                Ok(guard) => guard,
                Err(err) => {
                    logging::warn!("focus trap inactive: {err}");
                    return;
                }
            };

            let mut state = session.borrow_mut();
            let state = &mut *state;
            if state.trap.activate(&state.scope, Some(&element)) {
                state.keydown = Some(keydown);
            }
        }
    });

    on_cleanup(move || session.borrow_mut().release());
}
