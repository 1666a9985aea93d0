//! Interaction hooks for registry components.
//!
//! Each hook wraps a browser API in reactive Leptos state and releases
//! whatever it registered (document listeners, `matchMedia` listeners, the
//! body overflow slot) when its enabling input turns off or its owner is
//! disposed. The state machines behind the DOM-facing hooks are plain types
//! ([`FocusTrap`], [`DisclosureState`], [`ScrollLockRegistry`]) so their
//! behaviour can be exercised without a browser.
//!
//! Outside a browser every hook is inert: DOM accessors report
//! [`DomError`] and the hooks log and skip their side effects.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod click_outside;
mod disclosure;
pub mod dom;
mod focus_trap;
mod media_query;
mod scroll_lock;
mod toggle;

pub use click_outside::{is_outside_press, use_click_outside, OUTSIDE_PRESS_EVENTS};
pub use disclosure::{
    use_disclosure, DisclosureOptions, DisclosureState, DisclosureTransition, UseDisclosure,
};
pub use dom::{ContainerRef, DomError, EventListenerGuard};
pub use focus_trap::{
    is_focusable, use_focus_trap, DocumentFocusScope, FocusCandidate, FocusScope, FocusTrap,
    TabDirection, TabOutcome, FOCUSABLE_SELECTOR,
};
pub use media_query::{use_breakpoint, use_media_query};
pub use scroll_lock::{
    use_scroll_lock, BodyOverflow, OverflowSlot, ScrollLock, ScrollLockRegistry, LOCKED_OVERFLOW,
};
pub use toggle::{use_toggle, ToggleActions};

/// Convenience imports for component crates.
pub mod prelude {
    pub use crate::{
        use_breakpoint, use_click_outside, use_disclosure, use_focus_trap, use_media_query,
        use_scroll_lock, use_toggle, ContainerRef, DisclosureOptions, ToggleActions,
        UseDisclosure,
    };
}
