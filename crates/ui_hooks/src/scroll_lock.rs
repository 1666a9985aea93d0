//! Body scroll locking.
//!
//! `document.body.style.overflow` is one shared slot. Locks are reference
//! counted per thread: the first holder records the original value and sets
//! `hidden`, later holders only bump the count, and the last release writes
//! the recorded value back. A release never restores while another lock is
//! still held.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;

use crate::dom::{body, DomError};

/// Overflow value written while locked.
pub const LOCKED_OVERFLOW: &str = "hidden";

/// A style slot holding an `overflow` value.
pub trait OverflowSlot {
    /// Current value; empty when unset.
    fn read(&self) -> String;

    /// Writes `value`; empty clears the property.
    fn write(&self, value: &str);
}

/// Reference-counted owner of the original overflow value.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScrollLockRegistry {
    holders: usize,
    saved: Option<String>,
}

impl ScrollLockRegistry {
    /// Number of outstanding locks.
    pub fn holders(&self) -> usize {
        self.holders
    }

    /// Takes a lock, capturing and hiding overflow for the first holder.
    pub fn acquire(&mut self, slot: &impl OverflowSlot) {
        if self.holders == 0 {
            self.saved = Some(slot.read());
            slot.write(LOCKED_OVERFLOW);
        }
        self.holders += 1;
    }

    /// Drops a lock, restoring the captured value when the last one goes.
    pub fn release(&mut self, slot: &impl OverflowSlot) {
        if self.holders == 0 {
            return;
        }
        self.holders -= 1;
        if self.holders == 0 {
            if let Some(original) = self.saved.take() {
                slot.write(&original);
            }
        }
    }
}

thread_local! {
    static REGISTRY: RefCell<ScrollLockRegistry> = RefCell::new(ScrollLockRegistry::default());
}

/// A held lock on a slot, released when dropped.
pub struct ScrollLock<S: OverflowSlot> {
    slot: S,
}

impl<S: OverflowSlot> ScrollLock<S> {
    /// Locks `slot` through the thread's registry.
    pub fn acquire(slot: S) -> Self {
        REGISTRY.with(|registry| registry.borrow_mut().acquire(&slot));
        Self { slot }
    }
}

impl<S: OverflowSlot> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        REGISTRY.with(|registry| registry.borrow_mut().release(&self.slot));
    }
}

/// `document.body.style.overflow`.
#[derive(Debug, Clone)]
pub struct BodyOverflow(web_sys::HtmlElement);

impl BodyOverflow {
    /// Binds to the current document body.
    pub fn current() -> Result<Self, DomError> {
        body().map(Self)
    }
}

impl OverflowSlot for BodyOverflow {
    fn read(&self) -> String {
        self.0
            .style()
            .get_property_value("overflow")
            .unwrap_or_default()
    }

    fn write(&self, value: &str) {
        let _ = self.0.style().set_property("overflow", value);
    }
}

/// Hides body overflow while `locked` is true.
///
/// The lock is released when `locked` turns false or the owner is disposed.
pub fn use_scroll_lock(locked: impl Into<MaybeSignal<bool>>) {
    bind_scroll_lock(locked.into(), BodyOverflow::current);
}

/// Holds a [`ScrollLock`] on the slot `acquire` yields whenever `locked` reads true.
fn bind_scroll_lock<S, F>(locked: MaybeSignal<bool>, acquire: F)
where
    S: OverflowSlot + 'static,
    F: Fn() -> Result<S, DomError> + 'static,
{
    let held: Rc<RefCell<Option<ScrollLock<S>>>> = Rc::new(RefCell::new(None));

    create_effect({
        let held = Rc::clone(&held);
        move |_| {
            if !locked.get() {
                held.borrow_mut().take();
                return;
            }
            if held.borrow().is_some() {
                return;
            }
            match acquire() {
                Ok(slot) => *held.borrow_mut() = Some(ScrollLock::acquire(slot)),
                Err(err) => logging::warn!("scroll lock skipped: {err}"),
            }
        }
    });

    on_cleanup(move || {
        held.borrow_mut().take();
    });
}
