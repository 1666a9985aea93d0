//! Open/closed state with transition callbacks.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A change of disclosure state.
pub enum DisclosureTransition {
    /// Closed to open.
    Opened,
    /// Open to closed.
    Closed,
}

/// Disclosure state; every mutation reports whether it changed anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisclosureState {
    open: bool,
}

impl DisclosureState {
    /// Creates state with the given initial openness.
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    /// Whether the disclosure is open.
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Opens; `None` when already open.
    pub fn open(&mut self) -> Option<DisclosureTransition> {
        if self.open {
            return None;
        }
        self.open = true;
        Some(DisclosureTransition::Opened)
    }

    /// Closes; `None` when already closed.
    pub fn close(&mut self) -> Option<DisclosureTransition> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(DisclosureTransition::Closed)
    }

    /// Flips openness. Always a transition.
    pub fn toggle(&mut self) -> Option<DisclosureTransition> {
        if self.open {
            self.close()
        } else {
            self.open()
        }
    }
}

/// Configuration for [`use_disclosure`].
#[derive(Clone, Copy, Default)]
pub struct DisclosureOptions {
    /// Initial openness.
    pub default_open: bool,
    /// Called after each closed-to-open transition.
    pub on_open: Option<Callback<()>>,
    /// Called after each open-to-closed transition.
    pub on_close: Option<Callback<()>>,
}

/// Reactive handle returned by [`use_disclosure`].
#[derive(Clone, Copy)]
pub struct UseDisclosure {
    /// Current openness.
    pub is_open: Signal<bool>,
    /// Opens.
    pub open: Callback<()>,
    /// Closes.
    pub close: Callback<()>,
    /// Flips openness.
    pub toggle: Callback<()>,
}

/// Open/closed state whose callbacks fire only on real transitions.
pub fn use_disclosure(options: DisclosureOptions) -> UseDisclosure {
    let state = create_rw_signal(DisclosureState::new(options.default_open));
    let DisclosureOptions {
        on_open, on_close, ..
    } = options;

    let apply = move |step: fn(&mut DisclosureState) -> Option<DisclosureTransition>| {
        let mut next = state.get_untracked();
        let Some(transition) = step(&mut next) else {
            return;
        };
        state.set(next);
        let callback = match transition {
            DisclosureTransition::Opened => on_open,
            DisclosureTransition::Closed => on_close,
        };
        if let Some(callback) = callback {
            callback.call(());
        }
    };

    UseDisclosure {
        is_open: Signal::derive(move || state.get().is_open()),
        open: Callback::new(move |()| apply(DisclosureState::open)),
        close: Callback::new(move |()| apply(DisclosureState::close)),
        toggle: Callback::new(move |()| apply(DisclosureState::toggle)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn repeated_calls_report_a_single_transition() {
        let mut state = DisclosureState::default();
        assert_eq!(state.open(), Some(DisclosureTransition::Opened));
        assert_eq!(state.open(), None);
        assert_eq!(state.close(), Some(DisclosureTransition::Closed));
        assert_eq!(state.close(), None);
        assert_eq!(state.toggle(), Some(DisclosureTransition::Opened));
        assert!(state.is_open());
    }

    #[test]
    fn callbacks_fire_only_on_transitions() {
        let runtime = create_runtime();
        let opened = create_rw_signal(0);
        let closed = create_rw_signal(0);

        let disclosure = use_disclosure(DisclosureOptions {
            default_open: false,
            on_open: Some(Callback::new(move |()| opened.update(|n| *n += 1))),
            on_close: Some(Callback::new(move |()| closed.update(|n| *n += 1))),
        });

        disclosure.close.call(());
        assert_eq!(closed.get_untracked(), 0);

        disclosure.open.call(());
        disclosure.open.call(());
        assert_eq!(opened.get_untracked(), 1);
        assert!(disclosure.is_open.get_untracked());

        disclosure.toggle.call(());
        disclosure.close.call(());
        assert_eq!(closed.get_untracked(), 1);
        assert!(!disclosure.is_open.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn default_open_starts_open_without_callback() {
        let runtime = create_runtime();
        let opened = create_rw_signal(0);
        let disclosure = use_disclosure(DisclosureOptions {
            default_open: true,
            on_open: Some(Callback::new(move |()| opened.update(|n| *n += 1))),
            on_close: None,
        });

        assert!(disclosure.is_open.get_untracked());
        disclosure.open.call(());
        assert_eq!(opened.get_untracked(), 0);

        runtime.dispose();
    }
}
