//! Boolean state with named setters.

use leptos::*;

/// Setters returned by [`use_toggle`].
#[derive(Clone, Copy)]
pub struct ToggleActions {
    /// Flips the value.
    pub toggle: Callback<()>,
    /// Sets the value to `true`.
    pub set_true: Callback<()>,
    /// Sets the value to `false`.
    pub set_false: Callback<()>,
    /// Sets the value.
    pub set_value: Callback<bool>,
}

/// Boolean state starting at `initial`.
pub fn use_toggle(initial: bool) -> (Signal<bool>, ToggleActions) {
    let value = create_rw_signal(initial);
    let actions = ToggleActions {
        toggle: Callback::new(move |()| value.update(|v| *v = !*v)),
        set_true: Callback::new(move |()| value.set(true)),
        set_false: Callback::new(move |()| value.set(false)),
        set_value: Callback::new(move |next| value.set(next)),
    };
    (value.into(), actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_drive_the_value() {
        let runtime = create_runtime();
        let (value, actions) = use_toggle(false);

        actions.toggle.call(());
        assert!(value.get_untracked());
        actions.toggle.call(());
        assert!(!value.get_untracked());
        actions.set_true.call(());
        actions.set_true.call(());
        assert!(value.get_untracked());
        actions.set_false.call(());
        assert!(!value.get_untracked());
        actions.set_value.call(true);
        assert!(value.get_untracked());

        runtime.dispose();
    }
}
