//! Pointer presses outside a container.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use wasm_bindgen::JsCast;

use crate::dom::{ContainerRef, DomError, EventListenerGuard};

/// Document events that count as an outside press.
pub const OUTSIDE_PRESS_EVENTS: [&str; 2] = ["mousedown", "touchstart"];

/// Whether a press on `target` lies outside `container`.
///
/// An unbound container never reports outside presses. A press without a
/// node target is outside by definition.
pub fn is_outside_press<C, T>(
    container: Option<&C>,
    target: Option<&T>,
    contains: impl FnOnce(&C, &T) -> bool,
) -> bool {
    match (container, target) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(container), Some(target)) => !contains(container, target),
    }
}

/// Calls `on_outside` for each press outside `container` while `enabled`.
pub fn use_click_outside<C: ContainerRef>(
    container: C,
    on_outside: Callback<web_sys::Event>,
    enabled: impl Into<MaybeSignal<bool>>,
) {
    bind_press_listeners(enabled.into(), move |event| {
        EventListenerGuard::on_document(event, move |ev: web_sys::Event| {
            let target = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
            let container = container.get_untracked();
            let outside =
                is_outside_press(container.as_ref(), target.as_ref(), |container, target| {
                    container.contains(Some(target))
                });
            if outside {
                on_outside.call(ev);
            }
        })
    });
}

/// Keeps one listener per [`OUTSIDE_PRESS_EVENTS`] entry attached while `enabled`.
///
/// Registration is all or nothing: if any event fails to attach, the ones
/// already attached are dropped.
fn bind_press_listeners<G, A>(enabled: MaybeSignal<bool>, attach: A)
where
    G: 'static,
    A: Fn(&'static str) -> Result<G, DomError> + 'static,
{
    let listeners: Rc<RefCell<Vec<G>>> = Rc::new(RefCell::new(Vec::new()));

    create_effect({
        let listeners = Rc::clone(&listeners);
        move |_| {
            let mut listeners = listeners.borrow_mut();
            if !enabled.get() {
                listeners.clear();
                return;
            }
            if !listeners.is_empty() {
                return;
            }

            for event in OUTSIDE_PRESS_EVENTS {
                match attach(event) {
                    Ok(guard) => listeners.push(guard),
                    Err(err) => {
                        logging::warn!("click-outside listener skipped: {err}");
                        listeners.clear();
                        return;
                    }
                }
            }
        }
    });

    on_cleanup(move || listeners.borrow_mut().clear());
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn contains(container: &Vec<u32>, target: &u32) -> bool {
        container.contains(target)
    }

    #[test]
    fn press_inside_container_is_not_outside() {
        let container = vec![1, 2, 3];
        assert!(!is_outside_press(Some(&container), Some(&2), contains));
    }

    #[test]
    fn press_elsewhere_is_outside() {
        let container = vec![1, 2, 3];
        assert!(is_outside_press(Some(&container), Some(&7), contains));
        assert!(is_outside_press::<Vec<u32>, u32>(Some(&container), None, contains));
    }

    #[test]
    fn unbound_container_never_fires() {
        assert!(!is_outside_press::<Vec<u32>, u32>(None, Some(&7), contains));
        assert!(!is_outside_press::<Vec<u32>, u32>(None, None, contains));
    }

    struct FakeListener(Rc<RefCell<Vec<&'static str>>>, &'static str);

    impl Drop for FakeListener {
        fn drop(&mut self) {
            self.0.borrow_mut().retain(|event| *event != self.1);
        }
    }

    fn fake_attach(
        live: &Rc<RefCell<Vec<&'static str>>>,
    ) -> impl Fn(&'static str) -> Result<FakeListener, DomError> + 'static {
        let live = Rc::clone(live);
        move |event| {
            live.borrow_mut().push(event);
            Ok(FakeListener(Rc::clone(&live), event))
        }
    }

    #[test]
    fn listeners_follow_the_enabled_flag() {
        let runtime = create_runtime();
        let live = Rc::new(RefCell::new(Vec::new()));
        let enabled = create_rw_signal(false);

        bind_press_listeners(enabled.into(), fake_attach(&live));
        assert!(live.borrow().is_empty());

        enabled.set(true);
        assert_eq!(*live.borrow(), vec!["mousedown", "touchstart"]);
        enabled.set(true);
        assert_eq!(live.borrow().len(), 2);

        enabled.set(false);
        assert!(live.borrow().is_empty());

        runtime.dispose();
    }

    #[test]
    fn disposing_the_owner_detaches_listeners() {
        let runtime = create_runtime();
        let live = Rc::new(RefCell::new(Vec::new()));

        let mount = as_child_of_current_owner({
            let live = Rc::clone(&live);
            move |()| bind_press_listeners(true.into(), fake_attach(&live))
        });
        let ((), disposer) = mount(());
        assert_eq!(live.borrow().len(), 2);

        drop(disposer);
        assert!(live.borrow().is_empty());

        runtime.dispose();
    }

    #[test]
    fn partial_registration_is_rolled_back() {
        let runtime = create_runtime();
        let live = Rc::new(RefCell::new(Vec::new()));
        let attach = fake_attach(&live);

        bind_press_listeners(true.into(), move |event| {
            if event == "touchstart" {
                return Err(DomError::NoDocument);
            }
            attach(event)
        });
        assert!(live.borrow().is_empty());

        runtime.dispose();
    }
}
