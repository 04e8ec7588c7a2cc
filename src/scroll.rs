/// Something that emits vertical scroll offsets, usually the browser window.
pub trait ScrollTarget {
    type Handle;

    /// Registers a passive scroll listener. `None` when the target cannot
    /// take listeners.
    fn add_passive_listener(&self, on_offset: Box<dyn Fn(f64)>) -> Option<Self::Handle>;

    fn remove_listener(&self, handle: &Self::Handle);
}

/// Scroll listener registration that lasts as long as the guard.
pub struct ScrollListener<T: ScrollTarget> {
    target: T,
    handle: T::Handle,
}

impl<T: ScrollTarget> ScrollListener<T> {
    pub fn attach(target: T, on_offset: impl Fn(f64) + 'static) -> Option<Self> {
        let handle = target.add_passive_listener(Box::new(on_offset))?;
        Some(Self { target, handle })
    }
}

impl<T: ScrollTarget> Drop for ScrollListener<T> {
    fn drop(&mut self) {
        self.target.remove_listener(&self.handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{NavAction, NavigationState};
    use std::{cell::RefCell, rc::Rc};

    struct Registration {
        id: u32,
        passive: bool,
        on_offset: Box<dyn Fn(f64)>,
    }

    #[derive(Clone, Default)]
    struct FakeWindow {
        listeners: Rc<RefCell<Vec<Registration>>>,
        next_id: Rc<RefCell<u32>>,
        unavailable: bool,
    }

    impl FakeWindow {
        fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }

        fn scroll_to(&self, offset: f64) {
            for registration in self.listeners.borrow().iter() {
                (registration.on_offset)(offset);
            }
        }
    }

    impl ScrollTarget for FakeWindow {
        type Handle = u32;

        fn add_passive_listener(&self, on_offset: Box<dyn Fn(f64)>) -> Option<u32> {
            if self.unavailable {
                return None;
            }
            let mut next_id = self.next_id.borrow_mut();
            *next_id += 1;
            self.listeners.borrow_mut().push(Registration {
                id: *next_id,
                passive: true,
                on_offset,
            });
            Some(*next_id)
        }

        fn remove_listener(&self, handle: &u32) {
            self.listeners
                .borrow_mut()
                .retain(|registration| registration.id != *handle);
        }
    }

    fn tracking_state() -> (Rc<RefCell<NavigationState>>, impl Fn(f64) + 'static) {
        let state = Rc::new(RefCell::new(NavigationState::default()));
        let sink = state.clone();
        let on_offset = move |offset: f64| {
            let next = sink.borrow().apply(NavAction::Scrolled(offset));
            *sink.borrow_mut() = next;
        };
        (state, on_offset)
    }

    #[test]
    fn attach_registers_one_passive_listener() {
        let window = FakeWindow::default();

        let _listener = ScrollListener::attach(window.clone(), |_| {}).expect("window available");

        let listeners = window.listeners.borrow();
        assert_eq!(listeners.len(), 1);
        assert!(listeners[0].passive);
    }

    #[test]
    fn dropping_listener_unregisters_it() {
        let window = FakeWindow::default();

        let listener = ScrollListener::attach(window.clone(), |_| {}).expect("window available");
        assert_eq!(window.listener_count(), 1);

        drop(listener);
        assert_eq!(window.listener_count(), 0);
    }

    #[test]
    fn remount_leaves_exactly_one_listener() {
        let window = FakeWindow::default();

        let first = ScrollListener::attach(window.clone(), |_| {}).expect("window available");
        drop(first);
        let _second = ScrollListener::attach(window.clone(), |_| {}).expect("window available");

        assert_eq!(window.listener_count(), 1);
    }

    #[test]
    fn scroll_events_drive_navigation_flag() {
        let window = FakeWindow::default();
        let (state, on_offset) = tracking_state();
        let listener = ScrollListener::attach(window.clone(), on_offset).expect("window available");

        window.scroll_to(120.0);
        assert!(state.borrow().scrolled);

        window.scroll_to(10.0);
        assert!(!state.borrow().scrolled);

        drop(listener);
        window.scroll_to(500.0);
        assert!(!state.borrow().scrolled);
    }

    #[test]
    fn unavailable_target_yields_no_listener() {
        let window = FakeWindow {
            unavailable: true,
            ..FakeWindow::default()
        };

        assert!(ScrollListener::attach(window.clone(), |_| {}).is_none());
        assert_eq!(window.listener_count(), 0);
    }
}
