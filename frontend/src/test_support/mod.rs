#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::pages::issues::types::FilterState;
    use crate::state::{filters::FilterStore, navigation::NavigationState, viewport::Viewport};
    use crate::utils::debounce::{Scheduler, TaskHandle};
    use leptos::*;
    use std::{cell::RefCell, rc::Rc};

    struct QueuedTask {
        id: u64,
        due_ms: u64,
        task: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct ManualClock {
        now_ms: u64,
        next_id: u64,
        tasks: Vec<QueuedTask>,
    }

    /// Virtual clock; tasks run only when the test calls `advance`.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<ManualClock>>,
    }

    impl ManualScheduler {
        pub fn advance(&self, ms: u64) {
            let target = self.clock.borrow().now_ms + ms;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let due = clock
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| t.due_ms <= target)
                        .min_by_key(|(_, t)| (t.due_ms, t.id))
                        .map(|(idx, _)| idx);
                    due.map(|idx| {
                        let task = clock.tasks.remove(idx);
                        clock.now_ms = task.due_ms;
                        task
                    })
                };
                match next {
                    Some(queued) => (queued.task)(),
                    None => break,
                }
            }
            self.clock.borrow_mut().now_ms = target;
        }

        pub fn pending(&self) -> usize {
            self.clock.borrow().tasks.len()
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
            let id = {
                let mut clock = self.clock.borrow_mut();
                let id = clock.next_id;
                clock.next_id += 1;
                let due_ms = clock.now_ms + u64::from(delay_ms);
                clock.tasks.push(QueuedTask { id, due_ms, task });
                id
            };
            let clock = Rc::clone(&self.clock);
            TaskHandle::new(move || clock.borrow_mut().tasks.retain(|t| t.id != id))
        }
    }

    pub fn provide_store(initial: FilterState) -> FilterStore {
        let store = FilterStore::new(initial);
        provide_context(store);
        store
    }

    pub fn provide_width(width: u32) -> RwSignal<u32> {
        let width = create_rw_signal(width);
        provide_context(Viewport::from_signal(width));
        width
    }

    pub fn provide_menu(open: bool) -> NavigationState {
        let navigation = NavigationState::new();
        navigation.set_mobile_menu_open(open);
        provide_context(navigation);
        navigation
    }
}
