use crate::config::{self, RuntimeConfig};
use crate::pages::issues::{
    layout::FilterBarLayout,
    types::FilterUpdate,
    utils::{level_from_label, level_label, project_filter_value, status_from_label, status_label},
};
use crate::state::{
    filters::{use_filter_store, FilterStore},
    navigation::{use_navigation, NavigationState},
    viewport::{use_viewport, Viewport},
};
use crate::utils::debounce::{use_scheduler, Debouncer, Scheduler};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct FilterBarViewModel {
    pub store: FilterStore,
    /// Text box contents; runs ahead of the store while a write is pending.
    pub draft: RwSignal<String>,
    viewport: Viewport,
    navigation: NavigationState,
    mobile_breakpoint_px: u32,
    debouncer: StoredValue<Debouncer>,
}

impl FilterBarViewModel {
    pub fn new() -> Self {
        Self::with_dependencies(
            use_filter_store(),
            use_viewport(),
            use_navigation(),
            use_scheduler(),
            config::runtime_config(),
        )
    }

    pub fn with_dependencies(
        store: FilterStore,
        viewport: Viewport,
        navigation: NavigationState,
        scheduler: Rc<dyn Scheduler>,
        cfg: RuntimeConfig,
    ) -> Self {
        let initial_draft = store.with_filters(|filters| filters.project.clone().unwrap_or_default());
        Self {
            store,
            draft: create_rw_signal(initial_draft),
            viewport,
            navigation,
            mobile_breakpoint_px: cfg.mobile_breakpoint_px,
            debouncer: store_value(Debouncer::new(scheduler, cfg.filter_debounce_ms)),
        }
    }

    pub fn status_label(&self) -> String {
        self.store.with_filters(status_label)
    }

    pub fn level_label(&self) -> String {
        self.store.with_filters(level_label)
    }

    pub fn select_status(&self, label: Option<String>) {
        self.store
            .update_filters(FilterUpdate::status(status_from_label(label.as_deref())));
    }

    pub fn select_level(&self, label: Option<String>) {
        self.store
            .update_filters(FilterUpdate::level(level_from_label(label.as_deref())));
    }

    pub fn input_project(&self, text: String) {
        let value = project_filter_value(&text);
        self.draft.set(text);
        let store = self.store;
        self.debouncer.with_value(|debouncer| {
            debouncer.call(move || store.update_filters(FilterUpdate::project(Some(value))))
        });
    }

    pub fn layout(&self) -> FilterBarLayout {
        FilterBarLayout::new(
            self.viewport.width(),
            self.mobile_breakpoint_px,
            self.navigation.is_mobile_menu_open(),
        )
    }

    /// Discards a pending project write; called when the toolbar unmounts.
    pub fn teardown(&self) {
        self.debouncer.with_value(|debouncer| {
            if debouncer.is_pending() {
                log::debug!("discarding pending project filter write");
            }
            debouncer.cancel();
        });
    }
}

impl Default for FilterBarViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::pages::issues::layout::ControlSizing;
    use crate::pages::issues::types::{FilterState, IssueLevel, IssueStatus};
    use crate::test_support::helpers::ManualScheduler;
    use crate::test_support::ssr::with_runtime;

    struct Harness {
        vm: FilterBarViewModel,
        store: FilterStore,
        scheduler: ManualScheduler,
        width: RwSignal<u32>,
        navigation: NavigationState,
    }

    fn harness(initial: FilterState) -> Harness {
        let store = FilterStore::new(initial);
        let scheduler = ManualScheduler::default();
        let width = create_rw_signal(1280);
        let navigation = NavigationState::new();
        let vm = FilterBarViewModel::with_dependencies(
            store,
            Viewport::from_signal(width),
            navigation,
            Rc::new(scheduler.clone()),
            RuntimeConfig::default(),
        );
        Harness {
            vm,
            store,
            scheduler,
            width,
            navigation,
        }
    }

    #[test]
    fn status_selection_writes_immediately() {
        with_runtime(|| {
            let h = harness(FilterState::default());
            assert_eq!(h.vm.status_label(), "Status");

            h.vm.select_status(Some("Unresolved".into()));
            assert_eq!(h.store.snapshot().status, Some(IssueStatus::Open));
            assert_eq!(h.vm.status_label(), "Unresolved");

            h.vm.select_status(Some("Resolved".into()));
            assert_eq!(h.store.snapshot().status, Some(IssueStatus::Resolved));
            assert_eq!(h.vm.status_label(), "Resolved");

            h.vm.select_status(None);
            assert_eq!(h.store.snapshot().status, None);
            assert_eq!(h.vm.status_label(), "Status");
            assert_eq!(h.store.revision(), 3);
            assert_eq!(h.scheduler.pending(), 0);
        });
    }

    #[test]
    fn level_selection_lowercases_the_label() {
        with_runtime(|| {
            let h = harness(FilterState::default());
            h.vm.select_level(Some("Warning".into()));
            assert_eq!(h.store.snapshot().level, Some(IssueLevel::Warning));
            assert_eq!(h.vm.level_label(), "Warning");

            h.vm.select_level(None);
            assert_eq!(h.store.snapshot().level, None);
            assert_eq!(h.vm.level_label(), "Level");
        });
    }

    #[test]
    fn typing_updates_draft_now_and_store_after_quiet_period() {
        with_runtime(|| {
            let h = harness(FilterState::default());
            h.vm.input_project("MyProj".into());
            assert_eq!(h.vm.draft.get_untracked(), "MyProj");
            assert_eq!(h.store.snapshot().project, None);

            h.scheduler.advance(299);
            assert_eq!(h.store.revision(), 0);
            h.scheduler.advance(1);
            assert_eq!(h.store.snapshot().project.as_deref(), Some("myproj"));
            assert_eq!(h.store.revision(), 1);
        });
    }

    #[test]
    fn rapid_typing_produces_a_single_write() {
        with_runtime(|| {
            let h = harness(FilterState::default());
            h.vm.input_project("MyProj".into());
            h.scheduler.advance(150);
            h.vm.input_project("MyProject2".into());
            assert_eq!(h.vm.draft.get_untracked(), "MyProject2");

            h.scheduler.advance(299);
            assert_eq!(h.store.revision(), 0);
            h.scheduler.advance(1);
            assert_eq!(h.store.revision(), 1);
            assert_eq!(h.store.snapshot().project.as_deref(), Some("myproject2"));

            h.scheduler.advance(1_000);
            assert_eq!(h.store.revision(), 1);
        });
    }

    #[test]
    fn teardown_discards_the_pending_write() {
        with_runtime(|| {
            let h = harness(FilterState::default());
            h.vm.input_project("Web".into());
            h.vm.teardown();
            h.scheduler.advance(1_000);
            assert_eq!(h.store.snapshot().project, None);
            assert_eq!(h.store.revision(), 0);
        });
    }

    #[test]
    fn draft_starts_from_the_store() {
        with_runtime(|| {
            let h = harness(FilterState {
                project: Some("backend".into()),
                ..Default::default()
            });
            assert_eq!(h.vm.draft.get_untracked(), "backend");
            let empty = harness(FilterState::default());
            assert_eq!(empty.vm.draft.get_untracked(), "");
        });
    }

    #[test]
    fn layout_follows_viewport_and_menu() {
        with_runtime(|| {
            let h = harness(FilterState::default());
            h.width.set(1024);
            assert_eq!(h.vm.layout().sizing, ControlSizing::Compact);
            h.width.set(1023);
            assert_eq!(h.vm.layout().sizing, ControlSizing::Mobile);

            assert!(!h.vm.layout().select_style.contains("opacity"));
            h.navigation.set_mobile_menu_open(true);
            let layout = h.vm.layout();
            assert!(layout.select_style.contains("opacity: 0;"));
            assert!(layout.input_style.contains("opacity: 0;"));
        });
    }

    #[test]
    fn selections_still_work_while_menu_hides_controls() {
        with_runtime(|| {
            let h = harness(FilterState::default());
            h.navigation.set_mobile_menu_open(true);
            h.vm.select_level(Some("Error".into()));
            assert_eq!(h.vm.level_label(), "Error");
        });
    }
}
