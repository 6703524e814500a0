use crate::pages::issues::types::{FilterState, FilterUpdate};
use leptos::*;
use leptos_router::{use_location, use_navigate, use_query_map, NavigateOptions, RouterContext};

/// Shared issue filters. Every `update_filters` call is one write and bumps
/// `revision`; syncing from the URL does not.
#[derive(Clone, Copy, Debug)]
pub struct FilterStore {
    filters: RwSignal<FilterState>,
    revision: RwSignal<u64>,
}

impl FilterStore {
    pub fn new(initial: FilterState) -> Self {
        Self {
            filters: create_rw_signal(initial),
            revision: create_rw_signal(0),
        }
    }

    pub fn with_filters<R>(&self, f: impl FnOnce(&FilterState) -> R) -> R {
        self.filters.with(f)
    }

    pub fn snapshot(&self) -> FilterState {
        self.filters.get_untracked()
    }

    pub fn update_filters(&self, update: FilterUpdate) {
        log::debug!("filter update: {update:?}");
        self.filters.update(|filters| filters.apply(update));
        self.revision.update(|rev| *rev += 1);
    }

    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    fn sync_from_query(&self, next: FilterState) {
        if self.filters.with_untracked(|current| current != &next) {
            self.filters.set(next);
        }
    }
}

/// Provides the store for the current page. Under a router the filters are
/// seeded from, and written back to, the URL query.
pub fn provide_filter_store() -> FilterStore {
    let store = if use_context::<RouterContext>().is_some() {
        routed_store()
    } else {
        FilterStore::new(FilterState::default())
    };
    provide_context(store);
    store
}

pub fn use_filter_store() -> FilterStore {
    use_context::<FilterStore>().unwrap_or_else(|| FilterStore::new(FilterState::default()))
}

/// Same page with the query rebuilt from `filters`.
fn filters_url(pathname: &str, filters: &FilterState) -> String {
    format!("{pathname}{}", filters.to_query_string())
}

fn routed_store() -> FilterStore {
    let query = use_query_map();
    let store = FilterStore::new(query.with_untracked(FilterState::from_query));

    create_effect(move |_| {
        let next = query.with(FilterState::from_query);
        store.sync_from_query(next);
    });

    let navigate = use_navigate();
    let location = use_location();
    create_effect(move |previous: Option<u64>| {
        let revision = store.revision();
        if previous.is_some_and(|prev| prev != revision) {
            let target = location
                .pathname
                .with_untracked(|path| filters_url(path, &store.snapshot()));
            log::debug!("syncing filters to url: {target}");
            navigate(
                &target,
                NavigateOptions {
                    replace: true,
                    scroll: false,
                    ..Default::default()
                },
            );
        }
        revision
    });

    store
}
