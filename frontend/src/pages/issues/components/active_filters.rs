use crate::state::filters::FilterStore;
use leptos::*;

#[component]
pub fn ActiveFilters(store: FilterStore) -> impl IntoView {
    let summary = move || store.with_filters(|filters| filters.describe());
    let count = move || store.with_filters(|filters| filters.active_count());

    view! {
        <div class="flex items-center gap-2 text-sm text-fg-muted" aria-live="polite">
            <Show when=move || { count() > 0 }>
                <span class="inline-flex h-5 min-w-[1.25rem] items-center justify-center rounded-full bg-action-primary-bg px-1.5 text-xs font-semibold text-text-inverse">
                    {count}
                </span>
            </Show>
            <span>{summary}</span>
        </div>
    }
}
