use crate::pages::issues::{
    components::{ActiveFilters, FilterBar},
    layout::IssuesLayout,
};
use crate::state::filters::provide_filter_store;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn IssuesPage() -> impl IntoView {
    let store = provide_filter_store();

    view! {
        <Title text="Issues | issuewatch"/>
        <IssuesLayout>
            <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-3">
                <FilterBar/>
                <ActiveFilters store=store/>
            </div>
        </IssuesLayout>
    }
}
