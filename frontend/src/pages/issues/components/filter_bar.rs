use crate::components::{
    select::{Select, SelectItem},
    text_input::TextInput,
};
use crate::pages::issues::{
    layout::ControlSizing,
    utils::{
        LEVEL_OPTIONS, LEVEL_PLACEHOLDER, PROJECT_LABEL, PROJECT_PLACEHOLDER, SEARCH_ICON_SRC,
        STATUS_OPTIONS, STATUS_PLACEHOLDER,
    },
    view_model::FilterBarViewModel,
};
use leptos::*;

fn options(labels: &[&str]) -> Vec<SelectItem> {
    std::iter::once(SelectItem::none())
        .chain(labels.iter().map(|label| SelectItem::labelled(*label)))
        .collect()
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let vm = FilterBarViewModel::new();
    on_cleanup(move || vm.teardown());

    let layout = create_memo(move |_| vm.layout());
    let select_style = Signal::derive(move || layout.with(|l| l.select_style.clone()));
    let input_style = Signal::derive(move || layout.with(|l| l.input_style.clone()));
    let container_class = move || match layout.with(|l| l.sizing) {
        ControlSizing::Mobile => "flex flex-col items-stretch gap-3",
        ControlSizing::Compact => "flex items-center justify-between gap-3",
    };

    view! {
        <div class=container_class>
            <div class="flex flex-wrap items-center gap-3">
                <Select
                    placeholder=STATUS_PLACEHOLDER
                    label=Signal::derive(move || vm.status_label())
                    options=options(&STATUS_OPTIONS)
                    on_select={move |label: Option<String>| vm.select_status(label)}
                    style=select_style
                />
                <Select
                    placeholder=LEVEL_PLACEHOLDER
                    label=Signal::derive(move || vm.level_label())
                    options=options(&LEVEL_OPTIONS)
                    on_select={move |label: Option<String>| vm.select_level(label)}
                    style=select_style
                />
            </div>
            <TextInput
                label=PROJECT_LABEL
                value=vm.draft
                on_input={move |text: String| vm.input_project(text)}
                placeholder=PROJECT_PLACEHOLDER
                icon_src=SEARCH_ICON_SRC
                style=input_style
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::issues::types::{FilterState, IssueLevel, IssueStatus};
    use crate::test_support::helpers::{provide_menu, provide_store, provide_width};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn none_option_comes_first() {
        let items = options(&LEVEL_OPTIONS);
        assert_eq!(items.len(), 4);
        assert_eq!(items[0], SelectItem::none());
        assert_eq!(items[1].value.as_deref(), Some("Error"));
    }

    #[test]
    fn renders_placeholders_without_filters() {
        let html = render_to_string(|| {
            provide_store(FilterState::default());
            view! { <FilterBar /> }
        });
        assert!(html.contains("aria-label=\"Status\""));
        assert!(html.contains("aria-label=\"Level\""));
        assert!(html.contains("aria-label=\"project name\""));
        assert!(html.contains(">Status<"));
        assert!(html.contains(">Level<"));
    }

    #[test]
    fn renders_labels_and_draft_from_store() {
        let html = render_to_string(|| {
            provide_store(FilterState {
                status: Some(IssueStatus::Open),
                level: Some(IssueLevel::Error),
                project: Some("backend".into()),
            });
            view! { <FilterBar /> }
        });
        assert!(html.contains(">Unresolved<"));
        assert!(html.contains(">Error<"));
        assert!(html.contains("value=\"backend\""));
    }

    #[test]
    fn mobile_width_uses_full_width_controls() {
        let html = render_to_string(|| {
            provide_width(1023);
            view! { <FilterBar /> }
        });
        assert!(html.contains("width: 97%;"));
        assert!(html.contains("width: 94%; margin-right: 3rem;"));
    }

    #[test]
    fn desktop_width_uses_compact_controls() {
        let html = render_to_string(|| {
            provide_width(1024);
            view! { <FilterBar /> }
        });
        assert!(html.contains("width: 8rem;"));
        assert!(!html.contains("97%"));
    }

    #[test]
    fn open_menu_makes_controls_transparent_but_enabled() {
        let html = render_to_string(|| {
            provide_menu(true);
            view! { <FilterBar /> }
        });
        assert_eq!(html.matches("opacity: 0;").count(), 3);
        assert!(!html.contains("disabled"));
    }
}
