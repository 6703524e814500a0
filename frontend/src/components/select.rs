use leptos::*;

pub const NONE_OPTION_LABEL: &str = "--None--";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectItem {
    pub label: String,
    /// Passed to `on_select`; `None` clears the selection.
    pub value: Option<String>,
}

impl SelectItem {
    pub fn none() -> Self {
        Self {
            label: NONE_OPTION_LABEL.to_string(),
            value: None,
        }
    }

    pub fn labelled(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: Some(label.clone()),
            label,
        }
    }
}

/// Dropdown whose button always shows `label`; it keeps no selection of its
/// own.
#[component]
pub fn Select(
    #[prop(into)] placeholder: String,
    #[prop(into)] label: Signal<String>,
    options: Vec<SelectItem>,
    #[prop(into)] on_select: Callback<Option<String>>,
    #[prop(optional, into)] style: MaybeSignal<String>,
) -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let listbox_id = format!("{}-options", placeholder.to_lowercase().replace(' ', "-"));
    let controls_id = listbox_id.clone();
    let options = store_value(options);

    view! {
        <div class="relative" style=move || style.get()>
            <button
                type="button"
                class="flex w-full items-center justify-between gap-2 rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg shadow-sm hover:bg-action-ghost-bg-hover"
                aria-label=placeholder
                aria-haspopup="listbox"
                aria-expanded=move || open.get().to_string()
                aria-controls=controls_id
                on:click=move |_| set_open.update(|open| *open = !*open)
            >
                <span class="truncate">{move || label.get()}</span>
                <i class="fas fa-chevron-down text-xs text-fg-muted"></i>
            </button>
            <Show when=move || open.get()>
                <ul
                    id=listbox_id.clone()
                    role="listbox"
                    class="absolute z-10 mt-1 w-full rounded-md border border-border bg-surface-elevated py-1 shadow-lg"
                >
                    {options.with_value(|items| {
                        items
                            .iter()
                            .cloned()
                            .map(|item| {
                                let value = item.value;
                                view! {
                                    <li
                                        role="option"
                                        class="cursor-pointer px-3 py-2 text-sm text-fg hover:bg-action-ghost-bg-hover"
                                        on:click=move |_| {
                                            set_open.set(false);
                                            on_select.call(value.clone());
                                        }
                                    >
                                        {item.label}
                                    </li>
                                }
                            })
                            .collect_view()
                    })}
                </ul>
            </Show>
        </div>
    }
}
