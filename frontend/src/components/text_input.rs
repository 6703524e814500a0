use leptos::*;

const INPUT_CLASSES: &str = "w-full rounded-md border border-border bg-surface-elevated py-2 pr-3 text-sm text-fg placeholder:text-fg-muted shadow-sm focus:outline-none focus:ring-2 focus:ring-action-primary-focus";

/// Controlled text box. `on_input` fires on every keystroke with the full
/// current text.
#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] icon_src: Option<String>,
    #[prop(optional, into)] style: MaybeSignal<String>,
) -> impl IntoView {
    let padding = if icon_src.is_some() { "pl-9" } else { "pl-3" };

    view! {
        <div class="relative flex items-center" style=move || style.get()>
            {icon_src.map(|src| {
                view! { <img src=src alt="" class="pointer-events-none absolute left-3 h-4 w-4"/> }
            })}
            <input
                type="text"
                class=format!("{INPUT_CLASSES} {padding}")
                aria-label=label
                placeholder=placeholder
                value=value.get_untracked()
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}
