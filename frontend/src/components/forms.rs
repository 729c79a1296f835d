use leptos::*;

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg text-fg px-3 py-2 text-sm shadow-sm focus:border-action-primary-border focus:outline-none";

fn label_text(label: &str, required: bool) -> String {
    if required {
        format!("{} *", label)
    } else {
        label.to_string()
    }
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".into());
    view! {
        <label class="block">
            <span class="text-sm font-medium text-fg">{label_text(&label, required)}</span>
            <input
                type=input_type
                class=INPUT_CLASS
                placeholder=placeholder.unwrap_or_default()
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="text-sm font-medium text-fg">{label}</span>
            <textarea
                class=INPUT_CLASS
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// `options` are `(value, label)` pairs; an empty value acts as "none".
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="text-sm font-medium text-fg">{label_text(&label, required)}</span>
            <select
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(option_value, option_label)| {
                            let selected = value.get() == option_value;
                            view! { <option value=option_value selected=selected>{option_label}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

#[component]
pub fn CheckboxField(#[prop(into)] label: String, value: RwSignal<bool>) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2 text-sm text-fg">
            <input
                type="checkbox"
                class="rounded border-form-control-border"
                prop:checked=move || value.get()
                on:change=move |ev| value.set(event_target_checked(&ev))
            />
            {label}
        </label>
    }
}
