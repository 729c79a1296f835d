use leptos::*;

#[component]
pub fn ProgressBar(
    #[prop(into)] percent: MaybeSignal<u8>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let percent = Signal::derive(move || percent.get());
    let width = move || format!("width: {}%", percent.get().min(100));
    view! {
        <div class="space-y-1">
            <div class="flex justify-between text-sm">
                <span class="text-fg-muted">{label}</span>
                <span class="font-medium text-fg">{move || format!("{}%", percent.get())}</span>
            </div>
            <div
                class="h-2 w-full rounded-full bg-surface-muted overflow-hidden"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || percent.get().to_string()
            >
                <div class="h-full rounded-full bg-action-primary-bg transition-all" style=width></div>
            </div>
        </div>
    }
}
