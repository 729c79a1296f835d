use super::{
    utils::{can_delete, can_submit},
    view_model::{use_timesheets_view_model, SheetCommand},
};
use crate::{
    api::Timesheet,
    components::{
        common::StatusBadge,
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::{InlineErrorMessage, LoadFailure},
        layout::{FlashMessage, Layout, LoadingSpinner, PageHeader},
    },
    utils::format::{format_date, format_hours_short, format_timestamp},
};
use leptos::*;

const ROW_ACTION: &str = "text-sm font-medium hover:underline disabled:opacity-50";

fn week_label(sheet: &Timesheet) -> String {
    format!(
        "{} - {}",
        format_date(sheet.week_start_date),
        format_date(sheet.week_end_date)
    )
}

#[component]
pub fn TimesheetsPanel() -> impl IntoView {
    let vm = use_timesheets_view_model();
    let sheets = vm.sheets;
    let generating = vm.generate_action.pending();
    let command_pending = vm.command_action.pending();
    let confirm_open = Signal::derive(move || vm.pending_command.with(Option::is_some));
    let confirm_title = Signal::derive(move || {
        vm.pending_command
            .get()
            .map(|(_, c)| c.title().to_string())
            .unwrap_or_default()
    });
    let confirm_message = Signal::derive(move || {
        vm.pending_command
            .get()
            .map(|(_, c)| c.prompt().to_string())
            .unwrap_or_default()
    });
    let destructive_pending = Signal::derive(move || {
        matches!(vm.pending_command.get(), Some((_, SheetCommand::Delete)))
    });

    view! {
        <Layout>
            <PageHeader title="Timesheets" subtitle="Weekly hours submitted for approval" />
            <FlashMessage flash=vm.flash />
            <InlineErrorMessage error=vm.error.into() on_dismiss=Callback::new(move |_| vm.error.set(None)) />

            <form
                class="flex flex-wrap items-end gap-3 mb-6 bg-surface-elevated shadow rounded-lg p-4"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.generate();
                }
            >
                <label class="block">
                    <span class="text-sm font-medium text-fg">"Week starting"</span>
                    <input
                        type="date"
                        class="mt-1 block rounded-md border border-form-control-border bg-form-control-bg text-fg px-3 py-2 text-sm"
                        prop:value=move || vm.week_start.get()
                        on:input=move |ev| vm.week_start.set(event_target_value(&ev))
                    />
                </label>
                <button
                    type="submit"
                    class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                    disabled=move || generating.get()
                >
                    {move || if generating.get() { "Generating..." } else { "Generate timesheet" }}
                </button>
            </form>

            <LoadFailure error=Signal::derive(move || sheets.error()) on_retry=Callback::new(move |_| sheets.retry()) />
            {move || {
                if sheets.is_loading() && sheets.data().is_none() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                let list = sheets.data().unwrap_or_default();
                if list.is_empty() {
                    return view! {
                        <EmptyState
                            title="No timesheets yet"
                            description="Generate one for a week you have worked."
                            icon="fa-file-lines"
                        />
                    }
                    .into_view();
                }
                view! {
                    <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
                        <table class="min-w-full divide-y divide-border text-sm">
                            <thead class="bg-surface-muted">
                                <tr class="text-left text-fg-muted">
                                    <th class="px-4 py-2">"Week"</th>
                                    <th class="px-4 py-2">"Hours"</th>
                                    <th class="px-4 py-2">"Status"</th>
                                    <th class="px-4 py-2">"Submitted"</th>
                                    <th class="px-4 py-2">"Comments"</th>
                                    <th class="px-4 py-2"></th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                {list
                                    .into_iter()
                                    .map(|sheet| {
                                        let id = sheet.id;
                                        let submittable = can_submit(&sheet.status);
                                        let deletable = can_delete(&sheet.status);
                                        view! {
                                            <tr>
                                                <td class="px-4 py-2 text-fg">{week_label(&sheet)}</td>
                                                <td class="px-4 py-2">{format_hours_short(sheet.total_hours)}</td>
                                                <td class="px-4 py-2"><StatusBadge status=sheet.status.clone() /></td>
                                                <td class="px-4 py-2">
                                                    {sheet.submitted_at.map(format_timestamp).unwrap_or_else(|| "-".into())}
                                                </td>
                                                <td class="px-4 py-2 text-fg-muted">{sheet.comments.unwrap_or_default()}</td>
                                                <td class="px-4 py-2 text-right space-x-3">
                                                    {submittable.then(|| view! {
                                                        <button
                                                            type="button"
                                                            class=format!("{} text-action-primary-bg", ROW_ACTION)
                                                            disabled=move || command_pending.get()
                                                            on:click=move |_| vm.pending_command.set(Some((id, SheetCommand::Submit)))
                                                        >
                                                            "Submit"
                                                        </button>
                                                    })}
                                                    {deletable.then(|| view! {
                                                        <button
                                                            type="button"
                                                            class=format!("{} text-status-error-text", ROW_ACTION)
                                                            disabled=move || command_pending.get()
                                                            on:click=move |_| vm.pending_command.set(Some((id, SheetCommand::Delete)))
                                                        >
                                                            "Delete"
                                                        </button>
                                                    })}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                .into_view()
            }}

            {move || view! {
                <ConfirmDialog
                    is_open=confirm_open
                    title=confirm_title
                    message=confirm_message
                    on_confirm=Callback::new(move |_| vm.confirm())
                    on_cancel=Callback::new(move |_| vm.pending_command.set(None))
                    confirm_label=if destructive_pending.get() { "Delete" } else { "Submit" }
                    pending=command_pending
                    destructive=destructive_pending.get()
                />
            }}
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{employee_session, provide_auth},
        ssr::render_to_string,
    };
    use chrono::NaiveDate;

    #[test]
    fn week_label_spans_both_dates() {
        let sheet = Timesheet {
            id: 1,
            employee_id: None,
            employee_name: None,
            week_start_date: NaiveDate::from_ymd_opt(2024, 12, 30).unwrap(),
            week_end_date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            total_hours: 40.0,
            status: "Draft".into(),
            submitted_at: None,
            comments: None,
        };
        assert_eq!(week_label(&sheet), "Dec 30, 2024 - Jan 05, 2025");
    }

    #[test]
    fn renders_generate_form() {
        let html = render_to_string(|| {
            provide_auth(Some(employee_session()));
            view! { <TimesheetsPanel /> }
        });
        assert!(html.contains("Timesheets"));
        assert!(html.contains("Generate timesheet"));
        assert!(html.contains("No timesheets yet"));
    }
}
