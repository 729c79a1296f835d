use super::{utils::result_headline, view_model::use_bulk_import_view_model};
use crate::{
    api::BulkImportResult,
    components::{
        cards::StatCard,
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        layout::{FlashMessage, Layout, PageHeader},
    },
};
use leptos::*;

#[component]
fn ImportResults(result: BulkImportResult) -> impl IntoView {
    let total = result.total_rows.to_string();
    let imported = result.imported.to_string();
    let failed = result.failed.to_string();
    view! {
        <section class="space-y-4">
            <p class="text-sm font-medium text-fg">{result_headline(&result)}</p>
            <div class="grid gap-4 sm:grid-cols-3">
                <StatCard label="Rows" value=Signal::derive(move || total.clone()) icon="fa-table-list" />
                <StatCard label="Imported" value=Signal::derive(move || imported.clone()) icon="fa-user-check" />
                <StatCard label="Failed" value=Signal::derive(move || failed.clone()) icon="fa-triangle-exclamation" />
            </div>
            {(!result.errors.is_empty()).then(|| view! {
                <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead class="bg-surface-muted">
                            <tr class="text-left text-fg-muted">
                                <th class="px-4 py-2">"Row"</th>
                                <th class="px-4 py-2">"Problem"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {result
                                .errors
                                .iter()
                                .map(|e| view! {
                                    <tr>
                                        <td class="px-4 py-2 font-mono">{e.row}</td>
                                        <td class="px-4 py-2 text-status-error-text">{e.message.clone()}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            })}
        </section>
    }
}

#[component]
pub fn BulkImportPanel() -> impl IntoView {
    let vm = use_bulk_import_view_model();
    let importing = vm.import_action.pending();
    let downloading = vm.template_action.pending();
    let file_input = create_node_ref::<html::Input>();

    view! {
        <Layout>
            <PageHeader title="Bulk Import" subtitle="Add many employees at once from a CSV file">
                <Button
                    variant=ButtonVariant::Secondary
                    loading=downloading
                    on_click=Callback::new(move |_| vm.template_action.dispatch(()))
                >
                    <i class="fas fa-file-arrow-down mr-2"></i>
                    "Download template"
                </Button>
            </PageHeader>
            <FlashMessage flash=vm.flash />
            <InlineErrorMessage error=vm.error.into() on_dismiss=Callback::new(move |_| vm.error.set(None)) />

            <div class="bg-surface-elevated shadow rounded-lg p-6 mb-6 space-y-4">
                <p class="text-sm text-fg-muted">
                    "Fill in the template, one employee per row, then upload it here. Rows with problems are skipped and listed below."
                </p>
                <div class="flex flex-col gap-3 sm:flex-row sm:items-center">
                    <input
                        type="file"
                        accept=".csv,text/csv"
                        node_ref=file_input
                        class="block text-sm text-fg"
                    />
                    <Button
                        variant=ButtonVariant::Primary
                        loading=importing
                        on_click=Callback::new(move |_| {
                            if let Some(input) = file_input.get_untracked() {
                                vm.upload_from((*input).clone());
                            }
                        })
                    >
                        <i class="fas fa-upload mr-2"></i>
                        "Upload"
                    </Button>
                </div>
            </div>

            {move || vm.result.get().map(|result| view! { <ImportResults result=result /> })}
        </Layout>
    }
}
