use super::{repository, utils::TEMPLATE_FILE_NAME};
use crate::api::{ApiClient, ApiError, BulkImportResult, UploadFile};
use crate::state::flash::{create_flash, Flash};
use leptos::*;

#[derive(Clone, Copy)]
pub struct BulkImportViewModel {
    pub import_action: Action<UploadFile, Result<BulkImportResult, ApiError>>,
    pub template_action: Action<(), Result<String, ApiError>>,
    pub result: RwSignal<Option<BulkImportResult>>,
    pub error: RwSignal<Option<ApiError>>,
    pub flash: Flash,
}

impl BulkImportViewModel {
    pub fn upload_from(&self, input: web_sys::HtmlInputElement) {
        let vm = *self;
        vm.error.set(None);
        spawn_local(async move {
            match crate::utils::upload::read_selected_file(&input).await {
                Ok(file) => {
                    vm.result.set(None);
                    vm.import_action.dispatch(file);
                }
                Err(err) => vm.error.set(Some(err)),
            }
        });
    }
}

pub fn use_bulk_import_view_model() -> BulkImportViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let import_action = {
        let api = api.clone();
        create_action(move |file: &UploadFile| {
            let api = api.clone();
            let file = file.clone();
            async move { repository::import(&api, file).await }
        })
    };
    let template_action = create_action(move |_: &()| {
        let api = api.clone();
        async move { repository::fetch_template(&api).await }
    });

    let result = create_rw_signal(None::<BulkImportResult>);
    let error = create_rw_signal(None::<ApiError>);
    let flash = create_flash();

    create_effect(move |_| match import_action.value().get() {
        Some(Ok(outcome)) => {
            if outcome.failed == 0 {
                flash.show("Import complete");
            }
            result.set(Some(outcome));
        }
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    });
    create_effect(move |_| match template_action.value().get() {
        Some(Ok(csv)) => {
            if let Err(err) = crate::utils::download::trigger_csv_download(TEMPLATE_FILE_NAME, &csv) {
                error.set(Some(err));
            }
        }
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    });

    BulkImportViewModel {
        import_action,
        template_action,
        result,
        error,
        flash,
    }
}
