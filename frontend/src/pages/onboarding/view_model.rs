use super::repository;
use crate::api::{ApiClient, ApiError, OnboardingTask, UploadFile};
use crate::state::{
    flash::{create_flash, Flash},
    loader::{create_loader, Loader},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct OnboardingViewModel {
    pub tasks: Loader<Vec<OnboardingTask>>,
    pub complete_action: Action<i64, Result<i64, ApiError>>,
    pub upload_action: Action<(i64, UploadFile), Result<OnboardingTask, ApiError>>,
    pub uploading: RwSignal<Option<i64>>,
    pub error: RwSignal<Option<ApiError>>,
    pub flash: Flash,
}

impl OnboardingViewModel {
    pub fn complete(&self, id: i64) {
        self.complete_action.dispatch(id);
    }

    pub fn upload(&self, id: i64, file: UploadFile) {
        self.uploading.set(Some(id));
        self.upload_action.dispatch((id, file));
    }

    /// Reads the picked file off the input, then uploads it.
    pub fn upload_from(&self, id: i64, input: web_sys::HtmlInputElement) {
        let vm = *self;
        spawn_local(async move {
            match crate::utils::upload::read_selected_file(&input).await {
                Ok(file) => vm.upload(id, file),
                Err(err) => vm.error.set(Some(err)),
            }
            input.set_value("");
        });
    }
}

pub fn use_onboarding_view_model() -> OnboardingViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let tasks = {
        let api = api.clone();
        create_loader(
            || (),
            move |_| {
                let api = api.clone();
                async move { repository::load_my_tasks(&api).await }
            },
        )
    };
    let complete_action = {
        let api = api.clone();
        create_action(move |id: &i64| {
            let api = api.clone();
            let id = *id;
            async move { repository::complete(&api, id).await.map(|_| id) }
        })
    };
    let upload_action = create_action(move |(id, file): &(i64, UploadFile)| {
        let api = api.clone();
        let id = *id;
        let file = file.clone();
        async move { repository::upload(&api, id, file).await }
    });

    let uploading = create_rw_signal(None::<i64>);
    let error = create_rw_signal(None::<ApiError>);
    let flash = create_flash();

    create_effect(move |_| match complete_action.value().get() {
        Some(Ok(id)) => {
            tasks.update_data(|list| {
                if let Some(task) = list.iter_mut().find(|t| t.id == id) {
                    task.is_completed = true;
                    task.completed_at = Some(crate::utils::time::now_naive());
                }
            });
            flash.show("Task completed");
        }
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    });
    create_effect(move |_| {
        let Some(result) = upload_action.value().get() else {
            return;
        };
        uploading.set(None);
        match result {
            Ok(updated) => {
                tasks.update_data(|list| {
                    if let Some(task) = list.iter_mut().find(|t| t.id == updated.id) {
                        *task = updated.clone();
                    }
                });
                flash.show("Document uploaded");
            }
            Err(err) => error.set(Some(err)),
        }
    });

    OnboardingViewModel {
        tasks,
        complete_action,
        upload_action,
        uploading,
        error,
        flash,
    }
}
