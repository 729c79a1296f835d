use crate::api::{ApiClient, ApiError, OnboardingTask, UploadFile};

pub async fn load_my_tasks(api: &ApiClient) -> Result<Vec<OnboardingTask>, ApiError> {
    let mut tasks = api.get_my_onboarding_tasks().await?;
    tasks.sort_by_key(|t| (t.due_date.is_none(), t.due_date));
    Ok(tasks)
}

pub async fn complete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.complete_onboarding_task(id).await
}

pub async fn upload(api: &ApiClient, id: i64, file: UploadFile) -> Result<OnboardingTask, ApiError> {
    api.upload_onboarding_document(id, file).await
}
