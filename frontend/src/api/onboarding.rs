use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, OnboardingTask, OnboardingTaskInput, UploadFile},
};

impl ApiClient {
    pub async fn get_my_onboarding_tasks(&self) -> Result<Vec<OnboardingTask>, ApiError> {
        self.get_json("/Onboarding/MyTasks", "Failed to load onboarding tasks")
            .await
    }

    pub async fn get_employee_onboarding_tasks(
        &self,
        employee_id: i64,
    ) -> Result<Vec<OnboardingTask>, ApiError> {
        self.get_json(
            &format!("/Onboarding/Employee/{}/Tasks", employee_id),
            "Failed to load onboarding tasks",
        )
        .await
    }

    pub async fn create_onboarding_task(
        &self,
        input: &OnboardingTaskInput,
    ) -> Result<OnboardingTask, ApiError> {
        self.send_json(
            Method::POST,
            "/Onboarding/Task",
            input,
            "Failed to create the onboarding task",
        )
        .await
    }

    pub async fn complete_onboarding_task(&self, id: i64) -> Result<(), ApiError> {
        self.send_unit::<()>(
            Method::PUT,
            &format!("/Onboarding/Task/{}/Complete", id),
            None,
            "Failed to complete the task",
        )
        .await
    }

    pub async fn upload_onboarding_document(
        &self,
        id: i64,
        file: UploadFile,
    ) -> Result<OnboardingTask, ApiError> {
        self.send_multipart(
            &format!("/Onboarding/Task/{}/Upload", id),
            file,
            "Failed to upload the document",
        )
        .await
    }
}
