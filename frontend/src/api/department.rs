use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, Department, DepartmentInput},
};

impl ApiClient {
    pub async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.get_json("/Department/All", "Failed to load departments")
            .await
    }

    pub async fn get_department(&self, id: i64) -> Result<Department, ApiError> {
        self.get_json(&format!("/Department/{}", id), "Failed to load the department")
            .await
    }

    pub async fn create_department(&self, input: &DepartmentInput) -> Result<Department, ApiError> {
        self.send_json(Method::POST, "/Department", input, "Failed to create the department")
            .await
    }

    pub async fn update_department(
        &self,
        id: i64,
        input: &DepartmentInput,
    ) -> Result<Department, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/Department/{}", id),
            input,
            "Failed to update the department",
        )
        .await
    }

    pub async fn delete_department(&self, id: i64) -> Result<(), ApiError> {
        self.send_unit::<()>(
            Method::DELETE,
            &format!("/Department/{}", id),
            None,
            "Failed to delete the department",
        )
        .await
    }
}
