use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, Employee, EmployeeInput, EmployeeQuery},
};

impl ApiClient {
    pub async fn list_employees(&self, query: &EmployeeQuery) -> Result<Vec<Employee>, ApiError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(search) = query.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            params.push(("search", search.to_string()));
        }
        if let Some(department_id) = query.department_id {
            params.push(("departmentId", department_id.to_string()));
        }
        self.get_json_with_query("/Employee/All", &params, "Failed to load employees")
            .await
    }

    pub async fn get_employee(&self, id: i64) -> Result<Employee, ApiError> {
        self.get_json(&format!("/Employee/{}", id), "Failed to load the employee")
            .await
    }

    pub async fn create_employee(&self, input: &EmployeeInput) -> Result<Employee, ApiError> {
        self.send_json(Method::POST, "/Employee", input, "Failed to create the employee")
            .await
    }

    pub async fn update_employee(&self, id: i64, input: &EmployeeInput) -> Result<Employee, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/Employee/{}", id),
            input,
            "Failed to update the employee",
        )
        .await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        self.send_unit::<()>(
            Method::DELETE,
            &format!("/Employee/{}", id),
            None,
            "Failed to delete the employee",
        )
        .await
    }
}
