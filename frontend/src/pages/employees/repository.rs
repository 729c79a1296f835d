use crate::api::{
    ApiClient, ApiError, Department, Employee, EmployeeInput, EmployeeQuery, OnboardingTask,
    OnboardingTaskInput,
};

pub async fn load_employees(api: &ApiClient, query: EmployeeQuery) -> Result<Vec<Employee>, ApiError> {
    let mut employees = api.list_employees(&query).await?;
    employees.sort_by_key(|e| (e.last_name.to_lowercase(), e.first_name.to_lowercase()));
    Ok(employees)
}

pub async fn load_departments(api: &ApiClient) -> Result<Vec<Department>, ApiError> {
    api.list_departments().await
}

pub async fn fetch(api: &ApiClient, id: i64) -> Result<Employee, ApiError> {
    api.get_employee(id).await
}

pub async fn save(
    api: &ApiClient,
    id: Option<i64>,
    input: EmployeeInput,
) -> Result<Employee, ApiError> {
    match id {
        Some(id) => api.update_employee(id, &input).await,
        None => api.create_employee(&input).await,
    }
}

pub async fn remove(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete_employee(id).await
}

pub async fn load_onboarding(api: &ApiClient, employee_id: i64) -> Result<Vec<OnboardingTask>, ApiError> {
    api.get_employee_onboarding_tasks(employee_id).await
}

pub async fn add_onboarding_task(
    api: &ApiClient,
    input: OnboardingTaskInput,
) -> Result<OnboardingTask, ApiError> {
    api.create_onboarding_task(&input).await
}
