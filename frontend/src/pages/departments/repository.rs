use crate::api::{ApiClient, ApiError, Department, DepartmentInput, Employee, EmployeeQuery};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentDirectory {
    pub departments: Vec<Department>,
    pub employees: Vec<Employee>,
}

/// Departments plus the people who can be picked as managers.
pub async fn load_directory(api: &ApiClient) -> Result<DepartmentDirectory, ApiError> {
    let query = EmployeeQuery::default();
    let (departments, employees) =
        futures::join!(api.list_departments(), api.list_employees(&query));
    let mut departments = departments?;
    departments.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    Ok(DepartmentDirectory {
        departments,
        employees: employees?,
    })
}

pub async fn fetch(api: &ApiClient, id: i64) -> Result<Department, ApiError> {
    api.get_department(id).await
}

pub async fn save(
    api: &ApiClient,
    id: Option<i64>,
    input: DepartmentInput,
) -> Result<Department, ApiError> {
    match id {
        Some(id) => api.update_department(id, &input).await,
        None => api.create_department(&input).await,
    }
}

pub async fn remove(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete_department(id).await
}
