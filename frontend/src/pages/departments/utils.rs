use crate::{
    api::{ApiError, Department, DepartmentInput, Employee},
    utils::validation::{optional_text, require},
};

pub const MENU_KEY: &str = "departments";

pub fn build_department_input(
    name: &str,
    description: &str,
    manager_id: &str,
) -> Result<DepartmentInput, ApiError> {
    require("Department name", name)?;
    let manager_id = match manager_id.trim() {
        "" => None,
        raw => Some(
            raw.parse::<i64>()
                .map_err(|_| ApiError::validation("Please choose a valid manager"))?,
        ),
    };
    Ok(DepartmentInput {
        name: name.trim().to_string(),
        description: optional_text(description),
        manager_id,
    })
}

pub fn manager_options(employees: &[Employee]) -> Vec<(String, String)> {
    std::iter::once((String::new(), "No manager".to_string()))
        .chain(
            employees
                .iter()
                .map(|e| (e.id.to_string(), e.full_name())),
        )
        .collect()
}

/// Departments that still have people cannot be removed.
pub fn delete_blocker(department: &Department) -> Option<String> {
    (department.employee_count > 0).then(|| {
        format!(
            "{} still has {} employee(s). Move them before deleting.",
            department.name, department.employee_count
        )
    })
}
