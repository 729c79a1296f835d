use crate::{
    api::{ApiError, Department, EmployeeInput, EmployeeQuery, OnboardingTaskInput},
    utils::validation::{optional_text, parse_date_input, require, validate_email, validate_phone},
};

pub const MENU_KEY: &str = "employees";

pub const ROLE_OPTIONS: &[&str] = &["Employee", "Manager", "Director", "HRManager", "Admin"];

pub fn role_options() -> Vec<(String, String)> {
    ROLE_OPTIONS
        .iter()
        .map(|role| (role.to_string(), role.to_string()))
        .collect()
}

pub fn department_options(departments: &[Department], blank: &str) -> Vec<(String, String)> {
    std::iter::once((String::new(), blank.to_string()))
        .chain(departments.iter().map(|d| (d.id.to_string(), d.name.clone())))
        .collect()
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Search box text plus the department dropdown value.
pub fn build_query(search: &str, department: &str) -> EmployeeQuery {
    EmployeeQuery {
        search: optional_text(search),
        department_id: parse_id(department),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department_id: String,
    pub position: String,
    pub hire_date: String,
    pub role: String,
}

impl EmployeeDraft {
    pub fn into_input(self) -> Result<EmployeeInput, ApiError> {
        require("First name", &self.first_name)?;
        require("Last name", &self.last_name)?;
        validate_email(&self.email)?;
        validate_phone(&self.phone)?;
        let hire_date = match self.hire_date.trim() {
            "" => None,
            raw => Some(
                parse_date_input(raw)
                    .ok_or_else(|| ApiError::validation("Please enter a valid hire date"))?,
            ),
        };
        Ok(EmployeeInput {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: optional_text(&self.phone),
            department_id: parse_id(&self.department_id),
            position: optional_text(&self.position),
            hire_date,
            role: optional_text(&self.role),
        })
    }
}

pub fn build_onboarding_task(
    employee_id: i64,
    title: &str,
    description: &str,
    due_date: &str,
    requires_document: bool,
) -> Result<OnboardingTaskInput, ApiError> {
    require("Task title", title)?;
    Ok(OnboardingTaskInput {
        employee_id,
        title: title.trim().to_string(),
        description: optional_text(description),
        due_date: parse_date_input(due_date),
        requires_document,
    })
}
