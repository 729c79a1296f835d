use crate::{
    api::{ApiError, ChangePasswordRequest, Employee, ProfileUpdate},
    utils::validation::{optional_text, require, validate_phone},
};

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn build_profile_update(
    phone: &str,
    address: &str,
    emergency_name: &str,
    emergency_phone: &str,
) -> Result<ProfileUpdate, ApiError> {
    validate_phone(phone)?;
    validate_phone(emergency_phone)
        .map_err(|_| ApiError::validation("Please enter a valid emergency contact phone"))?;
    Ok(ProfileUpdate {
        phone: optional_text(phone),
        address: optional_text(address),
        emergency_contact_name: optional_text(emergency_name),
        emergency_contact_phone: optional_text(emergency_phone),
    })
}

pub fn build_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<ChangePasswordRequest, ApiError> {
    require("Current password", current)?;
    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(format!(
            "New password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    if new != confirm {
        return Err(ApiError::validation("Passwords do not match"));
    }
    if new == current {
        return Err(ApiError::validation(
            "New password must differ from the current one",
        ));
    }
    Ok(ChangePasswordRequest {
        current_password: current.to_string(),
        new_password: new.to_string(),
    })
}

/// Label/value rows for the read-only part of the profile card.
pub fn profile_facts(employee: &Employee) -> Vec<(&'static str, String)> {
    let or_dash = |value: Option<String>| value.filter(|v| !v.is_empty()).unwrap_or_else(|| "-".into());
    vec![
        ("Employee code", or_dash(employee.employee_code.clone())),
        ("Email", employee.email.clone()),
        ("Department", or_dash(employee.department_name.clone())),
        ("Position", or_dash(employee.position.clone())),
        (
            "Hire date",
            or_dash(employee.hire_date.map(crate::utils::format::format_date)),
        ),
        ("Status", employee.status.clone()),
    ]
}
