use crate::api::ApiError;
use web_sys::{Storage, Window};

pub fn window() -> Result<Window, ApiError> {
    web_sys::window().ok_or_else(|| ApiError::unknown("No window object"))
}

pub fn local_storage() -> Result<Storage, ApiError> {
    window()?
        .local_storage()
        .map_err(|_| ApiError::unknown("localStorage is not accessible"))?
        .ok_or_else(|| ApiError::unknown("localStorage is not available"))
}
