use crate::api::{ApiClient, ApiError, ChangePasswordRequest, Employee, ProfileUpdate};

pub async fn load_profile(api: &ApiClient) -> Result<Employee, ApiError> {
    api.get_my_profile().await
}

pub async fn save_profile(api: &ApiClient, update: ProfileUpdate) -> Result<Employee, ApiError> {
    api.update_my_profile(&update).await
}

pub async fn change_password(api: &ApiClient, request: ChangePasswordRequest) -> Result<(), ApiError> {
    api.change_password(&request).await
}
