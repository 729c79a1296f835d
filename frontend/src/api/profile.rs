use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, ChangePasswordRequest, Employee, ProfileUpdate},
};

impl ApiClient {
    pub async fn get_my_profile(&self) -> Result<Employee, ApiError> {
        self.get_json("/Profile/Me", "Failed to load your profile")
            .await
    }

    pub async fn update_my_profile(&self, update: &ProfileUpdate) -> Result<Employee, ApiError> {
        self.send_json(Method::PUT, "/Profile/Me", update, "Failed to update your profile")
            .await
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.send_unit(
            Method::POST,
            "/Profile/ChangePassword",
            Some(request),
            "Failed to change the password",
        )
        .await
    }
}
