use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, SessionUser},
};

impl ApiClient {
    /// Authenticates and persists `token`, `user` and `employee` together.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self
            .send_json(
                Method::POST,
                "/Auth/Login",
                request,
                "Login failed. Please check your email and password.",
            )
            .await?;
        self.session().persist(&response)?;
        log::info!("Signed in as {}", response.user.email);
        Ok(response)
    }

    /// Drops the persisted session. The backend keeps no session state to revoke.
    pub fn logout(&self) {
        self.session().clear();
        log::info!("Signed out");
    }

    pub async fn get_me(&self) -> Result<SessionUser, ApiError> {
        self.get_json("/Auth/Me", "Failed to load the current user")
            .await
    }
}
