use super::{
    client::ApiClient,
    types::{ApiError, MenuPermission},
};

impl ApiClient {
    /// Role-based navigation entries with their per-menu permission flags.
    pub async fn get_my_menus(&self) -> Result<Vec<MenuPermission>, ApiError> {
        self.get_json("/Menu/MyMenus", "Failed to load menu permissions")
            .await
    }
}
