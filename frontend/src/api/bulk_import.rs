use super::{
    client::ApiClient,
    types::{ApiError, BulkImportResult, UploadFile},
};

impl ApiClient {
    pub async fn import_employees(&self, file: UploadFile) -> Result<BulkImportResult, ApiError> {
        self.send_multipart("/BulkImport/Employees", file, "Failed to import employees")
            .await
    }

    pub async fn download_import_template(&self) -> Result<String, ApiError> {
        self.get_text("/BulkImport/Template", "Failed to download the import template")
            .await
    }
}
