use super::utils::check_import_file;
use crate::api::{ApiClient, ApiError, BulkImportResult, UploadFile};

pub async fn import(api: &ApiClient, file: UploadFile) -> Result<BulkImportResult, ApiError> {
    check_import_file(&file)?;
    let result = api.import_employees(file).await?;
    log::info!(
        "bulk import finished: {} imported, {} failed",
        result.imported,
        result.failed
    );
    Ok(result)
}

pub async fn fetch_template(api: &ApiClient) -> Result<String, ApiError> {
    api.download_import_template().await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::helpers::api_for;
    use serde_json::json;

    #[tokio::test]
    async fn import_returns_row_errors() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/BulkImport/Employees");
            then.status(200).json_body(json!({
                "totalRows": 2, "imported": 1, "failed": 1,
                "errors": [{ "row": 2, "message": "Missing email" }]
            }));
        });

        let file = UploadFile {
            file_name: "staff.csv".into(),
            content_type: Some("text/csv".into()),
            bytes: b"firstName,lastName,email\n".to_vec(),
        };
        let result = import(&api_for(&server), file).await.unwrap();
        assert_eq!(result.imported, 1);
        assert_eq!(result.errors[0].message, "Missing email");
    }

    #[tokio::test]
    async fn wrong_extension_never_reaches_server() {
        let server = MockServer::start_async().await;
        let file = UploadFile {
            file_name: "staff.txt".into(),
            content_type: None,
            bytes: b"x".to_vec(),
        };
        assert!(import(&api_for(&server), file).await.is_err());
        assert!(server.received().is_empty());
    }

    #[tokio::test]
    async fn template_is_plain_text() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/BulkImport/Template");
            then.status(200).body("firstName,lastName,email\n");
        });

        let csv = fetch_template(&api_for(&server)).await.unwrap();
        assert!(csv.starts_with("firstName"));
    }
}
