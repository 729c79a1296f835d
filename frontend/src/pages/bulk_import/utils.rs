use crate::api::{ApiError, BulkImportResult, UploadFile};

pub const TEMPLATE_FILE_NAME: &str = "employee_import_template.csv";
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Only non-empty CSV files under the size cap go to the server.
pub fn check_import_file(file: &UploadFile) -> Result<(), ApiError> {
    if !file.file_name.to_ascii_lowercase().ends_with(".csv") {
        return Err(ApiError::validation("Please choose a .csv file"));
    }
    if file.bytes.is_empty() {
        return Err(ApiError::validation("The selected file is empty"));
    }
    if file.bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ApiError::validation("The file is larger than 5 MB"));
    }
    Ok(())
}

pub fn result_headline(result: &BulkImportResult) -> String {
    match (result.imported, result.failed) {
        (0, 0) => "The file contained no employee rows".to_string(),
        (imported, 0) => format!("Imported {} employee(s)", imported),
        (0, failed) => format!("No employees imported; {} row(s) failed", failed),
        (imported, failed) => format!("Imported {} employee(s); {} row(s) failed", imported, failed),
    }
}
