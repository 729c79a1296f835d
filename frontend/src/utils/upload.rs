use crate::api::{ApiError, UploadFile};
use wasm_bindgen_futures::JsFuture;

/// Reads the first file chosen in `<input type="file">` into memory.
pub async fn read_selected_file(input: &web_sys::HtmlInputElement) -> Result<UploadFile, ApiError> {
    let file = input
        .files()
        .and_then(|files| files.get(0))
        .ok_or_else(|| ApiError::validation("Please choose a file"))?;
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::unknown("Could not read the selected file"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let content_type = Some(file.type_()).filter(|t| !t.is_empty());
    Ok(UploadFile {
        file_name: file.name(),
        content_type,
        bytes,
    })
}
