use crate::api::ApiError;
use wasm_bindgen::JsCast;

fn failed(what: &str) -> ApiError {
    ApiError::unknown(format!("Download failed: {}", what))
}

pub fn trigger_csv_download(filename: &str, csv_data: &str) -> Result<(), ApiError> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(csv_data));
    let blob =
        web_sys::Blob::new_with_str_sequence(&array).map_err(|_| failed("could not create blob"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| failed("could not create object URL"))?;

    let document = crate::utils::storage::window()?
        .document()
        .ok_or_else(|| failed("no document"))?;
    let anchor = document
        .create_element("a")
        .map_err(|_| failed("could not create link"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| failed("could not cast anchor"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    let _ = anchor.style().set_property("display", "none");
    document
        .body()
        .ok_or_else(|| failed("no body"))?
        .append_child(&anchor)
        .map_err(|_| failed("could not attach link"))?;
    anchor.click();
    anchor.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
