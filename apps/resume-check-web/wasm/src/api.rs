//! Submission to the analysis endpoint

use resume_check_core::{AnalysisResult, CheckError, SubmitRequest};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};

/// POST the file as multipart form data and parse the report.
///
/// A rejected fetch or an unreadable body is a network error; a non-2xx
/// status is a server error carrying the body's `error` string.
pub async fn submit_resume(request: SubmitRequest<File>) -> Result<AnalysisResult, CheckError> {
    let window = web_sys::window().ok_or_else(|| CheckError::Network("No window".to_string()))?;

    let form = FormData::new().map_err(network)?;
    form.append_with_blob_and_filename(&request.field, &request.file, &request.file_name)
        .map_err(network)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    let http_request = Request::new_with_str_and_init(&request.endpoint, &opts).map_err(network)?;

    let response = JsFuture::from(window.fetch_with_request(&http_request))
        .await
        .map_err(network)?;
    let response: Response = response.dyn_into().map_err(network)?;

    let body = JsFuture::from(response.text().map_err(network)?)
        .await
        .map_err(network)?
        .as_string()
        .unwrap_or_default();

    if !response.ok() {
        tracing::info!("server rejected upload with status {}", response.status());
        return Err(CheckError::server_rejected(response.status(), &body));
    }

    AnalysisResult::from_json(&body)
}

fn network(err: JsValue) -> CheckError {
    tracing::warn!("request failed: {:?}", err);
    CheckError::Network(format!("{:?}", err))
}
