use gloo_net::http::Request;
use web_sys::{FormData, HtmlFormElement};

/// Post the form as `FormData` to its `action` endpoint.
pub async fn submit_form(form: &HtmlFormElement) -> Result<(), String> {
    let data = FormData::new_with_form(form)
        .map_err(|e| format!("Failed to read form: {:?}", e))?;

    let response = Request::post(&form.action())
        .header("Accept", "application/json")
        .body(data)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}
