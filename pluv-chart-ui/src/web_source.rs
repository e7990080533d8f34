//! CSV source backed by the browser `fetch` API.

use pluv_core::FetchError;
use pluv_session::CsvSource;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetches the CSV relative to the page URL.
#[derive(Debug, Clone)]
pub struct WebSource {
    url: String,
}

impl WebSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl CsvSource for WebSource {
    async fn fetch(&self) -> Result<String, FetchError> {
        let window =
            web_sys::window().ok_or_else(|| FetchError::Transport("no window".to_string()))?;

        let response: Response = JsFuture::from(window.fetch_with_str(&self.url))
            .await
            .map_err(transport)?
            .dyn_into()
            .map_err(|_| FetchError::Transport("fetch did not return a Response".to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                reason: response.status_text(),
            });
        }

        let body = JsFuture::from(response.text().map_err(transport)?)
            .await
            .map_err(transport)?;
        body.as_string()
            .ok_or_else(|| FetchError::Transport("response body is not text".to_string()))
    }
}

fn transport(err: JsValue) -> FetchError {
    FetchError::Transport(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
