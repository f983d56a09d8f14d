//! HTTP helpers.
//!
//! `FetchDelivery` posts contact-form emails through `fetch`; `fetch_text`
//! loads static JSON next to the page.

use async_trait::async_trait;
use folio_contact::{EmailDelivery, EmailDeliveryError, EmailRequest};
use gloo_net::http::Request;

/// Sends [`EmailRequest`]s to the EmailJS REST endpoint.
pub struct FetchDelivery {
    endpoint: String,
}

impl FetchDelivery {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl EmailDelivery for FetchDelivery {
    async fn send(&self, request: &EmailRequest) -> Result<(), EmailDeliveryError> {
        let body = request.to_json()?;
        let resp = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| EmailDeliveryError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| EmailDeliveryError::Network(format!("fetch error: {}", e)))?;

        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        tracing::debug!(status, response = %text, "email service responded");
        EmailDeliveryError::check_status(status, text)
    }
}

/// Fetch a URL and return the body as a plain string. Non-2xx is an error.
pub async fn fetch_text(url: &str) -> Result<String, String> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("fetch error: {}", e))?;
    if !resp.ok() {
        return Err(format!("{} {}", resp.status(), resp.status_text()));
    }
    resp.text().await.map_err(|e| format!("text error: {}", e))
}
