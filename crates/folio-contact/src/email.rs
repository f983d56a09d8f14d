//! Email delivery through the EmailJS REST API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailSettings {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            service_id: "YOUR_SERVICE_ID".to_owned(),
            template_id: "YOUR_TEMPLATE_ID".to_owned(),
            public_key: String::new(),
            endpoint: EMAILJS_SEND_URL.to_owned(),
        }
    }
}

/// Body of `POST /api/v1.0/email/send`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: BTreeMap<String, String>,
}

impl EmailRequest {
    pub fn new(settings: &EmailSettings, template_params: BTreeMap<String, String>) -> Self {
        Self {
            service_id: settings.service_id.clone(),
            template_id: settings.template_id.clone(),
            user_id: settings.public_key.clone(),
            template_params,
        }
    }

    pub fn to_json(&self) -> Result<String, EmailDeliveryError> {
        serde_json::to_string(self).map_err(EmailDeliveryError::Encode)
    }
}

#[derive(Debug, Error)]
pub enum EmailDeliveryError {
    #[error("network error: {0}")]
    Network(String),
    #[error("email service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("could not encode request: {0}")]
    Encode(#[source] serde_json::Error),
}

impl EmailDeliveryError {
    /// Map an HTTP response to a delivery result; anything outside 2xx is a rejection.
    pub fn check_status(status: u16, body: String) -> Result<(), Self> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(Self::Rejected { status, body })
        }
    }
}

/// Outbound email channel. Futures are not `Send`: the browser is single-threaded.
#[async_trait(?Send)]
pub trait EmailDelivery {
    async fn send(&self, request: &EmailRequest) -> Result<(), EmailDeliveryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_emailjs_field_names() {
        let settings = EmailSettings {
            public_key: "pk_123".to_owned(),
            ..EmailSettings::default()
        };
        let mut params = BTreeMap::new();
        params.insert("name".to_owned(), "Ada".to_owned());
        let body = EmailRequest::new(&settings, params).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["service_id"], "YOUR_SERVICE_ID");
        assert_eq!(value["template_id"], "YOUR_TEMPLATE_ID");
        assert_eq!(value["user_id"], "pk_123");
        assert_eq!(value["template_params"]["name"], "Ada");
    }

    #[test]
    fn only_2xx_counts_as_delivered() {
        assert!(EmailDeliveryError::check_status(200, "OK".to_owned()).is_ok());
        assert!(EmailDeliveryError::check_status(204, String::new()).is_ok());
        match EmailDeliveryError::check_status(400, "The user ID is required".to_owned()) {
            Err(EmailDeliveryError::Rejected { status, body }) => {
                assert_eq!(status, 400);
                assert_eq!(body, "The user ID is required");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(EmailDeliveryError::check_status(302, String::new()).is_err());
    }

    #[test]
    fn partial_settings_keep_defaults() {
        let settings: EmailSettings = serde_json::from_str(r#"{"service_id": "svc"}"#).unwrap();
        assert_eq!(settings.service_id, "svc");
        assert_eq!(settings.template_id, "YOUR_TEMPLATE_ID");
        assert_eq!(settings.endpoint, EMAILJS_SEND_URL);
    }
}
