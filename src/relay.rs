use gloo_net::http::Request;
use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::config;

/// The four template parameters the enquiry email is rendered from.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EnquiryPayload {
    pub name: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("relay rejected the enquiry with status {status}")]
    Rejected { status: u16 },
    #[error("could not encode enquiry: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    pub fn from_build_env() -> Self {
        Self {
            endpoint: config::get_relay_endpoint().to_string(),
            service_id: config::get_service_id().to_string(),
            template_id: config::get_template_id().to_string(),
            public_key: config::get_public_key().to_string(),
        }
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EnquiryPayload,
}

/// Something that can deliver an enquiry as an email.
#[allow(async_fn_in_trait)]
pub trait MailRelay {
    async fn send(&self, payload: &EnquiryPayload) -> Result<(), RelayError>;
}

pub struct EmailJsRelay {
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    fn request_body<'a>(&'a self, payload: &'a EnquiryPayload) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: payload,
        }
    }
}

impl MailRelay for EmailJsRelay {
    async fn send(&self, payload: &EnquiryPayload) -> Result<(), RelayError> {
        debug!("Relaying enquiry for service {:?}", payload.service);
        let response = Request::post(&self.config.endpoint)
            .json(&self.request_body(payload))
            .map_err(|e| RelayError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(RelayError::Rejected { status: response.status() });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn relay() -> EmailJsRelay {
        EmailJsRelay::new(RelayConfig {
            endpoint: "https://relay.test/send".to_string(),
            service_id: "svc".to_string(),
            template_id: "tpl".to_string(),
            public_key: "pk".to_string(),
        })
    }

    #[test]
    fn request_body_wraps_payload_as_template_params() {
        let payload = EnquiryPayload {
            name: "Jane Doe".to_string(),
            phone: "9995060708".to_string(),
            service: "Residential Construction".to_string(),
            message: String::new(),
        };
        let relay = relay();
        let body = serde_json::to_value(relay.request_body(&payload)).unwrap();

        assert_eq!(
            body,
            json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "pk",
                "template_params": {
                    "name": "Jane Doe",
                    "phone": "9995060708",
                    "service": "Residential Construction",
                    "message": ""
                }
            })
        );
    }

    #[test]
    fn rejection_message_names_status() {
        let err = RelayError::Rejected { status: 412 };
        assert_eq!(err.to_string(), "relay rejected the enquiry with status 412");
    }
}
