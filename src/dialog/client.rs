//! HTTP client for the Watson Conversation message API.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::config::DialogConfig;
use crate::dialog::{DialogService, MessageRequest};
use crate::error::DialogError;

/// Maximum number of body bytes echoed back in a status error.
const MAX_ERROR_BODY: usize = 512;

/// Dialog service backed by the Watson Conversation v1 REST API.
pub struct WatsonClient {
    base_url: String,
    workspace_id: String,
    api_version: String,
    username: String,
    password: SecretString,
    client: reqwest::Client,
}

impl WatsonClient {
    pub fn new(config: &DialogConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            workspace_id: config.workspace_id.clone(),
            api_version: config.api_version.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            client: reqwest::Client::new(),
        }
    }

    fn message_url(&self) -> String {
        format!(
            "{}/v1/workspaces/{}/message",
            self.base_url, self.workspace_id
        )
    }
}

#[async_trait]
impl DialogService for WatsonClient {
    fn name(&self) -> &str {
        "watson"
    }

    async fn message(&self, request: MessageRequest) -> Result<serde_json::Value, DialogError> {
        let url = self.message_url();
        tracing::debug!(
            workspace = %self.workspace_id,
            input = request.text().unwrap_or("<initial>"),
            "Sending message"
        );

        let resp = self
            .client
            .post(&url)
            .query(&[("version", self.api_version.as_str())])
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .json(&request)
            .send()
            .await
            .map_err(|e| DialogError::Transport {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let mut body = resp.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            tracing::warn!(status = status.as_u16(), "Dialog service rejected message");
            return Err(DialogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<serde_json::Value>()
            .await
            .map_err(|e| DialogError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(base_url: &str) -> DialogConfig {
        DialogConfig {
            username: "user".to_string(),
            password: SecretString::from("pass"),
            workspace_id: "ws-42".to_string(),
            base_url: base_url.to_string(),
            api_version: "2016-09-20".to_string(),
            docs_path: PathBuf::from("documentation_links.json"),
        }
    }

    #[test]
    fn test_message_url() {
        let client = WatsonClient::new(&config("https://example.com/api"));
        assert_eq!(
            client.message_url(),
            "https://example.com/api/v1/workspaces/ws-42/message"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let client = WatsonClient::new(&config("http://127.0.0.1:9"));
        let err = client.message(MessageRequest::initial()).await.unwrap_err();
        assert!(matches!(err, DialogError::Transport { .. }));
    }
}
