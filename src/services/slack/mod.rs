//! Slack Web API notifier (`chat.postMessage`)

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::config::SlackConfig;
use crate::error::NotifyError;
use crate::services::notifier::Notifier;

#[derive(Debug, Serialize)]
struct PostMessageRequest<'a> {
    channel: &'a str,
    text: &'a str,
    mrkdwn: bool,
}

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

pub struct SlackNotifier {
    client: reqwest::Client,
    endpoint: Url,
    token: String,
    channel: String,
}

impl SlackNotifier {
    pub fn new(config: &SlackConfig) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Self::with_client(config, client)
    }

    pub fn with_client(config: &SlackConfig, client: reqwest::Client) -> Result<Self, NotifyError> {
        let mut endpoint = config.api_base.clone();
        endpoint
            .path_segments_mut()
            .map_err(|_| {
                NotifyError::Client(format!("invalid Slack API base {}", config.api_base))
            })?
            .pop_if_empty()
            .push("chat.postMessage");
        Ok(Self {
            client,
            endpoint,
            token: config.bot_token.clone(),
            channel: config.channel_id.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn post_message(&self, text: &str) -> Result<(), NotifyError> {
        let request = PostMessageRequest {
            channel: &self.channel,
            text,
            mrkdwn: true,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let ack = serde_json::from_str::<PostMessageResponse>(&body).ok();

        match ack {
            Some(ack) if status == StatusCode::OK && ack.ok => {
                debug!(channel = %self.channel, "Slack: message delivered to {}", self.channel);
                Ok(())
            }
            Some(PostMessageResponse {
                error: Some(error), ..
            }) => Err(NotifyError::Rejected {
                status: status.as_u16(),
                body: error,
            }),
            _ => Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            }),
        }
    }
}
