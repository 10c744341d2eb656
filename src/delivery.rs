//! Posting a message to the Chat webhook

use reqwest::{Client, StatusCode, header};
use tracing::{debug, error};

use crate::error::{NotifyError, Result};
use crate::message::Message;

pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Sends the message. Anything but `200 OK` is reported with the response body.
pub async fn post_message(client: &Client, webhook_url: &str, message: &Message) -> Result<()> {
    let body = serde_json::to_vec(message)?;
    debug!("Request to Google Chat: {}", String::from_utf8_lossy(&body));

    let response = client
        .post(webhook_url)
        .header(header::CONTENT_TYPE, CONTENT_TYPE)
        .body(body)
        .send()
        .await?;

    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().await.map_err(|e| NotifyError::ServerError {
            status: status.to_string(),
            body: format!("failed to read response: {}", e),
        })?;
        error!("Webhook answered with {}", status);
        return Err(NotifyError::ServerError {
            status: status.to_string(),
            body,
        });
    }

    Ok(())
}

/// Pretty-printed payload, used by dry runs
pub fn render_message(message: &Message) -> Result<String> {
    Ok(serde_json::to_string_pretty(message)?)
}
