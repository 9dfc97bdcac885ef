//! Resend implementation of the Mailer port.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;
use std::time::Duration;

use crate::config::EmailConfig;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::user::EmailAddress;
use crate::ports::Mailer;

const RESEND_API_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
}

/// Sends transactional mail through the Resend HTTP API.
pub struct ResendMailer {
    client: Client,
    config: EmailConfig,
}

impl ResendMailer {
    pub fn new(config: EmailConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");
        Self { client, config }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send_password_reset(
        &self,
        to: &EmailAddress,
        code: &str,
    ) -> Result<(), DomainError> {
        let from = self.config.from_header();
        let body = format!(
            "Your Skill Aid password reset code is {}.\n\n\
             It expires in 10 minutes. If you did not request a reset, you can ignore this email.",
            code
        );
        let request = SendEmailRequest {
            from: &from,
            to: [to.as_str()],
            subject: "Your password reset code",
            text: &body,
        };

        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(self.config.resend_api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::EmailDeliveryFailed,
                    format!("Email dispatch failed: {}", e),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(%status, "Resend rejected password-reset email");
            return Err(DomainError::new(
                ErrorCode::EmailDeliveryFailed,
                format!("Email provider returned {}", status),
            ));
        }

        Ok(())
    }
}
