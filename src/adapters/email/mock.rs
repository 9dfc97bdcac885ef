//! Mock mailer for tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::user::EmailAddress;
use crate::ports::Mailer;

/// Captures outbound mail instead of sending it.
#[derive(Default)]
pub struct MockMailer {
    sent: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose every send fails.
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Recipient/code pairs captured so far.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    /// The most recently dispatched reset code, if any.
    pub fn last_code(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(_, code)| code.clone())
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send_password_reset(
        &self,
        to: &EmailAddress,
        code: &str,
    ) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::EmailDeliveryFailed,
                "Simulated delivery failure",
            ));
        }
        self.sent
            .lock()
            .unwrap()
            .push((to.as_str().to_string(), code.to_string()));
        Ok(())
    }
}
