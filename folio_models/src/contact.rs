use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 254;
pub const PHONE_MIN_CHARS: usize = 7;
pub const PHONE_MAX_CHARS: usize = 20;
pub const MESSAGE_MAX_CHARS: usize = 2000;

/// A contact form submission as posted by the website.
///
/// Absent and empty fields are equivalent. Constraints are checked by the
/// relay pipeline rather than during deserialization, so a rejected
/// submission always produces its documented error message instead of a
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    /// Honeypot field. Hidden on the website, so humans leave it empty.
    pub website: Option<String>,
}

/// An email in the mail provider's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingMessage {
    pub from: String,
    pub reply_to: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// The body of every contact endpoint response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MailApiResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Submission budget per client identity and time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub max_submissions: u64,
    pub window: Duration,
}

impl RateLimitPolicy {
    pub const MAX_SUBMISSIONS_MIN: u64 = 1;
    pub const MAX_SUBMISSIONS_MAX: u64 = 100;
    pub const WINDOW_MIN: Duration = Duration::from_secs(60);
    pub const WINDOW_MAX: Duration = Duration::from_secs(86400);

    /// Clamps both limits into their supported ranges.
    pub fn clamped(self) -> Self {
        Self {
            max_submissions: self
                .max_submissions
                .clamp(Self::MAX_SUBMISSIONS_MIN, Self::MAX_SUBMISSIONS_MAX),
            window: self.window.clamp(Self::WINDOW_MIN, Self::WINDOW_MAX),
        }
    }
}
