//! Client-side contact form rules. Nothing here leaves the page.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lang::{Bilingual, Lang};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Values of the contact form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message subject.
    pub subject: String,
    /// Message body.
    pub message: String,
}

/// The first field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is blank.
    #[error("name is required")]
    MissingName,
    /// Email is blank or not shaped like an address.
    #[error("a valid email address is required")]
    InvalidEmail,
    /// Subject is blank.
    #[error("subject is required")]
    MissingSubject,
    /// Message is blank.
    #[error("message is required")]
    MissingMessage,
}

impl ValidationError {
    /// User-facing message in `lang`.
    pub fn message(self, lang: Lang) -> &'static str {
        let text = match self {
            ValidationError::MissingName => Bilingual::new("請輸入您的姓名", "Please enter your name"),
            ValidationError::InvalidEmail => {
                Bilingual::new("請輸入有效的Email地址", "Please enter a valid email address")
            },
            ValidationError::MissingSubject => Bilingual::new("請輸入主旨", "Please enter a subject"),
            ValidationError::MissingMessage => {
                Bilingual::new("請輸入訊息內容", "Please enter your message")
            },
        };
        text.get(lang)
    }
}

/// Whether `email` looks like an address. Surrounding whitespace fails.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check the fields in form order; the first failure wins.
pub fn validate(form: &ContactForm) -> Result<(), ValidationError> {
    if form.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if form.email.trim().is_empty() || !is_valid_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if form.subject.trim().is_empty() {
        return Err(ValidationError::MissingSubject);
    }
    if form.message.trim().is_empty() {
        return Err(ValidationError::MissingMessage);
    }
    Ok(())
}

/// Toast styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Submission succeeded.
    Success,
    /// Validation failed.
    Error,
    /// Progress notice.
    Info,
}

impl ToastKind {
    /// Modifier used in the `message message-<kind>` class.
    pub fn name(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }

    /// Background colour.
    pub fn color(self) -> &'static str {
        match self {
            ToastKind::Success => "#10b981",
            ToastKind::Error => "#ef4444",
            ToastKind::Info => "#3b82f6",
        }
    }

    /// Full class attribute of the toast element.
    pub fn class_name(self) -> String {
        format!("message message-{}", self.name())
    }
}

/// Notices of the simulated submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionNotice {
    /// Shown immediately after a valid submit.
    Sending,
    /// Shown once the simulated delay elapses.
    Sent,
}

impl SubmissionNotice {
    /// User-facing message in `lang`.
    pub fn message(self, lang: Lang) -> &'static str {
        let text = match self {
            SubmissionNotice::Sending => Bilingual::new("訊息發送中...", "Sending message..."),
            SubmissionNotice::Sent => Bilingual::new(
                "訊息已成功發送！我會盡快回覆您。",
                "Message sent successfully! I will get back to you soon.",
            ),
        };
        text.get(lang)
    }

    /// Toast style for the notice.
    pub fn kind(self) -> ToastKind {
        match self {
            SubmissionNotice::Sending => ToastKind::Info,
            SubmissionNotice::Sent => ToastKind::Success,
        }
    }
}
