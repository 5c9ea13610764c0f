use async_trait::async_trait;
use email_address::{EmailAddress, Options};

use crate::portfolio::application::domain::{Message, NewMessage};

//
// ──────────────────────────────────────────────────────────
// Contact Message Command
// ──────────────────────────────────────────────────────────
//

/// Validated contact form input. Constructing one is the only way to reach
/// the storage write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageCommand {
    name: String,
    email: String,
    message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Message is required")]
    MessageRequired,
}

impl ContactValidationError {
    /// Name of the request field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameRequired => "name",
            Self::EmailRequired | Self::InvalidEmail => "email",
            Self::MessageRequired => "message",
        }
    }
}

impl ContactMessageCommand {
    /// Checks fields in form order (name, email, message) and reports the
    /// first one that fails.
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Result<Self, ContactValidationError> {
        let name = Self::validate_name(name)?;
        let email = Self::validate_email(email)?;
        let message = Self::validate_message(message)?;

        Ok(Self {
            name,
            email,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_new_message(self) -> NewMessage {
        NewMessage {
            name: self.name,
            email: self.email,
            message: self.message,
        }
    }

    // ------------------------
    // Validation helpers
    // ------------------------

    fn validate_name(name: Option<String>) -> Result<String, ContactValidationError> {
        let name = name.unwrap_or_default();
        let name = name.trim();

        if name.is_empty() {
            return Err(ContactValidationError::NameRequired);
        }

        Ok(name.to_string())
    }

    fn validate_email(email: Option<String>) -> Result<String, ContactValidationError> {
        let email = email.unwrap_or_default();
        let email = email.trim();

        if email.is_empty() {
            return Err(ContactValidationError::EmailRequired);
        }

        // Bare addresses only; `Name <addr>` mailboxes are rejected
        let options = Options::default().without_display_text();
        if EmailAddress::parse_with_options(email, options).is_err() {
            return Err(ContactValidationError::InvalidEmail);
        }

        Ok(email.to_string())
    }

    // Body is stored as typed; only blank input is rejected.
    fn validate_message(message: Option<String>) -> Result<String, ContactValidationError> {
        match message {
            Some(message) if !message.trim().is_empty() => Ok(message),
            _ => Err(ContactValidationError::MessageRequired),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, command: ContactMessageCommand) -> Result<Message, SubmitContactError>;
}
