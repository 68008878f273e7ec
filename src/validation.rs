//! Client-side form validation

use thiserror::Error;

use crate::models::{NewTicket, TicketPriority, TicketStatus};

pub const MIN_TITLE_CHARS: usize = 3;
pub const MIN_DESCRIPTION_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Title must be at least 3 characters")]
    TitleTooShort,
    #[error("Description is required")]
    DescriptionRequired,
    #[error("Description must be at least 10 characters")]
    DescriptionTooShort,
    #[error("Username and password are required")]
    CredentialsRequired,
}

impl ValidationError {
    /// Which form field the message belongs next to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::TitleRequired | ValidationError::TitleTooShort => "title",
            ValidationError::DescriptionRequired | ValidationError::DescriptionTooShort => "description",
            ValidationError::CredentialsRequired => "credentials",
        }
    }
}

/// Validate the create form and build the request body.
/// Title and description are trimmed before checking and sending.
pub fn validate_new_ticket(
    title: &str,
    description: &str,
    status: TicketStatus,
    priority: TicketPriority,
) -> Result<NewTicket, ValidationError> {
    let title = title.trim();
    let description = description.trim();

    if title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if title.chars().count() < MIN_TITLE_CHARS {
        return Err(ValidationError::TitleTooShort);
    }
    if description.is_empty() {
        return Err(ValidationError::DescriptionRequired);
    }
    if description.chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(ValidationError::DescriptionTooShort);
    }

    Ok(NewTicket {
        title: title.to_string(),
        description: description.to_string(),
        status,
        priority,
    })
}

/// Login and register both need a non-blank username and a password
pub fn validate_credentials(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(ValidationError::CredentialsRequired);
    }
    Ok(())
}
