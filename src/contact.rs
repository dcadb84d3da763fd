//! Contact form
//!
//! Transient field state plus validation; a successful submit builds a
//! prefilled Gmail compose URL instead of sending mail. Submission is
//! blocked while any field error remains.

use anyhow::{Context, Result};
use url::Url;

use crate::config::Config;
use crate::forms::{self, FieldErrors, MIN_MESSAGE_LEN};

const GMAIL_COMPOSE: &str = "https://mail.google.com/mail/";

/// Pending contact form state
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Field-level validation; an empty map signals success
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        forms::require(&mut errors, "name", &self.name, "Name");
        forms::require_email(&mut errors, "email", &self.email);
        forms::require(&mut errors, "subject", &self.subject, "Subject");
        forms::require_min_len(&mut errors, "message", &self.message, "Message", MIN_MESSAGE_LEN);
        errors
    }

    /// Build the prefilled compose URL for a validated form
    pub fn compose_url(&self, recipient: &str, owner_first_name: &str) -> Result<Url> {
        let body = format!(
            "Hi {},\n\nFrom: {}\nEmail: {}\n\nMessage:\n{}\n\n---\nSent from your portfolio contact form",
            owner_first_name,
            self.name.trim(),
            self.email.trim(),
            self.message.trim()
        );

        let mut url = Url::parse(GMAIL_COMPOSE).context("Failed to parse compose base URL")?;
        url.query_pairs_mut()
            .append_pair("view", "cm")
            .append_pair("fs", "1")
            .append_pair("to", recipient)
            .append_pair("su", self.subject.trim())
            .append_pair("body", &body);
        Ok(url)
    }
}

/// Validate and submit the contact form, printing the compose URL on
/// success and the per-field errors otherwise
pub fn submit(form: ContactForm) -> Result<()> {
    let errors = form.validate();
    if !errors.is_empty() {
        println!("Please fix the errors and try again:");
        println!("{}", forms::format_errors(&errors));
        return Ok(());
    }

    let config = Config::load()?;
    let owner = crate::profile::owner();
    let url = form.compose_url(&config.contact.email, owner.first_name())?;

    println!("Open this link to send your message from Gmail:");
    println!("{}", url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jamie Doe".to_string(),
            email: "jamie@example.com".to_string(),
            subject: "Project inquiry".to_string(),
            message: "I would like to discuss a project with you.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn test_empty_message_blocks_with_message_error_only() {
        let form = ContactForm {
            message: String::new(),
            ..valid_form()
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("message").unwrap(), "Message is required");
    }

    #[test]
    fn test_short_message_rejected() {
        let form = ContactForm {
            message: "too short".to_string(),
            ..valid_form()
        };
        let errors = form.validate();
        assert!(errors.get("message").unwrap().contains("at least 10 characters"));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let form = ContactForm {
            email: "not-an-email".to_string(),
            ..valid_form()
        };
        let errors = form.validate();
        assert_eq!(errors.get("email").unwrap(), "Please enter a valid email address");
    }

    #[test]
    fn test_compose_url_prefills_fields() {
        let url = valid_form().compose_url("owner@example.com", "Alex").unwrap();
        assert_eq!(url.host_str(), Some("mail.google.com"));

        let pairs: std::collections::HashMap<_, _> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs.get("to").unwrap(), "owner@example.com");
        assert_eq!(pairs.get("su").unwrap(), "Project inquiry");
        assert!(pairs.get("body").unwrap().starts_with("Hi Alex,"));
        assert!(pairs.get("body").unwrap().contains("From: Jamie Doe"));
    }
}
