//! Contact documents

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::{require_text, SharedError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_color: Option<String>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
}

/// Body of `POST /api/contacts` and `PUT /api/contacts/:id`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub favorite_color: Option<String>,
    pub birthday: Option<NaiveDate>,
}

impl ContactInput {
    pub fn into_contact(self, id: Uuid) -> Result<Contact, SharedError> {
        let (Some(first_name), Some(last_name), Some(email)) =
            (self.first_name, self.last_name, self.email)
        else {
            return Err(SharedError::validation("contact", "Missing required fields"));
        };

        Ok(Contact {
            id,
            first_name: require_text("firstName", Some(first_name))?,
            last_name: require_text("lastName", Some(last_name))?,
            email: require_email(email)?,
            favorite_color: self.favorite_color,
            birthday: self.birthday,
        })
    }

    pub fn apply_to(self, contact: &mut Contact) -> Result<(), SharedError> {
        if let Some(first_name) = self.first_name {
            contact.first_name = require_text("firstName", Some(first_name))?;
        }
        if let Some(last_name) = self.last_name {
            contact.last_name = require_text("lastName", Some(last_name))?;
        }
        if let Some(email) = self.email {
            contact.email = require_email(email)?;
        }
        if let Some(color) = self.favorite_color {
            contact.favorite_color = Some(color);
        }
        if let Some(birthday) = self.birthday {
            contact.birthday = Some(birthday);
        }
        Ok(())
    }
}

// Basic shape check only
fn require_email(email: String) -> Result<String, SharedError> {
    let email = require_text("email", Some(email))?;
    if !email.contains('@') {
        return Err(SharedError::validation("email", "Invalid email format"));
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_reports_missing_required_fields() {
        let input = ContactInput {
            first_name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            ..ContactInput::default()
        };
        let err = input.into_contact(Uuid::new_v4()).unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields");
    }

    #[test]
    fn test_birthday_parses_from_iso_date() {
        let input: ContactInput = serde_json::from_value(serde_json::json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "birthday": "1815-12-10"
        }))
        .unwrap();
        let contact = input.into_contact(Uuid::new_v4()).unwrap();
        assert_eq!(contact.birthday, NaiveDate::from_ymd_opt(1815, 12, 10));
    }

    #[test]
    fn test_email_without_at_sign_is_rejected() {
        let input = ContactInput {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            email: Some("not-an-email".into()),
            ..ContactInput::default()
        };
        assert!(input.into_contact(Uuid::new_v4()).is_err());
    }
}
