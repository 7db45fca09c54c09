use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::errors::{Result, ShellError};

/// Column width of every person text field
pub const MAX_FIELD_LEN: usize = 100;

/// Registration payload for `POST /booking/register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingCreateDto {
    pub email: String,
    pub fullname: String,
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub infix: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default)]
    pub location_id: Option<i64>,
    #[serde(default)]
    pub activity_id: Option<i64>,
    #[serde(default)]
    pub package_id: Option<i64>,
}

impl BookingCreateDto {
    pub fn validate(&self) -> Result<()> {
        validate_email(&self.email)?;

        if self.fullname.trim().is_empty() {
            return Err(ShellError::InvalidBooking("fullname must not be empty".into()));
        }
        check_len("fullname", &self.fullname)?;

        for (field, value) in [("first", &self.first), ("infix", &self.infix), ("last", &self.last)] {
            if let Some(value) = value {
                check_len(field, value)?;
            }
        }

        Ok(())
    }
}

fn check_len(field: &str, value: &str) -> Result<()> {
    if value.chars().count() > MAX_FIELD_LEN {
        return Err(ShellError::InvalidBooking(format!(
            "{field} exceeds {MAX_FIELD_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    let invalid = || ShellError::InvalidBooking(format!("invalid email address: {email}"));

    check_len("email", email)?;
    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }

    Ok(())
}

/// Person registered through a booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrmPerson {
    pub id: u64,
    pub email: String,
    pub fullname: String,
    pub first: Option<String>,
    pub infix: Option<String>,
    pub last: Option<String>,
    pub registered_at: DateTime<Utc>,
}

/// Bill owned by a person. Not exposed by any endpoint yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrmPersonBill {
    pub id: u64,
    pub owner: u64,
    /// Decimal amount as text, e.g. "00.00"
    pub price: String,
    pub payment_date: Option<DateTime<Utc>>,
    pub is_paid: bool,
}

impl CrmPersonBill {
    pub fn unpaid(id: u64, owner: u64) -> Self {
        Self {
            id,
            owner,
            price: "00.00".to_string(),
            payment_date: None,
            is_paid: false,
        }
    }
}

/// Response body of a successful registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingCreated {
    pub id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(email: &str, fullname: &str) -> BookingCreateDto {
        BookingCreateDto {
            email: email.to_string(),
            fullname: fullname.to_string(),
            first: None,
            infix: None,
            last: None,
            location_id: None,
            activity_id: None,
            package_id: None,
        }
    }

    #[test]
    fn test_valid_booking() {
        assert!(dto("jan@example.nl", "Jan de Vries").validate().is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        for email in ["", "jan", "@example.nl", "jan@", "jan@example", "jan@@example.nl", "jan @example.nl", "jan@example..nl"] {
            assert!(
                matches!(dto(email, "Jan").validate(), Err(ShellError::InvalidBooking(_))),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_fullname_required() {
        assert!(dto("jan@example.nl", "   ").validate().is_err());
    }

    #[test]
    fn test_field_length_limit() {
        let mut booking = dto("jan@example.nl", "Jan");
        booking.infix = Some("x".repeat(MAX_FIELD_LEN + 1));
        let err = booking.validate().unwrap_err();
        assert_eq!(err, ShellError::InvalidBooking("infix exceeds 100 characters".into()));

        booking.infix = Some("x".repeat(MAX_FIELD_LEN));
        assert!(booking.validate().is_ok());
    }

    #[test]
    fn test_optional_fields_default_when_missing() {
        let parsed: BookingCreateDto =
            serde_json::from_str(r#"{"email":"jan@example.nl","fullname":"Jan"}"#).unwrap();
        assert_eq!(parsed, dto("jan@example.nl", "Jan"));
    }

    #[test]
    fn test_new_bill_is_unpaid() {
        let bill = CrmPersonBill::unpaid(1, 7);
        assert_eq!(bill.owner, 7);
        assert_eq!(bill.price, "00.00");
        assert!(!bill.is_paid);
        assert!(bill.payment_date.is_none());
    }
}
