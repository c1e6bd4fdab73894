use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::shared::ValidationError;

// ============================================================================
// Contact Value Object
// ============================================================================
//
// ContactInfo is immutable and can only be obtained from ContactDraft::build,
// which runs the whole validation suite once (fail-fast, fixed order):
//
//   1. primary phone   - required, phone pattern
//   2. primary email   - required, email pattern
//   3. secondary phone - optional, phone pattern when non-blank
//   4. secondary email - optional, email pattern when non-blank
//   5. address         - required
//
// Equality and hashing only look at (primary phone, primary email, address).
//
// ============================================================================

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+]?[0-9]{8,15}$").expect("valid phone regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Unvalidated contact fields, collected before a single `build` call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    pub primary_phone: Option<String>,
    pub secondary_phone: Option<String>,
    pub primary_email: Option<String>,
    pub secondary_email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl ContactDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary_phone(mut self, phone: impl Into<String>) -> Self {
        self.primary_phone = Some(phone.into());
        self
    }

    pub fn secondary_phone(mut self, phone: impl Into<String>) -> Self {
        self.secondary_phone = Some(phone.into());
        self
    }

    pub fn primary_email(mut self, email: impl Into<String>) -> Self {
        self.primary_email = Some(email.into());
        self
    }

    pub fn secondary_email(mut self, email: impl Into<String>) -> Self {
        self.secondary_email = Some(email.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Validate every field and produce the immutable value.
    pub fn build(self) -> Result<ContactInfo, ValidationError> {
        let primary_phone = match self.primary_phone {
            Some(phone) if !phone.trim().is_empty() => phone,
            _ => return Err(ValidationError::required("primary_phone", "Primary phone is required")),
        };
        if !is_valid_phone(&primary_phone) {
            return Err(ValidationError::invalid_format(
                "primary_phone",
                "Invalid primary phone format",
            ));
        }

        let primary_email = match self.primary_email {
            Some(email) if !email.trim().is_empty() => email,
            _ => return Err(ValidationError::required("primary_email", "Primary email is required")),
        };
        if !is_valid_email(&primary_email) {
            return Err(ValidationError::invalid_format(
                "primary_email",
                "Invalid primary email format",
            ));
        }

        if let Some(phone) = self.secondary_phone.as_deref() {
            if !phone.trim().is_empty() && !is_valid_phone(phone) {
                return Err(ValidationError::invalid_format(
                    "secondary_phone",
                    "Invalid secondary phone format",
                ));
            }
        }

        if let Some(email) = self.secondary_email.as_deref() {
            if !email.trim().is_empty() && !is_valid_email(email) {
                return Err(ValidationError::invalid_format(
                    "secondary_email",
                    "Invalid secondary email format",
                ));
            }
        }

        let address = match self.address {
            Some(address) if !address.trim().is_empty() => address,
            _ => return Err(ValidationError::required("address", "Address is required")),
        };

        Ok(ContactInfo {
            primary_phone,
            secondary_phone: self.secondary_phone,
            primary_email,
            secondary_email: self.secondary_email,
            address,
            city: self.city,
            postal_code: self.postal_code,
            country: self.country,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ContactDraft")]
pub struct ContactInfo {
    primary_phone: String,
    secondary_phone: Option<String>,
    primary_email: String,
    secondary_email: Option<String>,
    address: String,
    city: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
}

impl ContactInfo {
    pub fn builder() -> ContactDraft {
        ContactDraft::new()
    }

    pub fn primary_phone(&self) -> &str {
        &self.primary_phone
    }

    pub fn secondary_phone(&self) -> Option<&str> {
        self.secondary_phone.as_deref()
    }

    pub fn primary_email(&self) -> &str {
        &self.primary_email
    }

    pub fn secondary_email(&self) -> Option<&str> {
        self.secondary_email.as_deref()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn has_secondary_contact(&self) -> bool {
        !is_blank(self.secondary_phone())
    }

    pub fn has_secondary_email(&self) -> bool {
        !is_blank(self.secondary_email())
    }

    /// `address[, city][ postal_code][, country]`, skipping blank parts.
    pub fn full_address(&self) -> String {
        let mut full = self.address.clone();

        if let Some(city) = self.city().filter(|c| !c.trim().is_empty()) {
            full.push_str(", ");
            full.push_str(city);
        }
        if let Some(postal_code) = self.postal_code().filter(|p| !p.trim().is_empty()) {
            full.push(' ');
            full.push_str(postal_code);
        }
        if let Some(country) = self.country().filter(|c| !c.trim().is_empty()) {
            full.push_str(", ");
            full.push_str(country);
        }

        full
    }

    /// One-line summary of the phone and email channels, e.g.
    /// `Tel: +595981234567 / 0981222333 | Email: ana@example.com`.
    pub fn contact_summary(&self) -> String {
        let mut summary = format!("Tel: {}", self.primary_phone);
        if let Some(phone) = self.secondary_phone().filter(|_| self.has_secondary_contact()) {
            summary.push_str(" / ");
            summary.push_str(phone);
        }
        summary.push_str(" | Email: ");
        summary.push_str(&self.primary_email);
        if let Some(email) = self.secondary_email().filter(|_| self.has_secondary_email()) {
            summary.push_str(" / ");
            summary.push_str(email);
        }
        summary
    }

    /// Copy the fields back into a draft, for building an edited contact.
    pub fn to_draft(&self) -> ContactDraft {
        ContactDraft {
            primary_phone: Some(self.primary_phone.clone()),
            secondary_phone: self.secondary_phone.clone(),
            primary_email: Some(self.primary_email.clone()),
            secondary_email: self.secondary_email.clone(),
            address: Some(self.address.clone()),
            city: self.city.clone(),
            postal_code: self.postal_code.clone(),
            country: self.country.clone(),
        }
    }
}

impl TryFrom<ContactDraft> for ContactInfo {
    type Error = ValidationError;

    fn try_from(draft: ContactDraft) -> Result<Self, Self::Error> {
        draft.build()
    }
}

impl PartialEq for ContactInfo {
    fn eq(&self, other: &Self) -> bool {
        self.primary_phone == other.primary_phone
            && self.primary_email == other.primary_email
            && self.address == other.address
    }
}

impl Eq for ContactInfo {}

impl Hash for ContactInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.primary_phone.hash(state);
        self.primary_email.hash(state);
        self.address.hash(state);
    }
}

impl fmt::Display for ContactInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ContactInfo{{phone='{}', email='{}', address='{}'}}",
            self.primary_phone, self.primary_email, self.address
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
