use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::shared::{Auditable, EntityId};
use super::aggregate::Customer;
use super::value_objects::{CustomerStatus, CustomerType, IdentificationType};

// ============================================================================
// Customer Read Model
// ============================================================================
//
// Flat, serializable projection of a Customer for callers that only read.
// Carries the derived values (age, adulthood, transact flag, summaries) so
// consumers never recompute business rules.
//
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CustomerView {
    pub id: Option<EntityId>,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub identification: String,
    pub identification_type: IdentificationType,
    pub identification_type_description: &'static str,
    pub customer_type: CustomerType,
    pub customer_type_description: &'static str,
    pub status: CustomerStatus,
    pub status_description: &'static str,
    pub birth_date: Option<NaiveDate>,
    pub age: i32,
    pub is_adult: bool,
    pub can_transact: bool,
    pub primary_phone: String,
    pub primary_email: String,
    pub full_address: String,
    pub contact_summary: String,
    pub has_secondary_contact: bool,
    pub has_secondary_email: bool,
    pub notes: Option<String>,
    pub active: bool,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

impl From<&Customer> for CustomerView {
    fn from(customer: &Customer) -> Self {
        let contact = customer.contact();

        Self {
            id: customer.id(),
            first_name: customer.first_name().to_string(),
            last_name: customer.last_name().to_string(),
            full_name: customer.full_name(),
            identification: customer.identification().to_string(),
            identification_type: customer.identification_type(),
            identification_type_description: customer.identification_type().description(),
            customer_type: customer.customer_type(),
            customer_type_description: customer.customer_type().description(),
            status: customer.status(),
            status_description: customer.status().description(),
            birth_date: customer.birth_date(),
            age: customer.age(),
            is_adult: customer.is_adult(),
            can_transact: customer.can_transact(),
            primary_phone: contact.primary_phone().to_string(),
            primary_email: contact.primary_email().to_string(),
            full_address: contact.full_address(),
            contact_summary: contact.contact_summary(),
            has_secondary_contact: contact.has_secondary_contact(),
            has_secondary_email: contact.has_secondary_email(),
            notes: customer.notes().map(str::to_string),
            active: customer.is_active(),
            version: customer.version(),
            created_at: customer.created_at(),
            updated_at: customer.updated_at(),
            created_by: customer.created_by().map(|a| a.to_string()),
            updated_by: customer.updated_by().map(|a| a.to_string()),
        }
    }
}

impl From<Customer> for CustomerView {
    fn from(customer: Customer) -> Self {
        Self::from(&customer)
    }
}
