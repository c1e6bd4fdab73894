use chrono::NaiveDate;
use serde::Deserialize;

use super::contact::ContactDraft;
use super::value_objects::{CustomerType, IdentificationType};

// ============================================================================
// Customer Domain Commands
// ============================================================================
//
// Commands are the untyped edge of the domain: they arrive from callers with
// optional fields, and the handler turns missing references into
// ValidationErrors before touching the aggregate.
//
// ============================================================================

/// Input for registering a new customer
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterCustomer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub identification: Option<String>,
    pub identification_type: Option<IdentificationType>,
    pub customer_type: Option<CustomerType>,
    pub contact: ContactDraft,
    pub birth_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Commands against an existing customer
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CustomerCommand {
    UpdatePersonalInfo {
        first_name: String,
        last_name: String,
    },
    UpdateContact {
        contact: Option<ContactDraft>,
    },
    ChangeCustomerType {
        new_type: Option<CustomerType>,
    },
    Suspend {
        reason: Option<String>,
    },
    Reactivate,
    SoftDelete,
    Activate,
    Deactivate,
}

impl CustomerCommand {
    pub fn name(&self) -> &'static str {
        match self {
            CustomerCommand::UpdatePersonalInfo { .. } => "UpdatePersonalInfo",
            CustomerCommand::UpdateContact { .. } => "UpdateContact",
            CustomerCommand::ChangeCustomerType { .. } => "ChangeCustomerType",
            CustomerCommand::Suspend { .. } => "Suspend",
            CustomerCommand::Reactivate => "Reactivate",
            CustomerCommand::SoftDelete => "SoftDelete",
            CustomerCommand::Activate => "Activate",
            CustomerCommand::Deactivate => "Deactivate",
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
