use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Customer Value Objects
// ============================================================================

/// Kind of document backing the customer's identification number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentificationType {
    NationalId,
    Passport,
    TaxId,
    ForeignResidentId,
}

impl IdentificationType {
    pub const fn description(&self) -> &'static str {
        match self {
            IdentificationType::NationalId => "National Identity Card",
            IdentificationType::Passport => "Passport",
            IdentificationType::TaxId => "Tax ID",
            IdentificationType::ForeignResidentId => "Foreign Resident ID",
        }
    }
}

impl fmt::Display for IdentificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Customer segment used for tariffs and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerType {
    Residential,
    Commercial,
    Industrial,
    Governmental,
}

impl CustomerType {
    pub const ALL: [CustomerType; 4] = [
        CustomerType::Residential,
        CustomerType::Commercial,
        CustomerType::Industrial,
        CustomerType::Governmental,
    ];

    pub const fn description(&self) -> &'static str {
        match self {
            CustomerType::Residential => "Residential Customer",
            CustomerType::Commercial => "Commercial Customer",
            CustomerType::Industrial => "Industrial Customer",
            CustomerType::Governmental => "Governmental Customer",
        }
    }
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Customer status in the system
///
/// Active <-> Suspended, and any state -> Deleted (soft delete).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerStatus {
    Active,
    Suspended,
    Deleted,
}

impl CustomerStatus {
    pub const ALL: [CustomerStatus; 3] = [
        CustomerStatus::Active,
        CustomerStatus::Suspended,
        CustomerStatus::Deleted,
    ];

    pub const fn description(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "Active Customer",
            CustomerStatus::Suspended => "Suspended Customer",
            CustomerStatus::Deleted => "Deleted Customer",
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
