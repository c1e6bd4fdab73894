use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;

use crate::shared::EntityId;
use super::aggregate::Customer;
use super::errors::RepositoryError;
use super::value_objects::{CustomerStatus, CustomerType, IdentificationType};

// ============================================================================
// Customer Repository Port
// ============================================================================
//
// Contract for the persistence collaborator. The aggregate never calls it;
// the command handler does.
//
// Responsibilities:
// 1. Assign identity to new customers on save
// 2. Optimistic concurrency: reject a save whose expected version does not
//    match the stored one
// 3. Natural-key and email lookups used for uniqueness checks
//
// ============================================================================

/// Aggregated counts over every stored customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerStatistics {
    pub total: u64,
    pub by_status: HashMap<CustomerStatus, u64>,
    pub by_type: HashMap<CustomerType, u64>,
}

impl Default for CustomerStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerStatistics {
    /// Statistics with a zero entry for every status and customer type.
    pub fn new() -> Self {
        Self {
            total: 0,
            by_status: CustomerStatus::ALL.iter().map(|s| (*s, 0)).collect(),
            by_type: CustomerType::ALL.iter().map(|t| (*t, 0)).collect(),
        }
    }

    pub fn with_status(&self, status: CustomerStatus) -> u64 {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    pub fn with_type(&self, customer_type: CustomerType) -> u64 {
        self.by_type.get(&customer_type).copied().unwrap_or(0)
    }
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Persist a customer and return the stored copy.
    ///
    /// New customers (no identity) get one assigned here and
    /// `expected_version` is ignored. For existing customers the stored
    /// version must equal `expected_version`.
    async fn save(&self, customer: Customer, expected_version: i64) -> Result<Customer, RepositoryError>;

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Customer>, RepositoryError>;

    async fn find_by_identification(
        &self,
        identification: &str,
        identification_type: IdentificationType,
    ) -> Result<Option<Customer>, RepositoryError>;

    async fn find_by_status(&self, status: CustomerStatus) -> Result<Vec<Customer>, RepositoryError>;

    /// Customers that can transact: status Active and the active flag set.
    async fn find_active(&self) -> Result<Vec<Customer>, RepositoryError>;

    async fn exists_by_identification(
        &self,
        identification: &str,
        identification_type: IdentificationType,
    ) -> Result<bool, RepositoryError> {
        Ok(self
            .find_by_identification(identification, identification_type)
            .await?
            .is_some())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError>;

    async fn count(&self) -> Result<u64, RepositoryError>;

    async fn statistics(&self) -> Result<CustomerStatistics, RepositoryError>;
}
