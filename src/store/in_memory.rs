use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::customer::{
    Customer, CustomerRepository, CustomerStatistics, CustomerStatus, IdentificationType,
    RepositoryError,
};
use crate::shared::{Auditable, EntityId};

// ============================================================================
// In-Memory Customer Repository
// ============================================================================
//
// Process-local adapter for the CustomerRepository port.
//
// Responsibilities:
// 1. Assign a fresh EntityId to customers saved for the first time
// 2. Compare-and-swap on version for customers that already exist
// 3. Serve natural-key, email, status and statistics queries
//
// ============================================================================

#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<EntityId, Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filter<F>(&self, predicate: F) -> Vec<Customer>
    where
        F: Fn(&Customer) -> bool,
    {
        let customers = self.customers.read().await;
        let mut matches: Vec<Customer> = customers.values().filter(|c| predicate(c)).cloned().collect();
        matches.sort_by_key(|c| c.created_at());
        matches
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn save(&self, customer: Customer, expected_version: i64) -> Result<Customer, RepositoryError> {
        let mut customers = self.customers.write().await;

        let Some(id) = customer.id() else {
            let id = EntityId::new();
            let customer = customer.with_id(id)?;
            customers.insert(id, customer.clone());

            tracing::debug!(customer_id = %id, "Stored new customer");
            return Ok(customer);
        };

        let current_version = customers
            .get(&id)
            .map(|stored| stored.version())
            .ok_or(RepositoryError::NotFound(id))?;

        if current_version != expected_version {
            tracing::warn!(
                customer_id = %id,
                expected_version = expected_version,
                current_version = current_version,
                "Concurrency conflict on save"
            );
            return Err(RepositoryError::Conflict {
                id,
                expected: expected_version,
                actual: current_version,
            });
        }

        customers.insert(id, customer.clone());

        tracing::debug!(
            customer_id = %id,
            new_version = customer.version(),
            "Stored customer"
        );

        Ok(customer)
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Customer>, RepositoryError> {
        Ok(self.customers.read().await.get(&id).cloned())
    }

    async fn find_by_identification(
        &self,
        identification: &str,
        identification_type: IdentificationType,
    ) -> Result<Option<Customer>, RepositoryError> {
        Ok(self
            .customers
            .read()
            .await
            .values()
            .find(|c| c.identification() == identification && c.identification_type() == identification_type)
            .cloned())
    }

    async fn find_by_status(&self, status: CustomerStatus) -> Result<Vec<Customer>, RepositoryError> {
        Ok(self.filter(|c| c.status() == status).await)
    }

    async fn find_active(&self) -> Result<Vec<Customer>, RepositoryError> {
        Ok(self.filter(Customer::can_transact).await)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        Ok(self
            .customers
            .read()
            .await
            .values()
            .any(|c| c.contact().primary_email() == email))
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.customers.read().await.len() as u64)
    }

    async fn statistics(&self) -> Result<CustomerStatistics, RepositoryError> {
        let customers = self.customers.read().await;
        let mut stats = CustomerStatistics::new();

        for customer in customers.values() {
            stats.total += 1;
            *stats.by_status.entry(customer.status()).or_insert(0) += 1;
            *stats.by_type.entry(customer.customer_type()).or_insert(0) += 1;
        }

        Ok(stats)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
