use std::sync::Arc;
use tokio::sync::Mutex;

use crate::shared::{ActorId, Auditable, EntityId, ValidationError};
use super::aggregate::{Customer, CustomerDraft};
use super::commands::{CustomerCommand, RegisterCustomer};
use super::errors::{CustomerServiceError, RepositoryError};
use super::repository::CustomerRepository;

// ============================================================================
// Customer Command Handler
// ============================================================================
//
// Orchestrates: Command → uniqueness checks → Aggregate → Repository
//
// Uniqueness of the natural key and of the primary email is checked here,
// against the repository, before the aggregate is built. The aggregate
// assumes both have already been established. Registrations are serialized
// so the check and the save happen as one step.
//
// ============================================================================

pub struct CustomerCommandHandler {
    repository: Arc<dyn CustomerRepository>,
    registration: Mutex<()>,
}

impl CustomerCommandHandler {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            repository,
            registration: Mutex::new(()),
        }
    }

    /// Register a new customer and persist it with an assigned identity.
    pub async fn register(
        &self,
        command: RegisterCustomer,
        actor: &ActorId,
    ) -> Result<Customer, CustomerServiceError> {
        tracing::info!(
            identification = command.identification.as_deref().unwrap_or_default(),
            actor = %actor,
            "Registering customer"
        );

        let _registration = self.registration.lock().await;

        match self.build_new_customer(command).await {
            Ok(customer) => {
                let customer = customer.mark_created(actor);
                let saved = self.repository.save(customer, 0).await?;

                tracing::info!(
                    customer_id = ?saved.id(),
                    customer_type = ?saved.customer_type(),
                    "✅ Customer registered"
                );
                Ok(saved)
            }
            Err(e) => {
                if let Some(validation) = e.as_validation() {
                    tracing::warn!(
                        code = validation.code(),
                        field = validation.field().unwrap_or_default(),
                        error = %validation,
                        "Customer registration rejected"
                    );
                }
                Err(e)
            }
        }
    }

    async fn build_new_customer(&self, command: RegisterCustomer) -> Result<Customer, CustomerServiceError> {
        if let (Some(identification), Some(identification_type)) =
            (command.identification.as_deref(), command.identification_type)
        {
            if self
                .repository
                .exists_by_identification(identification, identification_type)
                .await?
            {
                return Err(ValidationError::duplicate(
                    "identification",
                    format!(
                        "A customer with identification {} of type {} already exists",
                        identification,
                        identification_type.description()
                    ),
                )
                .into());
            }
        }

        if let Some(email) = command.contact.primary_email.as_deref() {
            if self.repository.exists_by_email(email).await? {
                return Err(ValidationError::duplicate(
                    "primary_email",
                    format!("A customer with email {} already exists", email),
                )
                .into());
            }
        }

        let contact = command.contact.build()?;

        let draft = CustomerDraft {
            first_name: command.first_name,
            last_name: command.last_name,
            identification: command.identification,
            identification_type: command.identification_type,
            customer_type: command.customer_type,
            contact: Some(contact),
            birth_date: command.birth_date,
            notes: command.notes,
        };

        Ok(draft.build()?)
    }

    /// Load a customer, apply a command and persist the result with an
    /// optimistic version check.
    pub async fn handle(
        &self,
        customer_id: EntityId,
        command: CustomerCommand,
        actor: &ActorId,
    ) -> Result<Customer, CustomerServiceError> {
        let current = self
            .repository
            .find_by_id(customer_id)
            .await?
            .ok_or(RepositoryError::NotFound(customer_id))?;
        let expected_version = current.version();
        let command_name = command.name();

        let next = match Self::apply(&current, command, actor) {
            Ok(next) => next,
            Err(e) => {
                tracing::warn!(
                    customer_id = %customer_id,
                    command = command_name,
                    code = e.code(),
                    error = %e,
                    "Command rejected"
                );
                return Err(e.into());
            }
        };

        let saved = self.repository.save(next, expected_version).await?;

        tracing::info!(
            customer_id = %customer_id,
            command = command_name,
            status = ?saved.status(),
            new_version = saved.version(),
            "Command applied"
        );

        Ok(saved)
    }

    /// Pure dispatch from command to behavioral operation.
    pub fn apply(
        customer: &Customer,
        command: CustomerCommand,
        actor: &ActorId,
    ) -> Result<Customer, ValidationError> {
        match command {
            CustomerCommand::UpdatePersonalInfo { first_name, last_name } => {
                customer.update_personal_info(&first_name, &last_name, actor)
            }
            CustomerCommand::UpdateContact { contact } => {
                let draft = contact.ok_or_else(|| {
                    ValidationError::missing_reference("contact", "Contact information is required")
                })?;
                customer.update_contact(draft.build()?, actor)
            }
            CustomerCommand::ChangeCustomerType { new_type } => {
                let new_type = new_type.ok_or_else(|| {
                    ValidationError::missing_reference("customer_type", "New customer type cannot be null")
                })?;
                customer.change_customer_type(new_type, actor)
            }
            CustomerCommand::Suspend { reason } => customer.suspend(reason.as_deref(), actor),
            CustomerCommand::Reactivate => customer.reactivate(actor),
            CustomerCommand::SoftDelete => Ok(customer.soft_delete(actor)),
            CustomerCommand::Activate => Ok(customer.activate()),
            CustomerCommand::Deactivate => Ok(customer.deactivate()),
        }
    }

    pub async fn find(&self, customer_id: EntityId) -> Result<Customer, CustomerServiceError> {
        Ok(self
            .repository
            .find_by_id(customer_id)
            .await?
            .ok_or(RepositoryError::NotFound(customer_id))?)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
