// ============================================================================
// Customer Domain - Business Logic for the Customer Aggregate
// ============================================================================
//
// This module contains ALL Customer-specific code:
// - Value objects (IdentificationType, CustomerType, CustomerStatus)
// - Contact information (ContactDraft, ContactInfo)
// - Aggregate (Customer with its lifecycle and validation rules)
// - Commands (RegisterCustomer, CustomerCommand)
// - Repository port (CustomerRepository)
// - Errors (RepositoryError, CustomerServiceError)
// - Command Handler (CustomerCommandHandler)
// - Read model (CustomerView)
//
// Persistence adapters live outside the domain, in `crate::store`.
//
// ============================================================================

pub mod value_objects;
pub mod contact;
pub mod aggregate;
pub mod commands;
pub mod errors;
pub mod repository;
pub mod command_handler;
pub mod view;

// Re-export for convenience
pub use value_objects::*;
pub use contact::{ContactDraft, ContactInfo};
pub use aggregate::*;
pub use commands::*;
pub use errors::*;
pub use repository::*;
pub use command_handler::*;
pub use view::*;
