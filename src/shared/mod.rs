// ============================================================================
// Shared Kernel - Generic Building Blocks for Aggregates
// ============================================================================
//
// Nothing in here knows about customers. Domain modules embed AuditMetadata,
// implement Auditable and report rule violations as ValidationError.
//
// ============================================================================

pub mod audit;
pub mod errors;

pub use audit::{ActorId, AuditMetadata, Auditable, EntityId};
pub use errors::{ValidationError, ViolationKind};
