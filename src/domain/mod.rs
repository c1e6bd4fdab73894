// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each aggregate has its own subdirectory with:
// - Value objects
// - Commands
// - Errors
// - Aggregate implementation
// - Repository port
// - Command handler
//
// Generic audit and validation building blocks live in `crate::shared`.
//
// ============================================================================

pub mod customer;
