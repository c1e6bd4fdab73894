// ============================================================================
// Customer Service
// ============================================================================
//
// Layers:
// - shared:  audit metadata, identities and validation errors
// - domain:  the Customer aggregate, its commands, handler and repository port
// - store:   repository adapters
// - config:  service configuration (TOML file + environment)
//
// ============================================================================

pub mod shared;
pub mod domain;
pub mod store;
pub mod config;
