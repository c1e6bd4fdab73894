// ============================================================================
// Persistence Adapters
// ============================================================================
//
// Implementations of the domain repository ports. The domain layer only
// knows the traits; adapters are wired in by the binary (or by tests).
//
// ============================================================================

pub mod in_memory;

pub use in_memory::InMemoryCustomerRepository;
