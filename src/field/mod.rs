// ============================================================================
// Field Module
// Modular-complement encoding for exchanging values with prime-field systems
// ============================================================================

mod felt;

pub use felt::{Felt, HALF_PRIME, PRIME};
