// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod fixed_math;

pub use fixed_math::{FieldMath, FixedMath, NativeMath};
