//! # Validation Module
//!
//! Input validation for cart amounts.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: UI                                                           │
//! │  └── Quantity stepper never goes below 1                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Raw signed input ──► u32 amount ≥ 1, or ValidationError           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Blob decoding (rocket-store)                                 │
//! │  └── Persisted lines re-checked when the cart is loaded                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a requested line amount coming from the UI.
///
/// ## Rules
/// - Must be at least 1
/// - Must fit in `u32`
///
/// ## Example
/// ```rust
/// use rocket_core::validation::validate_amount;
///
/// assert_eq!(validate_amount(4).unwrap(), 4);
/// assert!(validate_amount(0).is_err());
/// assert!(validate_amount(-2).is_err());
/// ```
pub fn validate_amount(amount: i64) -> ValidationResult<u32> {
    if amount < 1 {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    u32::try_from(amount).map_err(|_| ValidationError::OutOfRange {
        field: "amount".to_string(),
        min: 1,
        max: i64::from(u32::MAX),
    })
}
