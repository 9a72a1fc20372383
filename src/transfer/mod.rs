//! Account-to-account transfers
//!
//! The core of the system: a validator with a fixed check order and an
//! orchestrator that coordinates lookup, validation, the atomic two-leg
//! balance adjustment, and notification of both parties.
//!
//! # State Machine
//!
//! ```text
//! Received → Validating → Rejected                    (terminal)
//!                ↓
//!            Adjusting → AdjustFailed                 (terminal)
//!                ↓
//!            Notifying → Completed                    (terminal)
//! ```
//!
//! # Safety Invariants
//!
//! 1. **Validate-Before-Mutate**: No store mutation until validation passed
//! 2. **Notify-After-Apply**: Notifications fire only for an applied batch
//! 3. **Conservation**: The two legs of a batch always sum to zero

pub mod error;
pub mod service;
pub mod types;
pub mod validator;

// Re-exports for convenience
pub use error::TransferError;
pub use service::TransferService;
pub use types::{TransferReceipt, TransferRequest};
