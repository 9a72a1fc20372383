//! Core types used throughout the system
//!
//! Fundamental aliases shared by all modules. They provide semantic meaning
//! and enable future type evolution.

/// Account identifier - globally unique, immutable after creation.
///
/// # Constraints:
/// - **Immutable**: Once assigned, NEVER changes
/// - **Opaque**: Callers pick the identifier; the store only enforces
///   uniqueness
///
/// # Usage:
/// - Primary key for accounts
/// - Used in HashMap for O(1) account lookup
pub type AccountId = String;
