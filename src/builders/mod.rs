//! # Builders
//!
//! Configuration types for key derivation.
//!
//! - [`pbkdf2_params`] - iteration count, key length and PRF with defaults
//!
//! Setters follow the `with_*` fluent style and every field has a documented
//! default, so callers override only what they need.

pub mod pbkdf2_params;
