//! Core domain concepts shared across all subdomains.
//!
//! - [`name::PersonName`]: a validated Korean personal name
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod name;
