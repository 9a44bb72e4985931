//! Core types for Vitrine.
//!
//! This module provides type-safe wrappers for the storefront's domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod user;

pub use id::*;
pub use price::{CurrencyCode, Price, PriceError};
pub use product::{Product, ProductPage};
pub use user::{Credentials, RegisterInput, User};
