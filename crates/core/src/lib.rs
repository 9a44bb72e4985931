//! Vitrine Core - Shared storefront types.
//!
//! This crate provides the domain types used across Vitrine components:
//! - `storefront` - Client library for the storefront backend (session, products, cart)
//! - `cli` - Command-line front end driving the storefront library
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and lets the wire shapes be tested in isolation.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, products, users, and login credentials

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
