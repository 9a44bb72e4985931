//! Vitrine storefront client.
//!
//! Client-side contracts of the Vitrine storefront:
//!
//! - [`auth`]: cookie-backed session holder and Google sign-in callbacks
//! - [`products`]: paginated product listing
//! - [`cart`]: in-memory cart
//! - [`menu`]: mobile navigation menu model
//!
//! [`Storefront`] bundles them behind one handle built from
//! [`config::StorefrontConfig`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod cart;
pub mod config;
pub mod error;
mod http;
pub mod menu;
pub mod nav;
pub mod products;
pub mod state;

pub use auth::{AuthError, AuthSession, SessionState};
pub use cart::{Cart, CartError};
pub use config::StorefrontConfig;
pub use error::StorefrontError;
pub use nav::Redirect;
pub use products::{FetchError, ProductClient, ProductQuery};
pub use state::Storefront;
