//! Mobile navigation menu.

use crate::auth::{AuthSession, SessionState};
use crate::nav::Redirect;

/// A link shown in the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

impl NavLink {
    #[must_use]
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }
}

/// Entries appended after the caller's links on every menu.
#[must_use]
pub fn fixed_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Nossas lojas", "/our-stores"),
        NavLink::new("Sobre", "/about"),
    ]
}

/// Open/closed state and derived content of the mobile menu.
#[derive(Debug, Clone, Default)]
pub struct MenuModel {
    open: bool,
    links: Vec<NavLink>,
}

impl MenuModel {
    /// Closed menu listing `links` followed by the fixed entries.
    #[must_use]
    pub fn new(links: Vec<NavLink>) -> Self {
        Self { open: false, links }
    }

    pub const fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub const fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Every link to render, in order.
    #[must_use]
    pub fn links(&self) -> Vec<NavLink> {
        let mut links = self.links.clone();
        links.extend(fixed_links());
        links
    }

    /// Greeting line at the top of the menu.
    #[must_use]
    pub fn greeting(state: &SessionState) -> String {
        state.user().map_or_else(
            || "Olá! Faça seu login".to_string(),
            |user| format!("Olá! {}!", user.first_name),
        )
    }

    /// Where the greeting links to, whether or not someone is signed in.
    #[must_use]
    pub const fn greeting_target() -> Redirect {
        Redirect::SignIn
    }

    #[must_use]
    pub const fn show_sign_out(state: &SessionState) -> bool {
        state.is_authenticated()
    }

    /// Sign out locally, close the menu, and send the shopper home.
    pub async fn sign_out(&mut self, session: &AuthSession) -> Redirect {
        session.sign_out().await;
        self.close();
        Redirect::Home
    }
}
