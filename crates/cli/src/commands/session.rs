//! Session commands: profile, login, Google sign-in, register.
//!
//! The cookie jar lives only as long as the process, so each command starts
//! from whatever session the backend restores on bootstrap.

use std::io::Write;

use secrecy::SecretString;
use vitrine_core::{Credentials, RegisterInput};
use vitrine_storefront::auth::google::CredentialResponse;
use vitrine_storefront::menu::MenuModel;
use vitrine_storefront::{Storefront, StorefrontConfig};

use super::CommandError;

/// Environment variable holding the account secret for `login`/`register`.
const SECRET_ENV: &str = "VITRINE_SECRET";

fn read_secret() -> Result<String, CommandError> {
    std::env::var(SECRET_ENV)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(CommandError::MissingEnvVar(SECRET_ENV))
}

async fn write_greeting(storefront: &Storefront) -> Result<(), CommandError> {
    let state = storefront.session().state().await;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", MenuModel::greeting(&state))?;
    Ok(())
}

/// Restore the session and print the greeting for it.
pub async fn profile(config: StorefrontConfig) -> Result<(), CommandError> {
    let storefront = Storefront::start(config).await?;
    write_greeting(&storefront).await
}

/// Sign in with an identifier and the secret from the environment.
pub async fn login(config: StorefrontConfig, identifier: &str) -> Result<(), CommandError> {
    let credentials = Credentials::new(identifier, read_secret()?);
    let storefront = Storefront::new(config)?;

    storefront.session().sign_in(&credentials).await?;
    write_greeting(&storefront).await
}

/// Run the Google success callback with `credential`.
pub async fn google(config: StorefrontConfig, credential: &str) -> Result<(), CommandError> {
    let storefront = Storefront::new(config)?;
    let mut flow = storefront.google_sign_in();

    let redirect = flow
        .handle_success(CredentialResponse::with_credential(credential))
        .await;

    match redirect {
        Some(target) => {
            tracing::info!(redirect = %target, "Google sign-in complete");
            write_greeting(&storefront).await
        }
        None => Err(CommandError::Failed(
            flow.error().unwrap_or_default().to_string(),
        )),
    }
}

/// Submit a registration. Accepted and ignored until the backend supports it.
pub async fn register(
    config: StorefrontConfig,
    first_name: String,
    last_name: String,
    email: String,
) -> Result<(), CommandError> {
    let input = RegisterInput {
        first_name,
        last_name,
        email,
        password: SecretString::from(read_secret()?),
    };
    let storefront = Storefront::new(config)?;
    storefront.session().register(&input).await?;

    let mut out = std::io::stdout().lock();
    writeln!(out, "Cadastro ainda não disponível.")?;
    Ok(())
}
