//! Admin bootstrapping.
//!
//! Only admins may change roles through the API, so the first admin has to
//! be promoted out of band.

use anyhow::{Result, bail};
use innovation_db::UserRepository;
use innovation_models::UserRole;

/// Grant the admin role to the registered user with `email`.
pub async fn promote_admin(users: &dyn UserRepository, email: &str) -> Result<()> {
    let email = email.trim();
    if email.is_empty() {
        bail!("Email must not be empty");
    }

    if users.update_role(email, &UserRole::Admin).await? == 0 {
        bail!("No user registered with email '{}'", email);
    }

    Ok(())
}
