//! # Accounts
//!
//! Sign-up and passwordless login. Neither flow stores anything: sign-up
//! sends a welcome email, login sends a fresh security code.
//!
//! ## Sign-up
//! ```text
//! sign_up("name@domain.com")
//!      │
//!      ├── bad syntax?  → Ok(false), no email
//!      │
//!      └── send WELCOME_MESSAGE once → Ok(true)
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::collaborators::{EmailSender, SecurityCodes};
use crate::error::ServiceResult;

/// Body of the email sent after a successful sign-up.
pub const WELCOME_MESSAGE: &str = "Welcome aboard!";

// one "@", no whitespace, at least one dot in the domain
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Valid regex pattern"));

/// Syntax check only; deliverability is the mail service's problem.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Registers `email` by sending it a welcome message.
///
/// Returns `Ok(false)` without contacting the mail service when the address
/// is malformed.
pub async fn sign_up(mailer: &dyn EmailSender, email: &str) -> ServiceResult<bool> {
    if !is_valid_email(email) {
        debug!(email, "Rejected sign-up with malformed email");
        return Ok(false);
    }

    mailer.send_email(email, WELCOME_MESSAGE).await?;
    info!(email, "Welcome email sent");
    Ok(true)
}

/// Generates one security code and emails it to `email` as the whole body.
pub async fn login(
    codes: &dyn SecurityCodes,
    mailer: &dyn EmailSender,
    email: &str,
) -> ServiceResult<()> {
    let code = codes.generate_code();
    mailer.send_email(email, &code.to_string()).await?;
    info!(email, "Security code sent");
    Ok(())
}
