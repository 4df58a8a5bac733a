//! Anonymous identity generation
//!
//! The identity is an opaque token minted once per browser/session and sent
//! with every request. It is a pseudonymous author key, not a credential.

use uuid::Uuid;

/// Generate a fresh anonymous identity token
#[must_use]
pub fn generate() -> String {
    Uuid::new_v4().to_string()
}
