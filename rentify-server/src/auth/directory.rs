//! User store seam for the role gate

use async_trait::async_trait;

use crate::db::models::User;
use crate::db::repository::RepoResult;

/// Read-only view of the user store
///
/// The role gate asks this on every request; roles are never cached in
/// tokens, so a role change takes effect on the next request.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Current stored record for `email`, or `None` if no such user
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;
}
