//! Authentication and authorization
//!
//! - [`JwtService`] - token issuance and verification
//! - [`CurrentUser`] - verified caller identity
//! - [`require_token`] - token gate middleware
//! - [`require_role`] - role gate middleware factory
//! - [`ensure_same_identity`] - per-resource identity check

pub mod directory;
pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod policy;

pub use directory::UserDirectory;
pub use extractor::CurrentUser;
pub use jwt::{IdentityClaims, JwtConfig, JwtError, JwtService};
pub use middleware::{authorize_role, ensure_same_identity, require_role, require_token};
pub use policy::AgentGatePolicy;
