//! Role gate policy

use std::fmt;
use std::str::FromStr;

use shared::models::Role;

/// How the Agent gate interprets its requirement
///
/// The deployed service checked the Admin role behind its Agent gate, so
/// agents were turned away and only admins reached agent routes.
/// `LegacyAdminFlag` reproduces that; `Strict` compares against Agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AgentGatePolicy {
    #[default]
    Strict,
    LegacyAdminFlag,
}

impl AgentGatePolicy {
    /// The role a stored user must hold to pass a gate requiring `required`
    pub fn effective(&self, required: Role) -> Role {
        match (self, required) {
            (AgentGatePolicy::LegacyAdminFlag, Role::Agent) => Role::Admin,
            (_, role) => role,
        }
    }
}

impl FromStr for AgentGatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(AgentGatePolicy::Strict),
            "legacy" | "legacy-admin-flag" => Ok(AgentGatePolicy::LegacyAdminFlag),
            other => Err(format!("unknown agent gate policy: {other}")),
        }
    }
}

impl fmt::Display for AgentGatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentGatePolicy::Strict => f.write_str("strict"),
            AgentGatePolicy::LegacyAdminFlag => f.write_str("legacy"),
        }
    }
}
