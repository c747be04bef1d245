use serde::{Deserialize, Serialize};

pub type IdentityId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: IdentityId,
    pub name: String,
    pub email: String,
    /// Role label as the identity store defines it. The token layer only
    /// transports this value; it does not interpret it.
    pub role: String,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedIdentity {
    pub identity: Identity,
    pub authorities: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("no identity found for {0}")]
    NotFound(String),
    #[error("identity store error: {0}")]
    Store(String),
}

/// The one capability the token layer needs from the identity store:
/// resolve a unique key to an identity and its granted authorities.
pub trait IdentityResolver: Send + Sync {
    fn lookup(&self, email: &str) -> Result<ResolvedIdentity, IdentityError>;
}

impl ResolvedIdentity {
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authority_lookup() {
        let resolved = ResolvedIdentity {
            identity: Identity {
                id: 7,
                name: "Mina".to_string(),
                email: "mina@example.com".to_string(),
                role: "SUPPORTER".to_string(),
                phone_number: None,
            },
            authorities: vec!["SUPPORTER".to_string()],
        };

        assert!(resolved.has_authority("SUPPORTER"));
        assert!(!resolved.has_authority("ADMIN"));
    }
}
