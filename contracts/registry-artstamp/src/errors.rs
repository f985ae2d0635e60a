use near_sdk_macros::NearSchema;

/// Stable failure codes returned by every fallible registry method. The
/// variant name is the machine-readable code; the payload carries a
/// human-readable explanation naming the offending field or limit.
#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum RegistryError {
    /// Caller does not own the token, or the token has no recorded owner.
    NotOwner(String),
    /// Caller lacks the required authority (admin-only calls, revoking a
    /// license that was never granted).
    NotAuthorized(String),
    /// Mint, transfer and burn are rejected while the registry is paused.
    Paused(String),
    /// Umbrella code for every mint validation failure, hash or otherwise.
    InvalidHash(String),
    MetadataTooLong(String),
    TooManyTags(String),
    InvalidPermission(String),
    RoyaltyTooHigh(String),
    ShareExceeds100(String),
    VersionAlreadyExists(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotOwner(msg) => write!(f, "Not token owner: {}", msg),
            Self::NotAuthorized(msg) => write!(f, "Not authorized: {}", msg),
            Self::Paused(msg) => write!(f, "Registry paused: {}", msg),
            Self::InvalidHash(msg) => write!(f, "Invalid hash: {}", msg),
            Self::MetadataTooLong(msg) => write!(f, "Metadata too long: {}", msg),
            Self::TooManyTags(msg) => write!(f, "Too many tags: {}", msg),
            Self::InvalidPermission(msg) => write!(f, "Invalid permission: {}", msg),
            Self::RoyaltyTooHigh(msg) => write!(f, "Royalty too high: {}", msg),
            Self::ShareExceeds100(msg) => write!(f, "Share exceeds 100: {}", msg),
            Self::VersionAlreadyExists(msg) => {
                write!(f, "Version already exists: {}", msg)
            }
        }
    }
}

impl RegistryError {
    pub fn not_owner() -> Self {
        Self::NotOwner("Only the token owner can perform this action".into())
    }

    pub fn not_admin() -> Self {
        Self::NotAuthorized("Only the admin can perform this action".into())
    }

    pub fn paused(action: &str) -> Self {
        Self::Paused(format!("Cannot {} while the registry is paused", action))
    }
}
