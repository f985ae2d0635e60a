use near_sdk::json_types::{Base64VecU8, U128};
use near_sdk::{AccountId, near};

use crate::constants::{MAX_ROYALTY_BPS, MAX_SHARE_PERCENT};
use crate::errors::RegistryError;

/// Royalty rate in basis points, capped at [`MAX_ROYALTY_BPS`]. Kept as a
/// distinct type so basis points and whole percent cannot be swapped.
#[near(serializers = [borsh, json])]
#[derive(Clone, Copy)]
pub struct BasisPoints(u16);

impl BasisPoints {
    pub fn new(bps: u16) -> Result<Self, RegistryError> {
        if bps > MAX_ROYALTY_BPS {
            return Err(RegistryError::RoyaltyTooHigh(format!(
                "Royalty of {} basis points exceeds the cap of {}",
                bps, MAX_ROYALTY_BPS
            )));
        }
        Ok(Self(bps))
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

/// Revenue share in whole percent, capped at [`MAX_SHARE_PERCENT`].
#[near(serializers = [borsh, json])]
#[derive(Clone, Copy)]
pub struct SharePercent(u8);

impl SharePercent {
    pub fn new(percent: u8) -> Result<Self, RegistryError> {
        if percent > MAX_SHARE_PERCENT {
            return Err(RegistryError::ShareExceeds100(format!(
                "Revenue share of {}% exceeds the cap of {}%",
                percent, MAX_SHARE_PERCENT
            )));
        }
        Ok(Self(percent))
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

/// Royalty terms for a token. One record per token, replaced wholesale on
/// every `set_royalty`.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct RoyaltyInfo {
    pub recipient: AccountId,
    pub percentage: BasisPoints,
    pub updated_at: u64,
}

/// A registered revision of a token's underlying work. Write-once per
/// (token, version number) pair.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct VersionRecord {
    /// 32-byte digest of the revised content.
    pub content_hash: Base64VecU8,
    pub notes: String,
    pub registered_at: u64,
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LicenseState {
    Granted,
    Revoked,
}

/// Usage license for one licensee on one token. Revocation is a soft
/// delete: the record stays readable with `state` flipped to `Revoked`.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct LicenseRecord {
    /// Absolute expiry timestamp in nanoseconds.
    pub expires_at: u64,
    pub terms: String,
    pub state: LicenseState,
    pub granted_at: u64,
    pub revoked_at: Option<u64>,
}

/// Catalog classification for a token, replaced wholesale on every call.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct CategoryInfo {
    pub category: String,
    pub tags: Vec<String>,
    pub updated_at: u64,
}

/// Collaborator entry for a token. Re-adding the same account overwrites
/// the record and refreshes `added_at`.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct CollaboratorRecord {
    pub role: String,
    pub permissions: Vec<String>,
    pub added_at: u64,
}

/// Free-form status label plus visibility flag. Seeded at mint and
/// mutable by the owner afterwards.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct StatusRecord {
    pub status: String,
    pub visible: bool,
    pub updated_at: u64,
}

/// Revenue split entry for one participant on one token. `total_received`
/// is an accounting field settled by off-chain distribution; every call to
/// `set_revenue_share` resets it to zero.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct RevenueShare {
    pub percent: SharePercent,
    pub total_received: U128,
}
