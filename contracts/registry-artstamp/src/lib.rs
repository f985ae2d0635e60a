use near_sdk::json_types::{Base64VecU8, U128};
use near_sdk::store::LookupMap;
use near_sdk::{AccountId, PanicOnDefault, env, near};

pub mod constants;
mod errors;
mod guards;
mod validation;

mod events;

mod rights;
mod token;
mod verify;

mod admin;
mod storage;


pub use constants::*;
pub use errors::RegistryError;
pub use rights::types::{
    BasisPoints, CategoryInfo, CollaboratorRecord, LicenseRecord, LicenseState, RevenueShare,
    RoyaltyInfo, SharePercent, StatusRecord, VersionRecord,
};
pub use storage::StorageKey;
pub use token::types::TokenMetadata;

/// Ownership and rights registry for digital artworks. Tokens carry a
/// content hash plus descriptive metadata; rights records (royalty,
/// versions, licenses, catalog, collaborators, revenue splits) hang off
/// the token id and survive independently of the token itself.
#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/artstamp-labs/artstamp-protocol",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub admin_id: AccountId,
    /// Gates mint, transfer and burn only.
    pub paused: bool,

    // Id invariant: ids start at 1, only move forward, and are never
    // reused after a burn.
    pub token_counter: u64,
    /// Cumulative royalties settled through the registry, in yoctoNEAR.
    pub royalties_collected: u128,

    pub owners: LookupMap<u64, AccountId>,
    pub token_metadata: LookupMap<u64, TokenMetadata>,

    pub royalties: LookupMap<u64, RoyaltyInfo>,
    pub(crate) versions: LookupMap<(u64, u32), VersionRecord>,
    pub(crate) licenses: LookupMap<(u64, AccountId), LicenseRecord>,
    pub categories: LookupMap<u64, CategoryInfo>,
    pub(crate) collaborators: LookupMap<(u64, AccountId), CollaboratorRecord>,
    pub statuses: LookupMap<u64, StatusRecord>,
    pub(crate) revenue_shares: LookupMap<(u64, AccountId), RevenueShare>,
}
