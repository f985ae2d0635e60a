use near_sdk::{BorshStorageKey, near};

/// Storage prefixes for the contract's persistent maps. Variant order is
/// part of the on-chain layout and must not change between releases.
#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Owners,
    TokenMetadata,
    Royalties,
    Versions,
    Licenses,
    Categories,
    Collaborators,
    Statuses,
    RevenueShares,
}
