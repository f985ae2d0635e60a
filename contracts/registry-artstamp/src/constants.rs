// Limits and defaults for the registry. Lengths are enforced in bytes.

/// Required byte length of every content hash (SHA-256 digests).
pub const CONTENT_HASH_LEN: usize = 32;

// --- Token metadata limits ---
pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;
pub const MAX_URI_LEN: usize = 256;

// --- Rights metadata limits ---
pub const MAX_NOTES_LEN: usize = 200;
pub const MAX_TERMS_LEN: usize = 200;
pub const MAX_CATEGORY_LEN: usize = 50;
pub const MAX_ROLE_LEN: usize = 50;
pub const MAX_STATUS_LEN: usize = 20;
pub const MAX_TAGS: usize = 10;
pub const MAX_PERMISSIONS: usize = 5;

// --- Share ceilings ---
/// Royalty ceiling in basis points (10%).
pub const MAX_ROYALTY_BPS: u16 = 1_000;
/// Revenue share ceiling in whole percent.
pub const MAX_SHARE_PERCENT: u8 = 100;

/// Status label seeded for every freshly minted token.
pub const INITIAL_STATUS: &str = "active";
