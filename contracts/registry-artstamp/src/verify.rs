use crate::*;

#[near]
impl Contract {
    /// Byte-exact comparison of a candidate hash against the token's
    /// registered content hash. Returns false for unknown or burned
    /// tokens; never errors and stays live while the registry is paused.
    pub fn verify_authenticity(&self, token_id: u64, hash: Base64VecU8) -> bool {
        match self.token_metadata.get(&token_id) {
            Some(metadata) => metadata.content_hash.0 == hash.0,
            None => false,
        }
    }
}
