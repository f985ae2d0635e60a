use crate::*;

/// Checks every mint field. All failures here fold into `InvalidHash`,
/// which is the single stable failure code for the mint validation pass.
pub(crate) fn validate_mint_fields(
    content_hash: &Base64VecU8,
    title: &str,
    description: &str,
    price: u128,
    uri: Option<&str>,
) -> Result<(), RegistryError> {
    validate_hash(content_hash)?;
    if title.is_empty() || title.len() > MAX_TITLE_LEN {
        return Err(RegistryError::InvalidHash(format!(
            "Title must be 1 to {} bytes",
            MAX_TITLE_LEN
        )));
    }
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(RegistryError::InvalidHash(format!(
            "Description exceeds max length of {} bytes",
            MAX_DESCRIPTION_LEN
        )));
    }
    if price == 0 {
        return Err(RegistryError::InvalidHash(
            "Price must be greater than zero".to_string(),
        ));
    }
    if let Some(uri) = uri {
        if uri.len() > MAX_URI_LEN {
            return Err(RegistryError::InvalidHash(format!(
                "URI exceeds max length of {} bytes",
                MAX_URI_LEN
            )));
        }
    }
    Ok(())
}

/// Content hashes must be exactly [`CONTENT_HASH_LEN`] bytes.
pub(crate) fn validate_hash(hash: &Base64VecU8) -> Result<(), RegistryError> {
    if hash.0.len() != CONTENT_HASH_LEN {
        return Err(RegistryError::InvalidHash(format!(
            "Content hash must be exactly {} bytes, got {}",
            CONTENT_HASH_LEN,
            hash.0.len()
        )));
    }
    Ok(())
}

/// Byte-length ceiling for rights metadata strings.
pub(crate) fn check_str_len(field: &str, value: &str, max: usize) -> Result<(), RegistryError> {
    if value.len() > max {
        return Err(RegistryError::MetadataTooLong(format!(
            "{} exceeds max length of {} bytes, got {}",
            field,
            max,
            value.len()
        )));
    }
    Ok(())
}
