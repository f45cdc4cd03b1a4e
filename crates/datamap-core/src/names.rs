//! Name derivation for generated code.
//!
//! Two sanitization rules are in play, matching the two places a
//! user-supplied string can land in generated Java:
//!
//! - map keys appear verbatim inside string literals and need no treatment;
//! - identifiers (synthetic variable names, the persisted-variable name)
//!   must be reduced to characters Java accepts.

/// Reduce a map key to an identifier fragment by stripping every character
/// outside `[A-Za-z0-9]`. `"my prop!"` becomes `myprop`. May return an
/// empty string when the key contains no alphanumerics at all.
pub fn sanitize_identifier(key: &str) -> String {
    key.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Derive the persisted-variable name from a user-supplied data map name:
/// lowercase, with every character outside `[A-Za-z0-9]` replaced by `_`.
/// `"Universal Laws!"` becomes `universal_laws_`.
pub fn variable_name(data_map_name: &str) -> String {
    data_map_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// The full access expression for the mod's persisted root compound.
pub fn storage_access(data_map_name: &str) -> String {
    format!(
        "YourModVariables.MapVariables.get(world).{}",
        variable_name(data_map_name)
    )
}

/// The synchronization statement instructing the mod framework to persist
/// in-memory changes. Identical for both supported platforms.
pub const SYNC_CALL: &str = "YourModVariables.MapVariables.get(world).syncData(world);";
