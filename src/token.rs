use crate::constants::{PUBLIC_TOKEN_PREFIX, SECRET_TOKEN_PREFIX};
use crate::error::{MapError, Result};

/// Picks the explicit token, else the fallback, and checks it is a public
/// (`pk.`) token. Empty strings count as absent.
pub fn check_access_token<'a>(explicit: Option<&'a str>, fallback: Option<&'a str>) -> Result<&'a str> {
    let token = explicit
        .filter(|value| !value.is_empty())
        .or_else(|| fallback.filter(|value| !value.is_empty()))
        .ok_or(MapError::MissingToken)?;

    // secret tokens would still work, but they must never end up in a public URL
    if token.starts_with(SECRET_TOKEN_PREFIX) {
        return Err(MapError::SecretToken);
    }
    if !token.starts_with(PUBLIC_TOKEN_PREFIX) {
        return Err(MapError::InvalidToken);
    }
    Ok(token)
}
