//! Identifier quoting.
//!
//! CQL folds unquoted identifiers to lower case; double quotes keep the case
//! as written. Column and table names flow through here so the canonical
//! (unquoted) form and the wire form stay interchangeable.

use crate::error::MalformedIdentifierError;

pub const QUOTE: char = '"';

/// Wrap `identifier` in double quotes.
///
/// Idempotent: an already wrapped identifier is returned unchanged and a
/// one-ended wrap is completed.
#[must_use]
pub fn add_quotes(identifier: &str) -> String {
    let starts = identifier.starts_with(QUOTE);
    let ends = identifier.len() > 1 && identifier.ends_with(QUOTE);

    match (starts, ends) {
        (true, true) => identifier.to_string(),
        (true, false) => format!("{identifier}{QUOTE}"),
        (false, _) if identifier.ends_with(QUOTE) => format!("{QUOTE}{identifier}"),
        _ => format!("{QUOTE}{identifier}{QUOTE}"),
    }
}

/// Strip the surrounding double quotes from `identifier`.
///
/// Unquoted input is returned unchanged. Input quoted at exactly one end is
/// rejected rather than normalized.
pub fn remove_quotes(identifier: &str) -> Result<String, MalformedIdentifierError> {
    let starts = identifier.starts_with(QUOTE);
    let ends = identifier.ends_with(QUOTE);

    if !starts && !ends {
        return Ok(identifier.to_string());
    }

    if identifier.len() >= 2 && starts && ends {
        return Ok(identifier[1..identifier.len() - 1].to_string());
    }

    Err(MalformedIdentifierError {
        identifier: identifier.to_string(),
    })
}

/// Whether `identifier` is wrapped in double quotes on both ends.
#[must_use]
pub fn is_quoted(identifier: &str) -> bool {
    identifier.len() >= 2 && identifier.starts_with(QUOTE) && identifier.ends_with(QUOTE)
}

///
/// TESTS
///
