use crate::{ Error, Meta, Result, SchemeFault };

const SCHEME_PREFIX: &str = "data:";

/// Splits a data URI into its resolved metadata and its (still encoded) data
/// segment.
///
/// The metadata segment ends at the first comma after the `data:` prefix;
/// any later commas belong to the data.
///
/// # Errors
///
/// Returns [`Error::InvalidScheme`] if the input doesn't start with `data:`
/// (ASCII case-insensitive) or has no comma after the prefix.
///
/// # Example
///
/// ```rust
/// # use data_uri_parse::parse_meta;
/// let (meta, data) = parse_meta("data:text/plain;charset=UTF-8,a,b").unwrap();
/// assert_eq!(meta.media_type(), "text/plain");
/// assert_eq!(meta.charset(), "UTF-8");
/// assert_eq!(data, "a,b");
/// ```
pub fn parse_meta(uri: &str) -> Result<(Meta, &str)> {
    let rest = strip_scheme(uri)?;
    let Some((segment, data)) = rest.split_once(',') else {
        return Err(
            Error::InvalidScheme(SchemeFault::MissingComma, SCHEME_PREFIX.len()..uri.len())
        );
    };
    Ok((Meta::resolve(segment), data))
}

fn strip_scheme(uri: &str) -> Result<&str> {
    match uri.get(..SCHEME_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(SCHEME_PREFIX) => {
            Ok(&uri[SCHEME_PREFIX.len()..])
        }
        _ => {
            let end = uri
                .char_indices()
                .nth(SCHEME_PREFIX.len())
                .map_or(uri.len(), |(idx, _)| idx);
            Err(Error::InvalidScheme(SchemeFault::MissingPrefix, 0..end))
        }
    }
}
