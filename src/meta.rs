use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::token::MetaToken;

/// Media type used when the metadata segment names none.
pub const DEFAULT_MEDIA_TYPE: &str = "text/plain";

/// Charset forced when the metadata segment is empty in its entirety.
pub const DEFAULT_CHARSET: &str = "US-ASCII";

/// The metadata of a data URI: everything between `data:` and the first
/// comma, resolved into a media type, its parameters, a charset and the
/// base64 flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meta {
    media_type: String,
    type_full: String,
    parameters: Vec<String>,
    charset: String,
    is_base64: bool,
    type_was_defaulted: bool,
    charset_was_defaulted: bool,
}

impl Meta {
    /// Resolves a metadata segment (the text between the `data:` prefix and
    /// the first comma).
    ///
    /// Never fails: anything that doesn't look like a parameter is carried
    /// along verbatim.
    pub fn resolve(segment: &str) -> Self {
        let (type_token, rest) = split_type_token(segment);
        let (media_type, type_was_defaulted) = resolve_media_type(type_token);

        let mut parameters = Vec::new();
        let mut charset = None;
        let mut is_base64 = false;

        let mut lexer = MetaToken::lexer(rest);
        while let Some(token) = lexer.next() {
            match token {
                Ok(MetaToken::Separator) => {}
                Ok(MetaToken::Base64) => is_base64 = true,
                Ok(token @ MetaToken::Charset(param)) => {
                    // Last one wins
                    charset = token.charset_value();
                    parameters.push(param.to_string());
                }
                Ok(MetaToken::Parameter(param)) => {
                    parameters.push(param.to_string());
                }
                Err(()) => parameters.push(lexer.slice().to_string()),
            }
        }

        let charset_was_defaulted = charset.is_none() && segment.is_empty();
        let charset = if charset_was_defaulted {
            parameters.push(format!("charset={DEFAULT_CHARSET}"));
            DEFAULT_CHARSET.to_string()
        } else {
            charset.unwrap_or_default().to_string()
        };

        let type_full = std::iter::once(media_type.as_str())
            .chain(parameters.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(";");

        trace!(
            %media_type,
            %type_full,
            %charset,
            is_base64,
            "resolved data URI metadata"
        );

        Self {
            media_type,
            type_full,
            parameters,
            charset,
            is_base64,
            type_was_defaulted,
            charset_was_defaulted,
        }
    }

    /// The primary media type, e.g. `text/plain`.
    pub fn media_type(&self) -> &str { &self.media_type }

    /// The media type followed by its surviving parameters, without the
    /// base64 marker.
    pub fn type_full(&self) -> &str { &self.type_full }

    /// The surviving parameters in their original order.
    pub fn parameters(&self) -> &[String] { &self.parameters }

    /// The value of the last `charset=` parameter, the `US-ASCII` default
    /// for an empty metadata segment, or the empty string.
    pub fn charset(&self) -> &str { &self.charset }

    pub fn is_base64(&self) -> bool { self.is_base64 }

    /// Whether the media type was missing and `text/plain` was substituted.
    pub fn type_was_defaulted(&self) -> bool { self.type_was_defaulted }

    /// Whether `charset=US-ASCII` was synthesized for an empty metadata
    /// segment.
    pub fn charset_was_defaulted(&self) -> bool { self.charset_was_defaulted }
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_full)
    }
}

/// Splits off the first `;`-delimited token. It is the media type whatever it
/// looks like; only the text after the first `;` is parameters.
fn split_type_token(segment: &str) -> (&str, &str) {
    segment.split_once(';').unwrap_or((segment, ""))
}

/// The type token is taken verbatim, except that an empty one becomes
/// `text/plain`.
fn resolve_media_type(type_token: &str) -> (String, bool) {
    if type_token.is_empty() {
        (DEFAULT_MEDIA_TYPE.to_string(), true)
    } else {
        (type_token.to_string(), false)
    }
}
