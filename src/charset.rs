use std::borrow::Cow;

use encoding_rs::{ Encoding, UTF_8 };
use tracing::{ trace, warn };

/// Looks up a WHATWG encoding label. An empty label means UTF-8; an unknown
/// one falls back to UTF-8 with a warning.
pub(crate) fn encoding_for_label(label: &str) -> &'static Encoding {
    let label = label.trim();
    if label.is_empty() {
        return UTF_8;
    }
    match Encoding::for_label(label.as_bytes()) {
        Some(encoding) => encoding,
        None => {
            warn!(label, "unknown charset label, falling back to UTF-8");
            UTF_8
        }
    }
}

/// Decodes `bytes` under the charset named by `label`. Malformed sequences
/// become U+FFFD; a byte order mark is not sniffed.
pub(crate) fn decode_text<'a>(bytes: &'a [u8], label: &str) -> Cow<'a, str> {
    let encoding = encoding_for_label(label);
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        trace!(charset = encoding.name(), "replaced malformed sequences");
    }
    text
}
