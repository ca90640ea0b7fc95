//! # Data URI Decoder
//!
//! This crate decodes [RFC 2397](https://datatracker.ietf.org/doc/html/rfc2397)
//! `data:` URIs into their raw payload bytes plus the metadata needed to
//! interpret them: the media type, the full type string with its parameters,
//! and the charset.
//!
//! It is intended for embedders such as document and resource loaders that
//! treat inline resources as if they had been fetched.
//!
//! The primary functions provided are:
//!
//! - `decode`: Decodes a data URI into a `DecodedBuffer`.
//! - `parse_meta`: Resolves only the metadata, returning it with the still
//!   encoded data segment.
//! - `decode_payload`: Decodes a data segment, percent-decoding it and, for
//!   base64 payloads, base64-decoding the result.
//!
//! | Input                                      | `media_type` | `type_full`                  | `charset`  |
//! | ------------------------------------------ | ------------ | ---------------------------- | ---------- |
//! | `data:,x`                                  | `text/plain` | `text/plain;charset=US-ASCII`| `US-ASCII` |
//! | `data:text/plain,x`                        | `text/plain` | `text/plain`                 |            |
//! | `data:;charset=UTF-8,x`                    | `text/plain` | `text/plain;charset=UTF-8`   | `UTF-8`    |
//! | `data:charset=UTF-8,x`                     | `charset=UTF-8` | `charset=UTF-8`           |            |
//! | `data:text/plain;base64;charset=UTF-8,YWJj`| `text/plain` | `text/plain;charset=UTF-8`   | `UTF-8`    |
//!
//! ## Leniency
//!
//! Authors frequently omit or mangle metadata, so decoding never fails on
//! malformed content: unknown parameters are kept verbatim, bad percent
//! escapes pass through as literal characters, and base64 payloads tolerate
//! line wrapping, stray characters and missing padding. The only error is an
//! input that isn't a data URI at all: no `data:` prefix, or no comma
//! separating the metadata from the data.

mod error;
pub use error::{ Error, Result, SchemeFault };

mod token;

mod meta;
pub use meta::{ DEFAULT_CHARSET, DEFAULT_MEDIA_TYPE, Meta };

mod parse;
pub use parse::parse_meta;

mod payload;
pub use payload::{ base64_decode, decode_payload, percent_decode };

mod charset;

mod buffer;
pub use buffer::DecodedBuffer;

mod decode;
pub use decode::decode;
