use crate::{ DecodedBuffer, Result, decode_payload, parse_meta };

/// Decodes a data URI into its payload bytes and metadata.
///
/// # Arguments
///
/// * `uri` - A string slice of the form `data:[<mediatype>][;base64],<data>`.
///
/// # Returns
///
/// * `Ok(DecodedBuffer)` with the decoded bytes, the media type, the full
///   type string and the charset. Malformed escapes, stray base64 characters
///   and missing padding are decoded as far as they go rather than rejected.
/// * `Err(Error::InvalidScheme)` if the input isn't a data URI at all.
///
/// # Example
///
/// ```rust
/// # use data_uri_parse::decode;
/// let buffer = decode("data:text/plain;base64;charset=UTF-8,YWJj").unwrap();
/// assert_eq!(buffer.media_type(), "text/plain");
/// assert_eq!(buffer.type_full(), "text/plain;charset=UTF-8");
/// assert_eq!(buffer.charset(), "UTF-8");
/// assert_eq!(&buffer[..], b"abc");
/// ```
pub fn decode(uri: &str) -> Result<DecodedBuffer> {
    let (meta, data) = parse_meta(uri)?;
    let bytes = decode_payload(data, meta.is_base64());
    Ok(DecodedBuffer::new(meta, bytes))
}
