use std::{ borrow::Cow, ops::Deref, str::FromStr };

use crate::{ Error, Meta, charset::decode_text, decode };

/// The decoded payload of a data URI together with its metadata.
///
/// Dereferences to `[u8]`, so indexing, slicing and iteration work directly
/// on the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBuffer {
    meta: Meta,
    bytes: Vec<u8>,
}

impl DecodedBuffer {
    pub fn new(meta: Meta, bytes: Vec<u8>) -> Self {
        Self { meta, bytes }
    }

    pub fn meta(&self) -> &Meta { &self.meta }

    /// See [`Meta::media_type`].
    pub fn media_type(&self) -> &str { self.meta.media_type() }

    /// See [`Meta::type_full`].
    pub fn type_full(&self) -> &str { self.meta.type_full() }

    /// See [`Meta::charset`].
    pub fn charset(&self) -> &str { self.meta.charset() }

    pub fn bytes(&self) -> &[u8] { &self.bytes }

    pub fn len(&self) -> usize { self.bytes.len() }

    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// The payload as text, decoded under the resolved charset. An empty
    /// charset decodes as UTF-8.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use data_uri_parse::decode;
    /// let buffer = decode("data:text/plain;charset=iso-8859-8-i,%f9%ec%e5%ed").unwrap();
    /// assert_eq!(buffer.text(), "שלום");
    /// ```
    pub fn text(&self) -> Cow<'_, str> {
        decode_text(&self.bytes, self.meta.charset())
    }

    /// The payload as text, decoded under the charset named by `label`
    /// instead of the resolved one. Unknown labels decode as UTF-8.
    pub fn text_with(&self, label: &str) -> Cow<'_, str> {
        decode_text(&self.bytes, label)
    }

    pub fn into_bytes(self) -> Vec<u8> { self.bytes }

    pub fn into_parts(self) -> (Meta, Vec<u8>) { (self.meta, self.bytes) }
}

impl Deref for DecodedBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] { &self.bytes }
}

impl AsRef<[u8]> for DecodedBuffer {
    fn as_ref(&self) -> &[u8] { &self.bytes }
}

impl TryFrom<&str> for DecodedBuffer {
    type Error = Error;

    fn try_from(uri: &str) -> Result<Self, Self::Error> { decode(uri) }
}

impl FromStr for DecodedBuffer {
    type Err = Error;

    fn from_str(uri: &str) -> Result<Self, Self::Err> { decode(uri) }
}
