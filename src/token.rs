use logos::Logos;

/// Tokens of the parameter list that follows the media type in a data URI's
/// metadata segment.
///
/// Empty parameters (`;;`) show up as adjacent separators and never become
/// tokens of their own.
#[derive(Debug, Clone, Copy, Logos, PartialEq, Eq)]
#[rustfmt::skip]
pub enum MetaToken<'a> {
    #[token(";")]
    Separator,

    /// The base64 marker. Matches only the whole parameter, so `base64x` is a
    /// plain parameter.
    #[token("base64", ignore(ascii_case))]
    Base64,

    /// A `charset=` parameter, carried verbatim. The key is case-sensitive.
    #[regex(r"charset=[^;]*", |lex| lex.slice())]
    Charset(&'a str),

    /// Any other parameter, carried verbatim.
    #[regex(r"[^;]+", |lex| lex.slice())]
    Parameter(&'a str),
}

impl<'a> MetaToken<'a> {
    /// The value of a `charset=` parameter: everything after the first `=`.
    pub fn charset_value(&self) -> Option<&'a str> {
        match self {
            MetaToken::Charset(param) => {
                param.split_once('=').map(|(_, value)| value)
            }
            _ => None,
        }
    }
}
