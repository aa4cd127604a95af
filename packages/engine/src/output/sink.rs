//! Structural replay

use crate::{
    error::ExtractResult,
    tokens::{JsonToken, TokenSource},
};

/// Consumer of a (filtered) token stream
pub trait TokenSink {
    /// Accept the next token in document order
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot represent the token.
    fn accept(&mut self, token: JsonToken<'_>) -> ExtractResult<()>;
}

/// Feed every token of `tokens` into `sink`, stopping at the first error
///
/// # Errors
///
/// Returns the first error produced by either the token source or the sink.
pub fn replay<'a, S, K>(tokens: S, sink: &mut K) -> ExtractResult<()>
where
    S: TokenSource<'a>,
    K: TokenSink + ?Sized,
{
    for token in tokens {
        sink.accept(token?)?;
    }
    Ok(())
}
