//! Extraction entry points
//!
//! Every entry point first sniffs the leading character: a document that is
//! empty or does not start with `{` or `[` yields `Ok(None)` without being
//! tokenized. Anything else is tokenized and filtered in full; tokenizer
//! failures are returned as errors and no partial output is produced.

use bytes::Bytes;
use serde_json::Value;

use crate::{
    config::ExtractorConfig,
    error::ExtractResult,
    filter::FilterTree,
    output::{JsonTextSink, TextCollector, TokenSink, ValueSink, replay},
    stream::FilteringTokens,
    tokenizer::JsonTokenizer,
};

/// Filtered token stream over a document read by the default tokenizer
pub type FilteredTokens<'f, 'a> = FilteringTokens<'f, 'a, JsonTokenizer<'a>>;

/// Whether `document` looks like a JSON object or array.
///
/// Only the first byte is inspected; this is a cheap pre-check, not
/// validation.
#[inline]
#[must_use]
pub fn has_json_content(document: &[u8]) -> bool {
    matches!(document.first(), Some(b'{' | b'['))
}

fn sniff(document: &[u8]) -> bool {
    let accepted = has_json_content(document);
    if !accepted {
        tracing::debug!(
            target: "jsonsift::extract",
            input_len = document.len(),
            "input does not start with '{{' or '[', no JSON content"
        );
    }
    accepted
}

fn decode(document: &[u8]) -> ExtractResult<&str> {
    Ok(simdutf8::compat::from_utf8(document)?)
}

/// Filtered tokens of `document`, for structural replay into any sink
#[must_use]
pub fn filtered_tokens<'f, 'a>(
    tree: &'f FilterTree,
    document: &'a str,
    config: &ExtractorConfig,
) -> Option<FilteredTokens<'f, 'a>> {
    if !sniff(document.as_bytes()) {
        return None;
    }
    let tokenizer = JsonTokenizer::with_max_depth(document, config.max_nesting_depth);
    Some(FilteringTokens::new(tokenizer, tree.root()))
}

fn run<K: TokenSink>(
    tree: &FilterTree,
    document: &str,
    config: &ExtractorConfig,
    mut sink: K,
) -> ExtractResult<Option<K>> {
    let Some(tokens) = filtered_tokens(tree, document, config) else {
        return Ok(None);
    };
    if let Err(error) = replay(tokens, &mut sink) {
        tracing::debug!(
            target: "jsonsift::extract",
            error = %error,
            input_len = document.len(),
            "extraction failed"
        );
        return Err(error);
    }
    Ok(Some(sink))
}

/// Space-separated text of every included scalar
///
/// # Errors
///
/// Returns the tokenizer's error if `document` is malformed JSON.
pub fn extract_text(
    tree: &FilterTree,
    document: &str,
    config: &ExtractorConfig,
) -> ExtractResult<Option<String>> {
    let collector = TextCollector::with_capacity(
        config.estimate_result_length(document.len()),
        config.separator,
    );
    Ok(run(tree, document, config, collector)?.map(TextCollector::finish))
}

/// `extract_text` over a byte buffer, which must be UTF-8
///
/// # Errors
///
/// Returns an `InvalidUtf8` error for non-UTF-8 input that passed the sniff,
/// or the tokenizer's error for malformed JSON.
pub fn extract_text_from_slice(
    tree: &FilterTree,
    document: &[u8],
    config: &ExtractorConfig,
) -> ExtractResult<Option<String>> {
    if !sniff(document) {
        return Ok(None);
    }
    extract_text(tree, decode(document)?, config)
}

/// UTF-8 bytes of `extract_text`
///
/// # Errors
///
/// Same as `extract_text`.
pub fn extract_bytes(
    tree: &FilterTree,
    document: &str,
    config: &ExtractorConfig,
) -> ExtractResult<Option<Bytes>> {
    Ok(extract_text(tree, document, config)?.map(Bytes::from))
}

/// UTF-8 bytes of `extract_text_from_slice`
///
/// # Errors
///
/// Same as `extract_text_from_slice`.
pub fn extract_bytes_from_slice(
    tree: &FilterTree,
    document: &[u8],
    config: &ExtractorConfig,
) -> ExtractResult<Option<Bytes>> {
    Ok(extract_text_from_slice(tree, document, config)?.map(Bytes::from))
}

/// Filtered document as compact JSON text; an empty string when nothing
/// matched
///
/// # Errors
///
/// Same as `extract_text`.
pub fn extract_json(
    tree: &FilterTree,
    document: &str,
    config: &ExtractorConfig,
) -> ExtractResult<Option<String>> {
    let sink = JsonTextSink::with_capacity(config.estimate_result_length(document.len()));
    Ok(run(tree, document, config, sink)?.map(JsonTextSink::finish))
}

/// `extract_json` over a byte buffer, which must be UTF-8
///
/// # Errors
///
/// Same as `extract_text_from_slice`.
pub fn extract_json_from_slice(
    tree: &FilterTree,
    document: &[u8],
    config: &ExtractorConfig,
) -> ExtractResult<Option<String>> {
    if !sniff(document) {
        return Ok(None);
    }
    extract_json(tree, decode(document)?, config)
}

/// Filtered document as a `serde_json::Value`.
///
/// The outer `Option` is `None` when the sniff fails; the inner one is `None`
/// when nothing matched. Object members keep document order, and numbers
/// outside the `f64` range become strings holding their lexeme.
///
/// # Errors
///
/// Same as `extract_text`.
pub fn extract_value(
    tree: &FilterTree,
    document: &str,
    config: &ExtractorConfig,
) -> ExtractResult<Option<Option<Value>>> {
    Ok(run(tree, document, config, ValueSink::new())?.map(ValueSink::finish))
}
