//! Extraction entry point tests

use jsonsift_engine::{
    ErrorKind, ExtractorConfig, JsonToken, TextCollector, TokenSink, ValueSink, compile, extract,
    has_json_content, replay,
};
use serde_json::json;

#[cfg(test)]
mod extract_tests {
    use super::*;

    const DOC: &str = r#"{"a":{"b":1,"c":true,"x":false},"d":"xyz"}"#;

    fn text(spec: &str, document: &str) -> Option<String> {
        extract::extract_text(&compile(spec), document, &ExtractorConfig::default())
            .expect("valid JSON")
    }

    fn json(spec: &str, document: &str) -> Option<String> {
        extract::extract_json(&compile(spec), document, &ExtractorConfig::default())
            .expect("valid JSON")
    }

    #[test]
    fn test_text_and_json_modes() {
        assert_eq!(text("a.b, a.x", DOC).as_deref(), Some("1 false "));
        assert_eq!(json("a.b, a.x", DOC).as_deref(), Some(r#"{"a":{"b":1,"x":false}}"#));
        assert_eq!(text("d, a.b", DOC).as_deref(), Some("1 xyz "));
        assert_eq!(json("d, a.b", DOC).as_deref(), Some(r#"{"a":{"b":1},"d":"xyz"}"#));
    }

    #[test]
    fn test_missing_paths_yield_empty_output() {
        assert_eq!(text("nope, a.q", DOC).as_deref(), Some(""));
        assert_eq!(json("nope, a.q", DOC).as_deref(), Some(""));
        assert_eq!(text("", DOC).as_deref(), Some(""));
    }

    #[test]
    fn test_null_is_excluded_from_text() {
        let doc = r#"{"a":[null,1,"x",true],"b":null}"#;
        assert_eq!(text("a, b", doc).as_deref(), Some("1 x true "));
        assert_eq!(json("a, b", doc).as_deref(), Some(doc));
    }

    #[test]
    fn test_numbers_keep_their_lexeme() {
        let doc = r#"{"n":1.50E+3,"big":100100010101001,"neg":-0.0}"#;
        assert_eq!(
            text("n, big, neg", doc).as_deref(),
            Some("1.50E+3 100100010101001 -0.0 ")
        );
    }

    #[test]
    fn test_strings_are_unescaped_in_text_and_escaped_in_json() {
        let doc = r#"{"s":"say \"hi\"\n"}"#;
        assert_eq!(text("s", doc).as_deref(), Some("say \"hi\"\n "));
        assert_eq!(json("s", doc).as_deref(), Some(doc));
    }

    #[test]
    fn test_non_json_input_is_not_tokenized() {
        let tree = compile("a");
        let config = ExtractorConfig::default();
        for document in ["", " {\"a\":1}", "abc", "1", "\"a\"", "null", "<a/>"] {
            assert_eq!(
                extract::extract_text(&tree, document, &config).expect("no error"),
                None,
                "document {document:?}"
            );
            assert_eq!(
                extract::extract_bytes(&tree, document, &config).expect("no error"),
                None
            );
            assert_eq!(
                extract::extract_json(&tree, document, &config).expect("no error"),
                None
            );
            assert_eq!(
                extract::extract_value(&tree, document, &config).expect("no error"),
                None
            );
            assert!(extract::filtered_tokens(&tree, document, &config).is_none());
            assert_eq!(
                extract::extract_text_from_slice(&tree, document.as_bytes(), &config)
                    .expect("no error"),
                None
            );
        }
        assert!(!has_json_content(b"\xff{"));
        assert!(has_json_content(b"[garbage"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let tree = compile("a");
        let config = ExtractorConfig::default();
        let error = extract::extract_text(&tree, r#"{"a":1,"#, &config).expect_err("truncated");
        assert_eq!(error.kind(), ErrorKind::InvalidJson);
        assert_eq!(error.offset(), Some(7));

        assert!(extract::extract_json(&tree, "[garbage", &config).is_err());
        assert!(extract::extract_bytes(&tree, "{]", &config).is_err());
    }

    #[test]
    fn test_byte_inputs() {
        let tree = compile("a");
        let config = ExtractorConfig::default();
        let bytes = extract::extract_bytes_from_slice(&tree, br#"{"a":"v"}"#, &config)
            .expect("valid JSON")
            .expect("JSON content");
        assert_eq!(&bytes[..], b"v ");

        let json = extract::extract_json_from_slice(&tree, br#"{"a":[1],"b":2}"#, &config)
            .expect("valid JSON");
        assert_eq!(json.as_deref(), Some(r#"{"a":[1]}"#));

        let error = extract::extract_text_from_slice(&tree, b"[\"\xff\"]", &config)
            .expect_err("invalid UTF-8");
        assert_eq!(error.kind(), ErrorKind::InvalidUtf8);
        assert_eq!(error.offset(), Some(2));
    }

    #[test]
    fn test_nesting_limit_from_config() {
        let tree = compile("a");
        let config = ExtractorConfig::default().with_max_nesting_depth(2);
        let error = extract::extract_text(&tree, r#"{"a":{"b":{"c":1}}}"#, &config)
            .expect_err("too deep");
        assert_eq!(error.kind(), ErrorKind::NestingTooDeep);

        assert!(extract::extract_text(&tree, r#"{"a":{"b":1}}"#, &config).is_ok());
    }

    #[test]
    fn test_custom_separator() {
        let tree = compile("a");
        let config = ExtractorConfig::default().with_separator('\n');
        let text = extract::extract_text(&tree, r#"{"a":["x","y"]}"#, &config).expect("valid JSON");
        assert_eq!(text.as_deref(), Some("x\ny\n"));
    }

    #[test]
    fn test_value_output() {
        let tree = compile("a.b, list");
        let config = ExtractorConfig::default();
        let value = extract::extract_value(
            &tree,
            r#"{"a":{"b":1.5,"c":2},"list":[1,"two",null,{"k":false}]}"#,
            &config,
        )
        .expect("valid JSON");
        assert_eq!(
            value,
            Some(Some(json!({"a":{"b":1.5},"list":[1,"two",null,{"k":false}]})))
        );

        let nothing = extract::extract_value(&tree, r#"{"z":1}"#, &config).expect("valid JSON");
        assert_eq!(nothing, Some(None));
    }

    #[test]
    fn test_filtered_tokens_replay_into_custom_sink() {
        #[derive(Default)]
        struct Counter {
            scalars: usize,
            containers: usize,
        }

        impl TokenSink for Counter {
            fn accept(&mut self, token: JsonToken<'_>) -> jsonsift_engine::ExtractResult<()> {
                if token.is_scalar() {
                    self.scalars += 1;
                } else if token.is_container_start() {
                    self.containers += 1;
                }
                Ok(())
            }
        }

        let tree = compile("a");
        let config = ExtractorConfig::default();
        let tokens = extract::filtered_tokens(&tree, r#"{"a":[1,[2,3]],"b":4}"#, &config)
            .expect("JSON content");
        let mut counter = Counter::default();
        replay(tokens, &mut counter).expect("valid JSON");
        assert_eq!(counter.scalars, 3);
        assert_eq!(counter.containers, 3);
    }

    #[test]
    fn test_collectors_are_sinks() {
        let tree = compile("a");
        let config = ExtractorConfig::default();

        let mut collector = TextCollector::with_capacity(16, ' ');
        let tokens = extract::filtered_tokens(&tree, r#"{"a":[true,null,"z"]}"#, &config)
            .expect("JSON content");
        replay(tokens, &mut collector).expect("valid JSON");
        assert_eq!(collector.scalar_count(), 2);
        assert_eq!(collector.finish(), "true z ");

        let mut values = ValueSink::new();
        let tokens = extract::filtered_tokens(&tree, r#"{"a":{"x":[]}}"#, &config)
            .expect("JSON content");
        replay(tokens, &mut values).expect("valid JSON");
        assert_eq!(values.finish(), Some(json!({"a":{"x":[]}})));
    }

    #[test]
    fn test_value_keeps_document_order_and_huge_numbers() {
        let tree = compile("d, a, b");
        let config = ExtractorConfig::default();
        let value = extract::extract_value(&tree, r#"{"d":1,"a":1e400,"z":0,"b":-2}"#, &config)
            .expect("valid JSON")
            .expect("JSON content")
            .expect("matched fields");
        assert_eq!(
            serde_json::to_string(&value).expect("serializable"),
            r#"{"d":1,"a":"1e400","b":-2}"#
        );
        assert_eq!(
            json("a", r#"{"a":1e400}"#).as_deref(),
            Some(r#"{"a":1e400}"#)
        );
    }
}
