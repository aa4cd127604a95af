//! FieldExtractor tests
//!
//! Each inclusion case is checked in both structural (compact JSON) and text
//! form.

use std::sync::Arc;
use std::thread;

use jsonsift::{ErrorKind, FieldExtractor, JsonTextSink, replay};
use serde_json::json;

const PRODUCTS: &str = include_str!("fixtures/products.json");

#[cfg(test)]
mod extractor_tests {
    use super::*;

    fn verify_inclusion(document: &str, spec: &str, expected_json: &str, expected_text: &str) {
        let extractor = FieldExtractor::new(spec);
        let json = extractor
            .extract_json(document)
            .expect("valid JSON")
            .expect("JSON content");
        assert_eq!(json, expected_json, "JSON for spec {spec:?}");

        let text = extractor
            .extract_text(document)
            .expect("valid JSON")
            .expect("JSON content");
        assert_eq!(text, expected_text, "text for spec {spec:?}");
    }

    #[test]
    fn test_simple_object_inclusion() {
        let doc = r#"{"a":{"b":1,"c":true,"x":false},"d":"xyz"}"#;
        verify_inclusion(r#"{"a":1,"b":2,"c":3}"#, "a", r#"{"a":1}"#, "1 ");
        verify_inclusion(doc, "a.c", r#"{"a":{"c":true}}"#, "true ");
        verify_inclusion(doc, "a.b, a.x", r#"{"a":{"b":1,"x":false}}"#, "1 false ");
        verify_inclusion(doc, "d, a.b", r#"{"a":{"b":1},"d":"xyz"}"#, "1 xyz ");
    }

    #[test]
    fn test_missing_inclusion() {
        let doc = r#"{"a":1,"b":2,"c":3}"#;
        verify_inclusion(doc, " ", "", "");
        verify_inclusion(doc, ", ", "", "");
        verify_inclusion(doc, " x, y", "", "");
    }

    #[test]
    fn test_longer_path_does_not_match_scalar() {
        verify_inclusion(r#"{"a":1,"b":2,"c":3}"#, "a.x", "", "");
    }

    #[test]
    fn test_overlapping_paths() {
        let doc = r#"{"a":1,"b":{"x":1,"y":2},"c":true}"#;
        verify_inclusion(doc, "b, b.y", r#"{"b":{"x":1,"y":2}}"#, "1 2 ");
        verify_inclusion(doc, "b.x, b", r#"{"b":{"x":1,"y":2}}"#, "1 2 ");
    }

    #[test]
    fn test_multi_level_matching() {
        verify_inclusion(
            r#"{"first":123,"a":{"b":{"x":{"z":"value"}},"c":true},"y":2}"#,
            "a, a.b, a.b.x",
            r#"{"a":{"b":{"x":{"z":"value"}},"c":true}}"#,
            "value true ",
        );
    }

    #[test]
    fn test_simple_array_inclusion() {
        let doc = r#"{"a":"123","arr": ["abc", "def"]}"#;
        verify_inclusion(doc, "arr", r#"{"arr":["abc","def"]}"#, "abc def ");
        verify_inclusion(doc, "a, ", r#"{"a":"123"}"#, "123 ");
        verify_inclusion(
            r#"{"a":{"b":{"arr": ["abc", "def"]}}, "z":3 }"#,
            "a.b ",
            r#"{"a":{"b":{"arr":["abc","def"]}}}"#,
            "abc def ",
        );
    }

    #[test]
    fn test_nested_in_array_inclusion() {
        let doc = r#"{"arr": [{"name":"Bob","age":20},{"name":"Jack","age":30}]}"#;
        verify_inclusion(
            doc,
            "arr.name",
            r#"{"arr":[{"name":"Bob"},{"name":"Jack"}]}"#,
            "Bob Jack ",
        );
        verify_inclusion(doc, "arr.age", r#"{"arr":[{"age":20},{"age":30}]}"#, "20 30 ");
    }

    #[test]
    fn test_products_document() {
        let extractor = FieldExtractor::new("products.food.Pear");
        assert_eq!(
            extractor.extract_text(PRODUCTS).expect("valid JSON").as_deref(),
            Some("pear 0.89 ")
        );

        let extractor = FieldExtractor::for_paths(["products.food.Apple", "products.food.Orange "]);
        assert_eq!(
            extractor.extract_text(PRODUCTS).expect("valid JSON").as_deref(),
            Some("apple 0.99 100100010101001 orange 600.01 ")
        );
        assert_eq!(
            extractor.extract_value(PRODUCTS).expect("valid JSON"),
            Some(Some(json!({
                "products": {
                    "food": {
                        "Apple": { "name": "apple", "price": 0.99, "sku": 100_100_010_101_001_u64 },
                        "Orange": { "name": "orange", "price": 600.01 }
                    }
                }
            })))
        );
    }

    #[test]
    fn test_non_json_handling() {
        let extractor = FieldExtractor::new("a,b");
        assert_eq!(extractor.extract_text("not json").expect("no error"), None);
        assert_eq!(
            extractor.extract_text_from_slice(b"Some text").expect("no error"),
            None
        );
        assert_eq!(extractor.extract_bytes("").expect("no error"), None);
        assert_eq!(
            extractor.extract_bytes_from_slice(b"Some text").expect("no error"),
            None
        );
        assert_eq!(extractor.extract_json("42").expect("no error"), None);
        assert_eq!(
            extractor.extract_json_from_slice(b" []").expect("no error"),
            None
        );
        assert_eq!(extractor.extract_value("true").expect("no error"), None);
        assert!(extractor.filtered_tokens("x").is_none());
    }

    #[test]
    fn test_whether_extractor_is_empty() {
        for spec in ["field", "a,b", ",b", "path.from.root, "] {
            assert!(!FieldExtractor::new(spec).is_empty(), "spec {spec:?}");
        }
        for spec in ["", "    ", ",", ",,,", " , ,  ", " , ,\t"] {
            assert!(FieldExtractor::new(spec).is_empty(), "spec {spec:?}");
        }
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let extractor = FieldExtractor::new("a");
        let error = extractor
            .extract_text(r#"{"a":1,"b"}"#)
            .expect_err("missing colon");
        assert_eq!(error.kind(), ErrorKind::InvalidJson);
        assert_eq!(error.offset(), Some(10));

        let error = extractor
            .extract_bytes_from_slice(b"{\"a\":\"\xc3\x28\"}")
            .expect_err("invalid UTF-8");
        assert_eq!(error.kind(), ErrorKind::InvalidUtf8);
    }

    #[test]
    fn test_byte_output_is_utf8_text() {
        let extractor = FieldExtractor::new("name");
        let bytes = extractor
            .extract_bytes(r#"{"name":"Zoë","id":7}"#)
            .expect("valid JSON")
            .expect("JSON content");
        assert_eq!(&bytes[..], "Zoë ".as_bytes());
    }

    #[test]
    fn test_filtered_tokens_replay() {
        let extractor = FieldExtractor::new("a.b");
        let tokens = extractor
            .filtered_tokens(r#"{"a":{"b":[1,2],"c":3}}"#)
            .expect("JSON content");
        let mut sink = JsonTextSink::new();
        replay(tokens, &mut sink).expect("valid JSON");
        assert_eq!(sink.finish(), r#"{"a":{"b":[1,2]}}"#);
    }

    #[test]
    fn test_stats_are_recorded() {
        env_logger::try_init().ok();

        let extractor = FieldExtractor::new("a");
        extractor.extract_text(r#"{"a":1}"#).expect("valid JSON");
        extractor.extract_json(r#"[{"a":2}]"#).expect("valid JSON");
        extractor.extract_text("plain text").expect("no error");
        extractor.extract_text(r#"{"a":"#).expect_err("truncated");

        let stats = extractor.stats();
        assert_eq!(stats.documents_processed, 3);
        assert_eq!(stats.documents_skipped, 1);
        assert_eq!(stats.failures, 1);
        assert_eq!(stats.bytes_processed, 7 + 9 + 5);
    }

    #[test]
    fn test_extractor_is_shared_across_threads() {
        let extractor = Arc::new(FieldExtractor::new("arr.name"));
        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let extractor = Arc::clone(&extractor);
                thread::spawn(move || {
                    let doc = format!(r#"{{"arr":[{{"name":"w{worker}","age":1}}]}}"#);
                    extractor.extract_text(&doc).expect("valid JSON")
                })
            })
            .collect();

        for (worker, handle) in handles.into_iter().enumerate() {
            let text = handle.join().expect("worker thread");
            assert_eq!(text, Some(format!("w{worker} ")));
        }
        assert_eq!(extractor.stats().documents_processed, 4);
    }

    #[test]
    fn test_clones_share_stats() {
        let extractor = jsonsift::extractor("a");
        let clone = extractor.clone();
        clone.extract_text(r#"{"a":1}"#).expect("valid JSON");
        assert_eq!(extractor.stats().documents_processed, 1);
        assert_eq!(clone.filter(), extractor.filter());
    }
}
