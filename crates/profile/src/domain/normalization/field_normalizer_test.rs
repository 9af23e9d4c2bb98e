#[cfg(test)]
mod tests {
    use crate::domain::entries::{AppointmentSettings, Experience, FeaturedVideo, HighlightEntry};
    use crate::domain::normalization::{
        has_truthy_url, is_object, normalize_entries, normalize_list, normalize_object,
        normalize_record,
    };
    use serde_json::{json, Value};

    fn degenerate_inputs() -> Vec<Option<Value>> {
        vec![
            None,
            Some(json!(null)),
            Some(json!("")),
            Some(json!("not json")),
            Some(json!(42)),
            Some(json!(true)),
            Some(json!({})),
            Some(json!("{}")),
            Some(json!("   ")),
            Some(json!("\"[{\\\"url\\\":\\\"http://x\\\"}]\"")),
        ]
    }

    #[test]
    fn test_normalize_list_degrades_to_empty() {
        for raw in degenerate_inputs() {
            let result = normalize_list(raw.as_ref(), has_truthy_url);
            assert!(result.is_empty(), "FAIL: expected [] for {:?}", raw);
        }
    }

    #[test]
    fn test_normalize_list_filters_array_preserving_order() {
        let raw = json!([
            {"url": "a"},
            {"url": ""},
            null,
            {"url": "c"},
            "https://plain-string.com",
            {"title": "missing url"}
        ]);

        let result = normalize_list(Some(&raw), has_truthy_url);
        assert_eq!(result, vec![json!({"url": "a"}), json!({"url": "c"})]);
    }

    #[test]
    fn test_normalize_list_parses_json_string() {
        let raw = json!(r#"[{"url":"http://x"}]"#);
        let result = normalize_list(Some(&raw), has_truthy_url);
        assert_eq!(result, vec![json!({"url": "http://x"})]);
    }

    #[test]
    fn test_normalize_list_filters_parsed_string() {
        let raw = json!(r#"[{"url":"http://x"}, {"url": null}, 3]"#);
        let result = normalize_list(Some(&raw), has_truthy_url);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_normalize_list_is_idempotent() {
        let inputs = vec![
            Some(json!([{"url": "a"}, {"nope": 1}, {"url": "b"}])),
            Some(json!(r#"[{"url":"x"},{"url":0}]"#)),
            Some(json!("garbage")),
            None,
        ];

        for raw in inputs {
            let once = normalize_list(raw.as_ref(), has_truthy_url);
            let twice = normalize_list(Some(&Value::Array(once.clone())), has_truthy_url);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_normalize_object_keeps_plain_objects() {
        let raw = json!({"url": "https://youtu.be/1", "title": "Demo"});
        let result = normalize_object(Some(&raw)).expect("FAIL: object should survive");
        assert_eq!(Value::Object(result), raw);
    }

    #[test]
    fn test_normalize_object_parses_string() {
        let raw = json!(r#"{"enabled": true}"#);
        let result = normalize_object(Some(&raw)).expect("FAIL: JSON object string should parse");
        assert_eq!(result.get("enabled"), Some(&json!(true)));
    }

    #[test]
    fn test_normalize_object_rejects_non_objects() {
        for raw in [
            json!([1, 2]),
            json!(7),
            json!("not json"),
            json!("[]"),
            json!("null"),
            json!(""),
            json!(null),
        ] {
            assert!(normalize_object(Some(&raw)).is_none(), "FAIL: expected None for {raw}");
        }
        assert!(normalize_object(None).is_none());
    }

    #[test]
    fn test_normalize_entries_types_highlights() {
        let raw = json!(r#"[{"id": 1, "url": "https://x.com/a/status/1", "title": "Launch"}, {"url": ""}]"#);
        let entries: Vec<HighlightEntry> = normalize_entries(Some(&raw));

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id.as_str(), "1");
        assert_eq!(entries[0].title.as_deref(), Some("Launch"));
    }

    #[test]
    fn test_normalize_entries_drops_only_non_objects() {
        let raw = json!([{"company": "Acme", "title": "Dev"}, "junk", 12, {"company": "Beta"}]);
        let entries: Vec<Experience> = normalize_entries(Some(&raw));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].company, "Acme");
        assert_eq!(entries[1].company, "Beta");
    }

    #[test]
    fn test_normalize_record_typed() {
        let video: Option<FeaturedVideo> =
            normalize_record(Some(&json!(r#"{"url": "https://youtu.be/1"}"#)));
        assert_eq!(video.map(|v| v.url), Some("https://youtu.be/1".to_string()));

        let appointments: Option<AppointmentSettings> = normalize_record(Some(&json!([])));
        assert!(appointments.is_none());
    }

    #[test]
    fn test_is_object_predicate_with_list() {
        let raw = json!([{}, [], null, {"a": 1}]);
        assert_eq!(normalize_list(Some(&raw), is_object).len(), 2);
    }
}
