use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde_json::Value;

static JSON_LD_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"script[type="application/ld+json"]"#).expect("valid selector"));

/// Raw text of every embedded JSON-LD block, in document order.
pub fn raw_blocks(document: &Html) -> Vec<String> {
    document
        .select(&JSON_LD_SELECTOR)
        .map(|script| script.text().collect::<String>())
        .collect()
}

pub fn parse_block(raw: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(raw)
}

/// The objects a block describes: the members of a `@graph` array when one
/// is present, otherwise the block itself.
pub fn block_objects(block: &Value) -> Vec<&Value> {
    match block.get("@graph").and_then(Value::as_array) {
        Some(graph) => graph.iter().collect(),
        None => vec![block],
    }
}

/// All objects of the given `@type` in a block, top-level or under `@graph`.
pub fn typed_objects<'a>(block: &'a Value, type_name: &str) -> Vec<&'a Value> {
    block_objects(block)
        .into_iter()
        .filter(|object| object_type(object) == Some(type_name))
        .collect()
}

pub fn object_type(object: &Value) -> Option<&str> {
    object.get("@type").and_then(Value::as_str)
}

pub fn str_field<'a>(object: &'a Value, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

pub fn f64_field(object: &Value, key: &str) -> Option<f64> {
    object.get(key).and_then(Value::as_f64)
}

pub fn has_field(object: &Value, key: &str) -> bool {
    object.get(key).is_some()
}

/// Whether a field is present with a usable value: empty strings and empty
/// arrays do not count.
pub fn non_empty_field(object: &Value, key: &str) -> bool {
    match object.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(_) => true,
    }
}

/// Number of entries a field carries: array length, or 1 for any other
/// present value.
pub fn entry_count(object: &Value, key: &str) -> usize {
    match object.get(key) {
        None | Some(Value::Null) => 0,
        Some(Value::Array(items)) => items.len(),
        Some(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_blocks_extracts_script_contents() {
        let html = r#"
            <html><head>
                <script type="application/ld+json">{"@type": "WebPage"}</script>
                <script type="text/javascript">ignored()</script>
                <script type="application/ld+json">{"@graph": []}</script>
            </head><body></body></html>
        "#;
        let document = Html::parse_document(html);
        let blocks = raw_blocks(&document);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("WebPage"));
    }

    #[test]
    fn test_typed_objects_at_top_level() {
        let block = json!({"@context": "https://schema.org", "@type": "LocalBusiness", "name": "X"});
        assert_eq!(typed_objects(&block, "LocalBusiness").len(), 1);
        assert!(typed_objects(&block, "WebPage").is_empty());
    }

    #[test]
    fn test_typed_objects_under_graph() {
        let block = json!({
            "@context": "https://schema.org",
            "@graph": [
                {"@type": "WebPage", "name": "Home"},
                {"@type": "LocalBusiness", "name": "Shop"},
                {"@type": "WebPage", "name": "Contact"}
            ]
        });
        assert_eq!(typed_objects(&block, "WebPage").len(), 2);
        assert_eq!(
            str_field(typed_objects(&block, "LocalBusiness")[0], "name"),
            Some("Shop")
        );
    }

    #[test]
    fn test_f64_field_rejects_strings() {
        let object = json!({"latitude": "45.6484", "longitude": 0.1560});
        assert_eq!(f64_field(&object, "latitude"), None);
        assert_eq!(f64_field(&object, "longitude"), Some(0.1560));
    }

    #[test]
    fn test_non_empty_field() {
        let object = json!({"a": "", "b": [], "c": "x", "d": ["y"], "e": {"k": 1}});
        assert!(!non_empty_field(&object, "a"));
        assert!(!non_empty_field(&object, "b"));
        assert!(!non_empty_field(&object, "missing"));
        assert!(non_empty_field(&object, "c"));
        assert!(non_empty_field(&object, "d"));
        assert!(non_empty_field(&object, "e"));
    }

    #[test]
    fn test_entry_count() {
        let object = json!({"offers": [1, 2, 3], "single": "only one"});
        assert_eq!(entry_count(&object, "offers"), 3);
        assert_eq!(entry_count(&object, "single"), 1);
        assert_eq!(entry_count(&object, "missing"), 0);
    }
}
