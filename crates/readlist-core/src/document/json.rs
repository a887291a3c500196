//! JSON view of a document.
//!
//! Documents are sent to the extension as JSON. Dates become RFC 3339
//! strings and binary data becomes standard base64, the same shapes the
//! extension already parses.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::SecondsFormat;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::{Document, Number};

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Document::Null => serializer.serialize_unit(),
            Document::Bool(b) => serializer.serialize_bool(*b),
            Document::Number(n) => n.serialize(serializer),
            Document::String(s) => serializer.serialize_str(s),
            Document::Date(date) => {
                serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Document::Data(bytes) => serializer.serialize_str(&BASE64.encode(bytes)),
            Document::Sequence(items) => serializer.collect_seq(items),
            Document::Mapping(map) => serializer.collect_map(map),
        }
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Document::Null,
            Value::Bool(b) => Document::Bool(b),
            Value::Number(n) => {
                let number = if let Some(i) = n.as_i64() {
                    Number::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Number::Unsigned(u)
                } else {
                    Number::Real(n.as_f64().unwrap_or(f64::NAN))
                };
                Document::Number(number)
            }
            Value::String(s) => Document::String(s),
            Value::Array(items) => Document::Sequence(items.into_iter().map(Document::from).collect()),
            Value::Object(map) => map.into_iter().map(|(k, v)| (k, Document::from(v))).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_json_value() {
        let doc = Document::from(json!({
            "Title": "com.apple.ReadingList",
            "Children": [{"URLString": "https://a.example"}, 3, -1, 1.5, null, true],
        }));

        let children = doc.get("Children").unwrap().as_sequence().unwrap();
        assert_eq!(children[0].get("URLString").unwrap().as_str(), Some("https://a.example"));
        assert_eq!(children[1], Document::Number(Number::Integer(3)));
        assert_eq!(children[2], Document::Number(Number::Integer(-1)));
        assert_eq!(children[3], Document::Number(Number::Real(1.5)));
        assert_eq!(children[4], Document::Null);
        assert_eq!(children[5], Document::Bool(true));
    }

    #[test]
    fn test_serialize_preserves_key_order() {
        let doc = Document::from_iter([
            ("b", Document::from(1_i64)),
            ("a", Document::from(2_i64)),
        ]);
        assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"b":1,"a":2}"#);
    }

    #[test]
    fn test_serialize_date_and_data() {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let doc = Document::from_iter([
            ("DateAdded", Document::Date(date)),
            ("Blob", Document::Data(vec![0xde, 0xad, 0xbe, 0xef])),
        ]);

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            json!({
                "DateAdded": "2024-03-01T09:30:00Z",
                "Blob": "3q2+7w==",
            })
        );
    }

    #[test]
    fn test_json_roundtrip_for_plain_values() {
        let original = json!({
            "Children": [{"Title": "x", "Children": []}],
            "WebBookmarkFileVersion": 1,
            "Flag": false,
        });
        let doc = Document::from(original.clone());
        assert_eq!(serde_json::to_value(&doc).unwrap(), original);
    }
}
