use crate::record::Record;
use serde_json::json;
use std::fmt::Display;

/// Key of the fallback object emitted when a record cannot be serialized.
pub const ERROR_KEY: &str = "logger-error";

/// 将记录序列化为单行 JSON
///
/// 序列化失败时不会 panic，而是输出只包含错误描述的对象。
pub fn json_format(record: &Record) -> String {
    match serde_json::to_string(record) {
        Ok(json) => json,
        Err(e) => error_line(&e),
    }
}

pub(crate) fn error_line(err: &impl Display) -> String {
    json!({ ERROR_KEY: err.to_string() }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::record::Attrs;
    use serde_json::Value;

    #[test]
    fn test_round_trip_keeps_identity_fields() {
        let mut attrs = Attrs::new();
        attrs.insert("rows".to_string(), Value::from(42));
        let record = Record::new("database", Level::Error, "query failed: \"users\"")
            .with_attrs(attrs);

        let line = json_format(&record);
        assert!(!line.contains('\n'));

        let decoded: Record = serde_json::from_str(&line).unwrap();
        assert_eq!(decoded.package, record.package);
        assert_eq!(decoded.level, record.level);
        assert_eq!(decoded.message, record.message);
        assert_eq!(decoded.attrs, record.attrs);
    }

    #[test]
    fn test_nil_attrs_is_null() {
        let line = json_format(&Record::new("users", Level::Info, "hi"));
        let value: Value = serde_json::from_str(&line).unwrap();
        assert!(value["Attrs"].is_null());
        assert_eq!(value["Package"], "users");
    }

    #[test]
    fn test_error_line_is_valid_json() {
        let line = error_line(&"key must be a string \"x\"");
        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 1);
        assert_eq!(value[ERROR_KEY], "key must be a string \"x\"");
    }
}
