use serde::Deserialize;
use serde::Serialize;

/// Field that holds either a 32-bit integer or a string, such as `maxSurge: 1` or `maxSurge: "25%"`.
/// Serialized as the bare inner value.
#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
#[serde(untagged)]
pub enum Int32OrString {
    Int(i32),
    String(String),
}

impl Default for Int32OrString {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl From<&str> for Int32OrString {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use super::Int32OrString;

    #[test]
    fn test_percent_and_int() {
        let surge: Int32OrString = serde_json::from_value(json!("25%")).expect("string");
        assert_eq!(surge, Int32OrString::from("25%"));

        let unavailable: Int32OrString = serde_json::from_value(json!(1)).expect("int");
        assert_eq!(unavailable, Int32OrString::Int(1));
        assert_eq!(serde_json::to_value(&unavailable).expect("serialize"), json!(1));
    }

    #[test]
    fn test_reject_float() {
        serde_json::from_value::<Int32OrString>(json!(2.5))
            .expect_err("float should not be deserialized");
    }
}
