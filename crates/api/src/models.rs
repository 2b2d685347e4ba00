//! Jira wire types

use serde::{Deserialize, Serialize};

/// A single issue as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

impl Issue {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            id: None,
            self_link: None,
        }
    }
}

/// Search envelope. Issue order is kept as the server sent it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueResponse {
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// Body of an issue edit touching exactly one field:
/// `{"fields": {"<field>": <value>}}`.
#[derive(Debug, Serialize)]
pub struct FieldUpdate<'a, V: Serialize + ?Sized> {
    fields: SingleField<'a, V>,
}

#[derive(Debug)]
struct SingleField<'a, V: ?Sized> {
    name: &'a str,
    value: &'a V,
}

impl<V: Serialize + ?Sized> Serialize for SingleField<'_, V> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.name, self.value)?;
        map.end()
    }
}

impl<'a, V: Serialize + ?Sized> FieldUpdate<'a, V> {
    pub fn new(field: &'a str, value: &'a V) -> Self {
        Self {
            fields: SingleField { name: field, value },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_search_envelope_in_order() {
        let body = json!({
            "startAt": 0,
            "total": 3,
            "issues": [
                {"id": "10001", "key": "TU-2", "self": "https://jira/rest/api/2/issue/10001", "fields": {}},
                {"key": "TU-1"},
                {"key": "TU-3"}
            ]
        });
        let response: IssueResponse = serde_json::from_value(body).unwrap();
        let keys: Vec<_> = response.issues.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, ["TU-2", "TU-1", "TU-3"]);
        assert_eq!(response.issues[0].id.as_deref(), Some("10001"));
        assert_eq!(response.issues[1], Issue::new("TU-1"));
    }

    #[test]
    fn missing_issues_is_empty() {
        let response: IssueResponse = serde_json::from_str("{}").unwrap();
        assert!(response.issues.is_empty());
    }

    #[test]
    fn issue_without_key_is_rejected() {
        let result = serde_json::from_str::<IssueResponse>(r#"{"issues":[{"id":"1"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn field_update_shape() {
        let value = json!({"id": "11755"});
        let payload = FieldUpdate::new("customfield_10506", &value);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"fields": {"customfield_10506": {"id": "11755"}}})
        );

        let payload = FieldUpdate::new("customfield_10001", "plain text");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"fields": {"customfield_10001": "plain text"}})
        );
    }
}
