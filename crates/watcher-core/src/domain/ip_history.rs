use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of a user's IP history as returned by `get_user_ips`.
///
/// Timestamps are kept raw; see [`crate::domain::timestamp`] for parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpHistoryRow {
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub first_seen: Option<Value>,
    #[serde(default)]
    pub last_seen: Option<Value>,
    #[serde(default)]
    pub last_played: Option<Value>,
}

impl IpHistoryRow {
    /// The IP address, if present and non-empty.
    pub fn ip(&self) -> Option<&str> {
        self.ip_address.as_deref().filter(|ip| !ip.is_empty())
    }
}

/// The `data` field of a `get_user_ips` payload.
///
/// Tautulli normally answers with a table envelope
/// (`{"draw": .., "recordsTotal": .., "data": [...]}`) but a flat array is
/// accepted too. Any other shape carries no rows.
#[derive(Debug, Clone, PartialEq)]
pub enum IpRowsPayload {
    Table(Vec<Value>),
    Flat(Vec<Value>),
    Empty,
}

impl IpRowsPayload {
    pub fn decode(data: Option<Value>) -> Self {
        match data {
            Some(Value::Array(rows)) => Self::Flat(rows),
            Some(Value::Object(mut table)) => match table.remove("data") {
                Some(Value::Array(rows)) => Self::Table(rows),
                _ => Self::Empty,
            },
            _ => Self::Empty,
        }
    }

    pub fn into_rows(self) -> Vec<Value> {
        match self {
            Self::Table(rows) | Self::Flat(rows) => rows,
            Self::Empty => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_table_envelope() {
        let payload = IpRowsPayload::decode(Some(json!({
            "draw": 1,
            "recordsTotal": 2,
            "data": [{"ip_address": "a"}, {"ip_address": "b"}]
        })));
        assert!(matches!(payload, IpRowsPayload::Table(_)));
        assert_eq!(
            payload.into_rows(),
            vec![json!({"ip_address": "a"}), json!({"ip_address": "b"})]
        );
    }

    #[test]
    fn test_flat_array() {
        let payload = IpRowsPayload::decode(Some(json!([{"ip_address": "a"}])));
        assert!(matches!(payload, IpRowsPayload::Flat(_)));
        assert_eq!(payload.into_rows(), vec![json!({"ip_address": "a"})]);
    }

    #[test]
    fn test_other_shapes_are_empty() {
        assert_eq!(IpRowsPayload::decode(Some(json!({}))), IpRowsPayload::Empty);
        assert_eq!(IpRowsPayload::decode(Some(json!({"data": "x"}))), IpRowsPayload::Empty);
        assert_eq!(IpRowsPayload::decode(Some(Value::Null)), IpRowsPayload::Empty);
        assert_eq!(IpRowsPayload::decode(Some(json!("rows"))), IpRowsPayload::Empty);
        assert!(IpRowsPayload::decode(None).into_rows().is_empty());
    }

    #[test]
    fn test_blank_ip_is_none() {
        let row = IpHistoryRow {
            ip_address: Some(String::new()),
            ..IpHistoryRow::default()
        };
        assert!(row.ip().is_none());
    }
}
