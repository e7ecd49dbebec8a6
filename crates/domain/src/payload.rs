use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// An order as submitted by a client. Field names follow the external
/// contract (`numeroPedido`, `valorTotal`, ...), distinct from the shape
/// persisted to storage.
///
/// Every field is optional: a malformed payload deserializes fine and the
/// absent values flow through the mapping step unchanged. Only the create
/// operation validates anything, and only the order id.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    #[validate(
        required(message = "field 'numeroPedido' is required"),
        length(min = 1, message = "field 'numeroPedido' is required")
    )]
    pub numero_pedido: Option<String>,

    pub valor_total: Option<f64>,

    #[serde(default, deserialize_with = "de_flexible_datetime")]
    pub data_criacao: Option<DateTime<Utc>>,

    pub items: Option<Vec<ItemPayload>>,
}

impl OrderPayload {
    /// Check the fields the create operation requires before any storage
    /// call: the order id must be present and non-empty
    pub fn validate_for_create(&self) -> Result<(), DomainError> {
        self.validate()?;
        Ok(())
    }
}

/// A single line item in the external payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    #[serde(default, deserialize_with = "de_numeric_id")]
    pub id_item: Option<i64>,

    pub quantidade_item: Option<f64>,

    pub valor_item: Option<f64>,
}

/// Accepts a product id as either a JSON number or a numeric string
/// ("7" and 7 both map to 7).
fn de_numeric_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumericId {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match Option::<NumericId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumericId::Int(n)) => Ok(Some(n)),
        Some(NumericId::Float(f)) => Ok(Some(f as i64)),
        Some(NumericId::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid numeric id: '{s}'"))),
    }
}

/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS`, or a bare
/// `YYYY-MM-DD` (midnight UTC).
fn de_flexible_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) => parse_datetime(&s).map(Some).map_err(de::Error::custom),
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&dt));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&d.and_time(NaiveTime::MIN)));
    }
    Err(format!("invalid date: '{s}'"))
}
