use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use serde_json::Value;

use crate::domain::ticket::CreatedTicket;
use crate::domain::ticket_type::TicketTypeId;
use crate::error::{AppError, AppResult};

/// One `type -> count` pair as the caller supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub key: String,
    /// `None` when the key is not in the catalog.
    pub ticket_type: Option<TicketTypeId>,
    pub count: i64,
}

impl BatchEntry {
    pub fn new(key: impl Into<String>, count: i64) -> Self {
        let key = key.into();
        let ticket_type = TicketTypeId::from_str(&key);
        Self {
            key,
            ticket_type,
            count,
        }
    }
}

/// Requested counts per ticket type, in caller order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchRequest {
    entries: Vec<BatchEntry>,
}

impl BatchRequest {
    pub fn from_counts<I, K>(counts: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        Self {
            entries: counts
                .into_iter()
                .map(|(key, count)| BatchEntry::new(key, count))
                .collect(),
        }
    }

    /// Parses an inbound `{ "counts": { type: n, ... } }` body.
    pub fn from_json(body: &[u8]) -> AppResult<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|err| {
            AppError::InvalidRequest(format!("request body must be valid JSON: {err}"))
        })?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> AppResult<Self> {
        let counts = match value.get("counts") {
            Some(Value::Object(counts)) => counts,
            _ => {
                return Err(AppError::InvalidRequest(
                    "counts must be an object".to_string(),
                ));
            }
        };

        let mut entries = Vec::with_capacity(counts.len());
        for (key, raw) in counts {
            let count = whole_count(raw).ok_or_else(|| {
                AppError::InvalidRequest(format!("counts.{key} must be an integer"))
            })?;
            entries.push(BatchEntry::new(key.as_str(), count));
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }
}

/// Reads a whole-valued JSON number. Values beyond `i64` saturate so they
/// still fail the per-entry range check.
fn whole_count(raw: &Value) -> Option<i64> {
    if let Some(count) = raw.as_i64() {
        return Some(count);
    }
    if raw.is_u64() {
        return Some(i64::MAX);
    }
    raw.as_f64()
        .filter(|value| value.fract() == 0.0)
        .map(|value| value as i64)
}

/// Created tickets grouped by request key; serializes as a JSON object in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketsByType(Vec<(String, Vec<CreatedTicket>)>);

impl TicketsByType {
    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&[CreatedTicket]> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, tickets)| tickets.as_slice())
    }

    fn slot(&mut self, key: &str) -> &mut Vec<CreatedTicket> {
        let index = match self.0.iter().position(|(k, _)| k == key) {
            Some(index) => index,
            None => {
                self.0.push((key.to_string(), Vec::new()));
                self.0.len() - 1
            }
        };
        &mut self.0[index].1
    }
}

impl Serialize for TicketsByType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, tickets) in &self.0 {
            map.serialize_entry(key, tickets)?;
        }
        map.end()
    }
}

/// Outcome of one batch run, built up as entries are processed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub success: u64,
    pub failed: u64,
    pub errors: Vec<String>,
    pub tickets: TicketsByType,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type that passed validation so it is listed even if every attempt fails.
    pub fn open_type(&mut self, key: &str) {
        self.tickets.slot(key);
    }

    pub fn record_created(&mut self, key: &str, ticket: CreatedTicket) {
        self.success += 1;
        self.tickets.slot(key).push(ticket);
    }

    pub fn record_attempt_failure(
        &mut self,
        key: &str,
        attempt: u32,
        detail: impl std::fmt::Display,
    ) {
        self.failed += 1;
        self.errors.push(format!("{key} #{attempt}: {detail}"));
    }

    /// Records a rejected entry. Negative counts add nothing to `failed`.
    pub fn record_rejection(&mut self, message: String, requested: i64) {
        self.failed = self.failed.saturating_add(requested.max(0) as u64);
        self.errors.push(message);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn ticket(id: u64) -> CreatedTicket {
        CreatedTicket {
            id,
            subject: format!("Subject {id}"),
            url: format!("https://acme.zendesk.com/agent/tickets/{id}"),
        }
    }

    #[test]
    fn parses_counts_in_caller_order() {
        let request =
            BatchRequest::from_json(br#"{"counts": {"standard": 2, "bogus": 3, "k1": 0}}"#)
                .unwrap();
        let keys: Vec<_> = request.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["standard", "bogus", "k1"]);
        assert_eq!(request.entries()[0].ticket_type, Some(TicketTypeId::Standard));
        assert_eq!(request.entries()[1].ticket_type, None);
        assert_eq!(request.entries()[1].count, 3);
    }

    #[test]
    fn rejects_missing_or_non_object_counts() {
        for body in [r#"{}"#, r#"{"counts": [1, 2]}"#, r#"{"counts": null}"#, r#"[]"#] {
            let err = BatchRequest::from_json(body.as_bytes()).unwrap_err();
            assert!(matches!(err, AppError::InvalidRequest(_)), "{body}");
            assert_eq!(err.to_string(), "counts must be an object");
        }
    }

    #[test]
    fn rejects_malformed_json() {
        let err = BatchRequest::from_json(b"{counts:").unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[test]
    fn rejects_non_integer_counts() {
        for body in [
            r#"{"counts": {"standard": "2"}}"#,
            r#"{"counts": {"standard": 1.5}}"#,
            r#"{"counts": {"standard": null}}"#,
        ] {
            let err = BatchRequest::from_json(body.as_bytes()).unwrap_err();
            assert_eq!(err.to_string(), "counts.standard must be an integer");
        }
    }

    #[test]
    fn whole_valued_floats_are_counts() {
        let request =
            BatchRequest::from_json(br#"{"counts": {"standard": 2.0, "k1": -3.0}}"#).unwrap();
        assert_eq!(request.entries()[0].count, 2);
        assert_eq!(request.entries()[1].count, -3);
    }

    #[test]
    fn counts_beyond_i64_saturate() {
        let request = BatchRequest::from_json(
            br#"{"counts": {"standard": 10000000000000000000, "k1": 1e300}}"#,
        )
        .unwrap();
        assert_eq!(request.entries()[0].count, i64::MAX);
        assert_eq!(request.entries()[1].count, i64::MAX);
    }

    #[test]
    fn rejection_tally_saturates() {
        let mut report = BatchReport::new();
        for key in ["a", "b", "c"] {
            report.record_rejection(format!("{key}: count must be between 0 and 100"), i64::MAX);
        }
        assert_eq!(report.failed, u64::MAX);
        assert_eq!(report.errors.len(), 3);
    }

    #[test]
    fn keeps_negative_counts_for_validation() {
        let request = BatchRequest::from_json(br#"{"counts": {"growth": -4}}"#).unwrap();
        assert_eq!(request.entries()[0].count, -4);
    }

    #[test]
    fn rejection_clamps_negative_counts() {
        let mut report = BatchReport::new();
        report.record_rejection("growth: count must be between 0 and 100".to_string(), -4);
        assert_eq!(report.failed, 0);
        report.record_rejection("Invalid ticket type: bogus".to_string(), 3);
        assert_eq!(report.failed, 3);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn serializes_report_shape() {
        let mut report = BatchReport::new();
        report.open_type("standard");
        report.record_created("standard", ticket(11));
        report.open_type("k1");
        report.record_attempt_failure("k1", 1, "HTTP 500: boom");

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            json!({
                "success": 1,
                "failed": 1,
                "errors": ["k1 #1: HTTP 500: boom"],
                "tickets": {
                    "standard": [{
                        "id": 11,
                        "subject": "Subject 11",
                        "url": "https://acme.zendesk.com/agent/tickets/11"
                    }],
                    "k1": []
                }
            })
        );

        let rendered = serde_json::to_string(&report.tickets).unwrap();
        assert!(rendered.find("standard").unwrap() < rendered.find("k1").unwrap());
    }
}
