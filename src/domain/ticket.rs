use serde::{Deserialize, Serialize};

/// Pre-authored payload sent verbatim as the create-ticket request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketTemplate {
    pub ticket: TicketFields,
    /// Top-level keys beside `ticket`; passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketFields {
    pub subject: String,
    pub comment: TicketComment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomField>>,
    /// Any other ticket attributes the template carries; passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketComment {
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: u64,
    pub value: serde_json::Value,
}

/// A ticket the external service accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedTicket {
    pub id: u64,
    pub subject: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_template_with_optional_fields() {
        let template: TicketTemplate = serde_json::from_value(json!({
            "ticket": {
                "subject": "Invoice question",
                "comment": { "body": "Why was I charged twice?" },
                "priority": "high",
                "type": "question",
                "tags": ["billing", "sim"],
                "custom_fields": [{ "id": 360001, "value": "tier_gold" }]
            }
        }))
        .unwrap();

        assert_eq!(template.ticket.subject, "Invoice question");
        assert_eq!(template.ticket.ticket_type.as_deref(), Some("question"));
        let fields = template.ticket.custom_fields.as_ref().unwrap();
        assert_eq!(fields[0].id, 360001);
        assert_eq!(fields[0].value, json!("tier_gold"));
        assert!(template.ticket.extra.is_empty());
    }

    #[test]
    fn keeps_unmodelled_attributes() {
        let raw = json!({
            "ticket": {
                "subject": "Partner escalation",
                "comment": { "body": "Need help" },
                "requester": { "name": "Sim User", "email": "sim@example.com" }
            }
        });
        let template: TicketTemplate = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&template).unwrap(), raw);
    }

    #[test]
    fn keeps_top_level_keys_beside_ticket() {
        let raw = json!({
            "ticket": {
                "subject": "Gold partner escalation",
                "comment": { "body": "Client is blocked" }
            },
            "safe_update": true
        });
        let template: TicketTemplate = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(template.extra.get("safe_update"), Some(&json!(true)));
        assert_eq!(serde_json::to_value(&template).unwrap(), raw);
    }

    #[test]
    fn omits_absent_fields_when_sent() {
        let template = TicketTemplate {
            ticket: TicketFields {
                subject: "Hello".to_string(),
                comment: TicketComment {
                    body: "Body".to_string(),
                },
                priority: None,
                ticket_type: None,
                tags: None,
                custom_fields: None,
                extra: serde_json::Map::new(),
            },
            extra: serde_json::Map::new(),
        };
        let value = serde_json::to_value(&template).unwrap();
        assert_eq!(
            value,
            json!({ "ticket": { "subject": "Hello", "comment": { "body": "Body" } } })
        );
    }
}
