//! Translation between raw platform records and the domain model
//!
//! The platform returns heterogeneous records carrying both raw values and
//! companion display-value annotations for choice and lookup columns. Reads
//! prefer the display value, fall back to the raw value, and finally to a
//! fixed placeholder; writes use raw logical names only.

use chrono::{DateTime, Utc};
use serde_json::Value;

use ideenportal_platform::{PlatformRecord, TableSchema};

use crate::ownership::Actor;
use crate::status::IdeaStatus;
use crate::types::{Idea, IdeaCreateInput, IdeaPatch, IdeaType};

/// Placeholder shown when neither a display value nor a raw value exists
pub const UNKNOWN_VALUE: &str = "Unknown";

/// Annotation suffix carrying the formatted display value of a column
const FORMATTED_SUFFIX: &str = "@OData.Community.Display.V1.FormattedValue";

/// Separator of the subscriber id list on the wire
const SUBSCRIBER_SEPARATOR: char = ';';

/// Flatten a raw platform record into an [`Idea`]
pub fn idea_from_record(record: &PlatformRecord, schema: &TableSchema) -> Idea {
    let status = IdeaStatus::from_code(raw_i64(record, &schema.status).unwrap_or(-1));
    let idea_type = IdeaType::from_code(raw_i64(record, &schema.idea_type).unwrap_or(-1));

    Idea {
        id: raw_string(record, &schema.id).unwrap_or_default(),
        title: formatted_or_raw(record, &schema.title),
        description: raw_string(record, &schema.description).unwrap_or_default(),
        submitter_id: raw_string(record, &schema.submitter).unwrap_or_default(),
        submitter_name: formatted_or_raw(record, &schema.submitter),
        idea_type,
        status,
        benefit_assessment: raw_string(record, &schema.benefit_assessment),
        effort_estimate_days: raw_f64(record, &schema.effort_estimate),
        planned_quarter: raw_string(record, &schema.planned_quarter),
        implementation_notes: raw_string(record, &schema.implementation_notes),
        subscribers: subscribers_from_wire(raw_string(record, &schema.subscribers).as_deref()),
        created_at: timestamp(record, &schema.created),
        modified_at: timestamp(record, &schema.modified),
        completed_at: optional_timestamp(record, &schema.completed),
    }
}

/// Build the creation payload for a new idea
pub fn create_body(
    input: &IdeaCreateInput,
    submitter: &Actor,
    schema: &TableSchema,
) -> PlatformRecord {
    let mut body = PlatformRecord::new();
    body.insert(schema.title.clone(), Value::from(input.title.clone()));
    body.insert(
        schema.description.clone(),
        Value::from(input.description.clone()),
    );
    body.insert(
        schema.idea_type.clone(),
        Value::from(input.idea_type.unwrap_or_default().code()),
    );
    body.insert(
        schema.status.clone(),
        Value::from(IdeaStatus::Submitted.code()),
    );
    // Lookup columns bind through the navigation property, not the raw value
    body.insert(
        format!("{}@odata.bind", schema.submitter_nav),
        Value::from(format!("/{}({})", schema.users_table, submitter.id)),
    );
    body
}

/// Build the partial-update payload for a patch
pub fn patch_body(patch: &IdeaPatch, schema: &TableSchema) -> PlatformRecord {
    let mut body = PlatformRecord::new();
    if let Some(ref description) = patch.description {
        body.insert(schema.description.clone(), Value::from(description.clone()));
    }
    if let Some(status) = patch.status {
        body.insert(schema.status.clone(), Value::from(status.code()));
    }
    if let Some(ref subscribers) = patch.subscribers {
        body.insert(
            schema.subscribers.clone(),
            Value::from(subscribers_to_wire(subscribers)),
        );
    }
    body
}

/// Split the wire representation of the subscriber list
pub fn subscribers_from_wire(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(SUBSCRIBER_SEPARATOR)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Join the subscriber list into its wire representation
pub fn subscribers_to_wire(subscribers: &[String]) -> String {
    subscribers.join(&SUBSCRIBER_SEPARATOR.to_string())
}

/// Display value of a column, falling back to the raw value, then to `"Unknown"`
fn formatted_or_raw(record: &PlatformRecord, key: &str) -> String {
    let formatted_key = format!("{}{}", key, FORMATTED_SUFFIX);
    if let Some(value) = record.get(&formatted_key).and_then(Value::as_str) {
        if !value.is_empty() {
            return value.to_string();
        }
    }
    raw_string(record, key).unwrap_or_else(|| UNKNOWN_VALUE.to_string())
}

/// Raw value of a column as a string, `None` when absent or null
fn raw_string(record: &PlatformRecord, key: &str) -> Option<String> {
    match record.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    }
}

/// Raw numeric value, `None` when absent or null — never zero-defaulted
fn raw_f64(record: &PlatformRecord, key: &str) -> Option<f64> {
    record.get(key).and_then(Value::as_f64)
}

fn raw_i64(record: &PlatformRecord, key: &str) -> Option<i64> {
    record.get(key).and_then(Value::as_i64)
}

/// Audit timestamp; malformed or missing values fall back to the epoch
fn timestamp(record: &PlatformRecord, key: &str) -> DateTime<Utc> {
    optional_timestamp(record, key).unwrap_or(DateTime::UNIX_EPOCH)
}

fn optional_timestamp(record: &PlatformRecord, key: &str) -> Option<DateTime<Utc>> {
    record
        .get(key)
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_from(value: serde_json::Value) -> PlatformRecord {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    fn schema() -> TableSchema {
        TableSchema::default()
    }

    #[test]
    fn test_prefers_formatted_value() {
        let record = record_from(json!({
            "_dig_einreicher_value": "guid-123",
            "_dig_einreicher_value@OData.Community.Display.V1.FormattedValue": "Max Mustermann",
        }));

        let idea = idea_from_record(&record, &schema());
        assert_eq!(idea.submitter_name, "Max Mustermann");
        assert_eq!(idea.submitter_id, "guid-123");
    }

    #[test]
    fn test_falls_back_to_raw_value() {
        let record = record_from(json!({
            "_dig_einreicher_value": "guid-123",
        }));

        let idea = idea_from_record(&record, &schema());
        assert_eq!(idea.submitter_name, "guid-123");
    }

    #[test]
    fn test_falls_back_to_placeholder() {
        let record = record_from(json!({}));

        let idea = idea_from_record(&record, &schema());
        assert_eq!(idea.submitter_name, UNKNOWN_VALUE);
        assert_eq!(idea.title, UNKNOWN_VALUE);
    }

    #[test]
    fn test_unknown_status_code_defaults_to_submitted() {
        let record = record_from(json!({ "statuscode": 42 }));
        let idea = idea_from_record(&record, &schema());
        assert_eq!(idea.status, IdeaStatus::Submitted);

        let record = record_from(json!({}));
        let idea = idea_from_record(&record, &schema());
        assert_eq!(idea.status, IdeaStatus::Submitted);
    }

    #[test]
    fn test_missing_numeric_is_unset_not_zero() {
        let record = record_from(json!({ "dig_aufwandsschaetzung": null }));
        let idea = idea_from_record(&record, &schema());
        assert_eq!(idea.effort_estimate_days, None);

        let record = record_from(json!({ "dig_aufwandsschaetzung": 12.5 }));
        let idea = idea_from_record(&record, &schema());
        assert_eq!(idea.effort_estimate_days, Some(12.5));
    }

    #[test]
    fn test_malformed_timestamp_falls_back_to_epoch() {
        let record = record_from(json!({ "createdon": "gestern" }));
        let idea = idea_from_record(&record, &schema());
        assert_eq!(idea.created_at, DateTime::UNIX_EPOCH);

        let record = record_from(json!({ "createdon": "2026-03-02T08:15:00Z" }));
        let idea = idea_from_record(&record, &schema());
        assert_eq!(idea.created_at.to_rfc3339(), "2026-03-02T08:15:00+00:00");
    }

    #[test]
    fn test_subscriber_list_round_trip() {
        assert_eq!(
            subscribers_from_wire(Some("a; b;;c")),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert_eq!(subscribers_from_wire(None), Vec::<String>::new());
        assert_eq!(
            subscribers_to_wire(&["a".to_string(), "b".to_string()]),
            "a;b"
        );
    }

    #[test]
    fn test_create_body_binds_submitter_lookup() {
        let input = IdeaCreateInput {
            title: "Digitale Zeiterfassung".to_string(),
            description: "Stundenzettel digital erfassen".to_string(),
            idea_type: None,
        };
        let actor = Actor::new("guid-9", "Max Mustermann");

        let body = create_body(&input, &actor, &schema());
        assert_eq!(body["dig_titel"], "Digitale Zeiterfassung");
        assert_eq!(
            body["dig_Einreicher@odata.bind"],
            "/systemusers(guid-9)"
        );
        assert_eq!(body["statuscode"], IdeaStatus::Submitted.code());
        assert_eq!(body["dig_ideentyp"], IdeaType::Digitalization.code());
    }

    #[test]
    fn test_patch_body_only_carries_set_fields() {
        let patch = IdeaPatch {
            description: Some("Neu".to_string()),
            ..IdeaPatch::default()
        };

        let body = patch_body(&patch, &schema());
        assert_eq!(body.len(), 1);
        assert_eq!(body["dig_beschreibung"], "Neu");
    }
}
