//! Built-in sample dataset served in demo mode

use chrono::{DateTime, Utc};

use crate::status::IdeaStatus;
use crate::types::{Idea, IdeaType};

/// Directory id of the demo actor used when no token is presented
pub const DEMO_USER_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Display name of the demo actor
pub const DEMO_USER_NAME: &str = "Demo Mitarbeiter";

fn ts(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// The fixed demo dataset
///
/// Covers the workflow breadth: one freshly submitted idea owned by the demo
/// actor, one sent back for revision, and two that have advanced far enough
/// to carry analysis and planning data.
pub fn sample_ideas() -> Vec<Idea> {
    vec![
        Idea {
            id: "c1a94702-48f2-4e6b-9d1a-6a2f9b3e0c11".to_string(),
            title: "Papierloses Onboarding".to_string(),
            description: "Alle Onboarding-Formulare digital bereitstellen und unterschreiben."
                .to_string(),
            submitter_id: DEMO_USER_ID.to_string(),
            submitter_name: DEMO_USER_NAME.to_string(),
            idea_type: IdeaType::Digitalization,
            status: IdeaStatus::Submitted,
            benefit_assessment: None,
            effort_estimate_days: None,
            planned_quarter: None,
            implementation_notes: None,
            subscribers: vec![DEMO_USER_ID.to_string()],
            created_at: ts("2026-06-12T09:15:00Z"),
            modified_at: ts("2026-06-12T09:15:00Z"),
            completed_at: None,
        },
        Idea {
            id: "7f3b8a10-52cd-4a57-8c2e-4d9e1f6b0a22".to_string(),
            title: "Chatbot für IT-Support".to_string(),
            description: "Häufige IT-Anfragen automatisch beantworten und Tickets vorqualifizieren."
                .to_string(),
            submitter_id: DEMO_USER_ID.to_string(),
            submitter_name: DEMO_USER_NAME.to_string(),
            idea_type: IdeaType::Automation,
            status: IdeaStatus::NeedsRevision,
            benefit_assessment: None,
            effort_estimate_days: None,
            planned_quarter: None,
            implementation_notes: None,
            subscribers: vec![DEMO_USER_ID.to_string()],
            created_at: ts("2026-05-28T14:40:00Z"),
            modified_at: ts("2026-06-02T08:05:00Z"),
            completed_at: None,
        },
        Idea {
            id: "3e6d2c55-91ab-4f08-b7d3-2c8f5a1e9d33".to_string(),
            title: "Automatisierte Rechnungsprüfung".to_string(),
            description: "Eingangsrechnungen automatisch gegen Bestellungen abgleichen."
                .to_string(),
            submitter_id: "f47ac10b-58cc-4372-a567-0e02b2c3d479".to_string(),
            submitter_name: "Erika Musterfrau".to_string(),
            idea_type: IdeaType::ProcessImprovement,
            status: IdeaStatus::InAnalysis,
            benefit_assessment: Some("Spart ca. 2 Stunden pro Woche in der Buchhaltung.".to_string()),
            effort_estimate_days: Some(15.0),
            planned_quarter: None,
            implementation_notes: None,
            subscribers: vec![
                "f47ac10b-58cc-4372-a567-0e02b2c3d479".to_string(),
                DEMO_USER_ID.to_string(),
            ],
            created_at: ts("2026-04-03T11:20:00Z"),
            modified_at: ts("2026-05-15T16:30:00Z"),
            completed_at: None,
        },
        Idea {
            id: "9b2e7f44-6d13-4c89-a0e5-8f4c3b7d2a44".to_string(),
            title: "Digitale Urlaubsanträge".to_string(),
            description: "Urlaubsanträge über ein Self-Service-Portal statt per Formular."
                .to_string(),
            submitter_id: "f47ac10b-58cc-4372-a567-0e02b2c3d479".to_string(),
            submitter_name: "Erika Musterfrau".to_string(),
            idea_type: IdeaType::Digitalization,
            status: IdeaStatus::Completed,
            benefit_assessment: Some("Weniger Papier, schnellere Genehmigung.".to_string()),
            effort_estimate_days: Some(8.0),
            planned_quarter: Some("Q1/2026".to_string()),
            implementation_notes: Some("Umgesetzt mit dem bestehenden HR-Portal.".to_string()),
            subscribers: vec!["f47ac10b-58cc-4372-a567-0e02b2c3d479".to_string()],
            created_at: ts("2025-11-10T08:00:00Z"),
            modified_at: ts("2026-02-20T13:45:00Z"),
            completed_at: Some(ts("2026-02-20T13:45:00Z")),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ideas_have_unique_ids() {
        let ideas = sample_ideas();
        let mut ids: Vec<_> = ideas.iter().map(|i| i.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), ideas.len());
    }

    #[test]
    fn test_sample_respects_progressive_population() {
        for idea in sample_ideas() {
            if idea.status == IdeaStatus::Submitted {
                assert!(idea.benefit_assessment.is_none());
                assert!(idea.effort_estimate_days.is_none());
            }
            if idea.status.is_terminal() {
                assert!(idea.completed_at.is_some());
            }
        }
    }

    #[test]
    fn test_demo_actor_owns_an_editable_idea() {
        let editable = sample_ideas().into_iter().any(|idea| {
            idea.submitter_id == DEMO_USER_ID
                && matches!(
                    idea.status,
                    IdeaStatus::Submitted | IdeaStatus::NeedsRevision
                )
        });
        assert!(editable);
    }
}
