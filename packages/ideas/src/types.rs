use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::status::IdeaStatus;

/// Classification of an idea
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum IdeaType {
    Digitalization,
    Automation,
    ProcessImprovement,
    Infrastructure,
}

impl Default for IdeaType {
    fn default() -> Self {
        IdeaType::Digitalization
    }
}

impl fmt::Display for IdeaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl IdeaType {
    /// Map a platform choice value to a type
    ///
    /// Unknown or missing codes default to `Digitalization`.
    pub fn from_code(code: i64) -> IdeaType {
        match code {
            100_000_000 => IdeaType::Digitalization,
            100_000_001 => IdeaType::Automation,
            100_000_002 => IdeaType::ProcessImprovement,
            100_000_003 => IdeaType::Infrastructure,
            _ => IdeaType::Digitalization,
        }
    }

    /// The platform choice value for this type
    pub fn code(&self) -> i64 {
        match self {
            IdeaType::Digitalization => 100_000_000,
            IdeaType::Automation => 100_000_001,
            IdeaType::ProcessImprovement => 100_000_002,
            IdeaType::Infrastructure => 100_000_003,
        }
    }

    /// German display label
    pub fn label(&self) -> &'static str {
        match self {
            IdeaType::Digitalization => "Digitalisierung",
            IdeaType::Automation => "Automatisierung",
            IdeaType::ProcessImprovement => "Prozessverbesserung",
            IdeaType::Infrastructure => "Infrastruktur",
        }
    }
}

/// A digitalization idea
///
/// Analysis and planning fields are filled in by process staff on the
/// platform as the status advances; they stay `None` until their stage is
/// reached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idea {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "submitterId")]
    pub submitter_id: String,
    #[serde(rename = "submitterName")]
    pub submitter_name: String,
    #[serde(rename = "ideaType")]
    #[serde(default)]
    pub idea_type: IdeaType,
    #[serde(default)]
    pub status: IdeaStatus,
    #[serde(rename = "benefitAssessment")]
    pub benefit_assessment: Option<String>,
    #[serde(rename = "effortEstimateDays")]
    pub effort_estimate_days: Option<f64>,
    #[serde(rename = "plannedQuarter")]
    pub planned_quarter: Option<String>,
    #[serde(rename = "implementationNotes")]
    pub implementation_notes: Option<String>,
    #[serde(default)]
    pub subscribers: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "modifiedAt")]
    pub modified_at: DateTime<Utc>,
    #[serde(rename = "completedAt")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Input for submitting a new idea
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaCreateInput {
    pub title: String,
    pub description: String,
    #[serde(rename = "ideaType")]
    pub idea_type: Option<IdeaType>,
}

/// Partial update applied to a stored idea
///
/// Only the fields this service is allowed to touch appear here; everything
/// else is owned by the platform's workflow.
#[derive(Debug, Clone, Default)]
pub struct IdeaPatch {
    pub description: Option<String>,
    pub status: Option<IdeaStatus>,
    pub subscribers: Option<Vec<String>>,
}

impl IdeaPatch {
    /// Whether the patch carries no changes
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.status.is_none() && self.subscribers.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idea_type_defaults() {
        assert_eq!(IdeaType::default(), IdeaType::Digitalization);
        assert_eq!(IdeaType::from_code(42), IdeaType::Digitalization);
        assert_eq!(IdeaType::from_code(100_000_001), IdeaType::Automation);
    }

    #[test]
    fn test_empty_patch() {
        assert!(IdeaPatch::default().is_empty());

        let patch = IdeaPatch {
            description: Some("Neu".to_string()),
            ..IdeaPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
