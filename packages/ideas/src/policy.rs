//! Status-driven field visibility and editability
//!
//! A static table keyed by lifecycle status. Visibility grows as the
//! workflow advances; editability exists only while the submitter can still
//! shape the idea, and then only for the description.

use serde::{Deserialize, Serialize};

use crate::status::IdeaStatus;

/// User-facing fields of an idea
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum IdeaField {
    Title,
    Description,
    SubmitterName,
    IdeaType,
    Status,
    BenefitAssessment,
    EffortEstimateDays,
    PlannedQuarter,
    ImplementationNotes,
    CreatedAt,
    CompletedAt,
}

/// Visible and editable fields for one status
#[derive(Debug, Clone, Copy)]
pub struct FieldPolicy {
    pub visible: &'static [IdeaField],
    pub editable: &'static [IdeaField],
}

impl FieldPolicy {
    /// Whether a field may be edited under this policy
    pub fn can_edit(&self, field: IdeaField) -> bool {
        self.editable.contains(&field)
    }

    /// Whether a field is shown under this policy
    pub fn is_visible(&self, field: IdeaField) -> bool {
        self.visible.contains(&field)
    }
}

const BASE_FIELDS: &[IdeaField] = &[
    IdeaField::Title,
    IdeaField::Description,
    IdeaField::SubmitterName,
    IdeaField::IdeaType,
    IdeaField::Status,
    IdeaField::CreatedAt,
];

const ANALYSIS_FIELDS: &[IdeaField] = &[
    IdeaField::Title,
    IdeaField::Description,
    IdeaField::SubmitterName,
    IdeaField::IdeaType,
    IdeaField::Status,
    IdeaField::CreatedAt,
    IdeaField::BenefitAssessment,
    IdeaField::EffortEstimateDays,
];

const PLANNING_FIELDS: &[IdeaField] = &[
    IdeaField::Title,
    IdeaField::Description,
    IdeaField::SubmitterName,
    IdeaField::IdeaType,
    IdeaField::Status,
    IdeaField::CreatedAt,
    IdeaField::BenefitAssessment,
    IdeaField::EffortEstimateDays,
    IdeaField::PlannedQuarter,
];

const IMPLEMENTATION_FIELDS: &[IdeaField] = &[
    IdeaField::Title,
    IdeaField::Description,
    IdeaField::SubmitterName,
    IdeaField::IdeaType,
    IdeaField::Status,
    IdeaField::CreatedAt,
    IdeaField::BenefitAssessment,
    IdeaField::EffortEstimateDays,
    IdeaField::PlannedQuarter,
    IdeaField::ImplementationNotes,
];

const CLOSED_FIELDS: &[IdeaField] = &[
    IdeaField::Title,
    IdeaField::Description,
    IdeaField::SubmitterName,
    IdeaField::IdeaType,
    IdeaField::Status,
    IdeaField::CreatedAt,
    IdeaField::BenefitAssessment,
    IdeaField::EffortEstimateDays,
    IdeaField::PlannedQuarter,
    IdeaField::ImplementationNotes,
    IdeaField::CompletedAt,
];

const DESCRIPTION_ONLY: &[IdeaField] = &[IdeaField::Description];
const NO_FIELDS: &[IdeaField] = &[];

/// Field policy for a lifecycle status
pub fn policy_for(status: IdeaStatus) -> FieldPolicy {
    match status {
        IdeaStatus::Submitted | IdeaStatus::NeedsRevision => FieldPolicy {
            visible: BASE_FIELDS,
            editable: DESCRIPTION_ONLY,
        },
        IdeaStatus::UnderReview | IdeaStatus::Accepted => FieldPolicy {
            visible: BASE_FIELDS,
            editable: NO_FIELDS,
        },
        IdeaStatus::InAnalysis | IdeaStatus::Deferred => FieldPolicy {
            visible: ANALYSIS_FIELDS,
            editable: NO_FIELDS,
        },
        IdeaStatus::InPlanning => FieldPolicy {
            visible: PLANNING_FIELDS,
            editable: NO_FIELDS,
        },
        IdeaStatus::InImplementation | IdeaStatus::InTesting => FieldPolicy {
            visible: IMPLEMENTATION_FIELDS,
            editable: NO_FIELDS,
        },
        IdeaStatus::Completed | IdeaStatus::Rejected => FieldPolicy {
            visible: CLOSED_FIELDS,
            editable: NO_FIELDS,
        },
    }
}
