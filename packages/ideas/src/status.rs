//! Lifecycle status of an idea and its mapping to platform wire codes
//!
//! The platform stores the status as a numeric choice column and drives all
//! transitions through its own workflow engine; this module only translates
//! between the wire codes and the domain enum. Unknown codes map to the
//! initial status rather than erroring, so a misconfigured choice value on
//! the platform side never breaks a read.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an idea
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum IdeaStatus {
    Submitted,
    UnderReview,
    NeedsRevision,
    Accepted,
    InAnalysis,
    InPlanning,
    InImplementation,
    InTesting,
    Completed,
    Rejected,
    Deferred,
}

impl Default for IdeaStatus {
    fn default() -> Self {
        IdeaStatus::Submitted
    }
}

impl fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl IdeaStatus {
    /// Every status, in workflow order
    pub const ALL: [IdeaStatus; 11] = [
        IdeaStatus::Submitted,
        IdeaStatus::UnderReview,
        IdeaStatus::NeedsRevision,
        IdeaStatus::Accepted,
        IdeaStatus::InAnalysis,
        IdeaStatus::InPlanning,
        IdeaStatus::InImplementation,
        IdeaStatus::InTesting,
        IdeaStatus::Completed,
        IdeaStatus::Rejected,
        IdeaStatus::Deferred,
    ];

    /// Map a platform choice value to a status
    ///
    /// Unknown or missing codes default to `Submitted`.
    pub fn from_code(code: i64) -> IdeaStatus {
        match code {
            100_000_000 => IdeaStatus::Submitted,
            100_000_001 => IdeaStatus::UnderReview,
            100_000_002 => IdeaStatus::NeedsRevision,
            100_000_003 => IdeaStatus::Accepted,
            100_000_004 => IdeaStatus::InAnalysis,
            100_000_005 => IdeaStatus::InPlanning,
            100_000_006 => IdeaStatus::InImplementation,
            100_000_007 => IdeaStatus::InTesting,
            100_000_008 => IdeaStatus::Completed,
            100_000_009 => IdeaStatus::Rejected,
            100_000_010 => IdeaStatus::Deferred,
            _ => IdeaStatus::Submitted,
        }
    }

    /// The platform choice value for this status
    pub fn code(&self) -> i64 {
        match self {
            IdeaStatus::Submitted => 100_000_000,
            IdeaStatus::UnderReview => 100_000_001,
            IdeaStatus::NeedsRevision => 100_000_002,
            IdeaStatus::Accepted => 100_000_003,
            IdeaStatus::InAnalysis => 100_000_004,
            IdeaStatus::InPlanning => 100_000_005,
            IdeaStatus::InImplementation => 100_000_006,
            IdeaStatus::InTesting => 100_000_007,
            IdeaStatus::Completed => 100_000_008,
            IdeaStatus::Rejected => 100_000_009,
            IdeaStatus::Deferred => 100_000_010,
        }
    }

    /// German display label as shown in the portal
    pub fn label(&self) -> &'static str {
        match self {
            IdeaStatus::Submitted => "Eingereicht",
            IdeaStatus::UnderReview => "In Prüfung",
            IdeaStatus::NeedsRevision => "Nachbesserung",
            IdeaStatus::Accepted => "Angenommen",
            IdeaStatus::InAnalysis => "In Analyse",
            IdeaStatus::InPlanning => "In Planung",
            IdeaStatus::InImplementation => "In Umsetzung",
            IdeaStatus::InTesting => "Im Test",
            IdeaStatus::Completed => "Abgeschlossen",
            IdeaStatus::Rejected => "Abgelehnt",
            IdeaStatus::Deferred => "Zurückgestellt",
        }
    }

    /// Whether the idea has left the workflow
    pub fn is_terminal(&self) -> bool {
        matches!(self, IdeaStatus::Completed | IdeaStatus::Rejected)
    }

    /// Workflow stage this status belongs to in the platform's process flow
    pub fn stage(&self) -> WorkflowStage {
        match self {
            IdeaStatus::Submitted | IdeaStatus::NeedsRevision => WorkflowStage::Submission,
            IdeaStatus::UnderReview | IdeaStatus::Accepted => WorkflowStage::Review,
            IdeaStatus::InAnalysis | IdeaStatus::Deferred => WorkflowStage::Analysis,
            IdeaStatus::InPlanning => WorkflowStage::Planning,
            IdeaStatus::InImplementation | IdeaStatus::InTesting => WorkflowStage::Implementation,
            IdeaStatus::Completed | IdeaStatus::Rejected => WorkflowStage::Closure,
        }
    }
}

/// Stages of the platform's business process flow
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowStage {
    Submission,
    Review,
    Analysis,
    Planning,
    Implementation,
    Closure,
}

impl WorkflowStage {
    /// German display label of the stage
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowStage::Submission => "Einreichung",
            WorkflowStage::Review => "Prüfung",
            WorkflowStage::Analysis => "Analyse",
            WorkflowStage::Planning => "Planung",
            WorkflowStage::Implementation => "Umsetzung",
            WorkflowStage::Closure => "Abschluss",
        }
    }
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
