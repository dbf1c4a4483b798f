//! Ownership and subscription policy
//!
//! Identity is judged by opaque external directory id only. Display names
//! are not comparable identities; two employees can share a name and names
//! change, ids do not.

use serde::{Deserialize, Serialize};

use crate::policy::{policy_for, IdeaField};
use crate::types::Idea;

/// The signed-in user acting on ideas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Opaque directory object id
    pub id: String,
    pub name: String,
    pub email: Option<String>,
}

impl Actor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Actor {
            id: id.into(),
            name: name.into(),
            email: None,
        }
    }
}

/// Whether the actor submitted this idea
pub fn is_owner(actor: &Actor, idea: &Idea) -> bool {
    !actor.id.is_empty() && actor.id == idea.submitter_id
}

/// Whether the actor may edit the idea's description in its current status
pub fn can_edit(actor: &Actor, idea: &Idea) -> bool {
    is_owner(actor, idea) && policy_for(idea.status).can_edit(IdeaField::Description)
}

/// Whether the actor receives notifications about this idea
pub fn is_subscribed(actor: &Actor, idea: &Idea) -> bool {
    idea.subscribers.iter().any(|id| id == &actor.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::IdeaStatus;
    use chrono::DateTime;

    fn idea_with(submitter_id: &str, status: IdeaStatus) -> Idea {
        Idea {
            id: "idea-1".to_string(),
            title: "Testidee".to_string(),
            description: "Beschreibung".to_string(),
            submitter_id: submitter_id.to_string(),
            submitter_name: "Max Mustermann".to_string(),
            idea_type: Default::default(),
            status,
            benefit_assessment: None,
            effort_estimate_days: None,
            planned_quarter: None,
            implementation_notes: None,
            subscribers: vec!["sub-1".to_string()],
            created_at: DateTime::UNIX_EPOCH,
            modified_at: DateTime::UNIX_EPOCH,
            completed_at: None,
        }
    }

    #[test]
    fn test_ownership_is_id_based() {
        let actor = Actor::new("guid-1", "Someone Else");
        assert!(is_owner(&actor, &idea_with("guid-1", IdeaStatus::Submitted)));
        assert!(!is_owner(&actor, &idea_with("guid-2", IdeaStatus::Submitted)));
    }

    #[test]
    fn test_empty_actor_id_never_owns() {
        let actor = Actor::new("", "Anonymous");
        assert!(!is_owner(&actor, &idea_with("", IdeaStatus::Submitted)));
    }

    #[test]
    fn test_can_edit_requires_ownership_and_editable_status() {
        let owner = Actor::new("guid-1", "Max");
        let other = Actor::new("guid-2", "Erika");

        assert!(can_edit(&owner, &idea_with("guid-1", IdeaStatus::Submitted)));
        assert!(can_edit(&owner, &idea_with("guid-1", IdeaStatus::NeedsRevision)));
        assert!(!can_edit(&owner, &idea_with("guid-1", IdeaStatus::UnderReview)));
        assert!(!can_edit(&owner, &idea_with("guid-1", IdeaStatus::Completed)));
        assert!(!can_edit(&other, &idea_with("guid-1", IdeaStatus::Submitted)));
    }

    #[test]
    fn test_subscription_membership() {
        let subscriber = Actor::new("sub-1", "Max");
        let outsider = Actor::new("sub-2", "Erika");
        let idea = idea_with("guid-1", IdeaStatus::Submitted);

        assert!(is_subscribed(&subscriber, &idea));
        assert!(!is_subscribed(&outsider, &idea));
    }
}
