use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use ideenportal_platform::PlatformConfig;

use crate::ownership::{self, Actor};
use crate::policy::{policy_for, IdeaField};
use crate::status::IdeaStatus;
use crate::store::{IdeaStore, StoreError, StoreFactory};
use crate::types::{Idea, IdeaCreateInput, IdeaPatch};
use crate::validator::{validate_description, validate_idea_create, ValidationError};

/// Service errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Validation errors: {0:?}")]
    Validation(Vec<ValidationError>),
    #[error("Idea not found: {0}")]
    NotFound(String),
    #[error("Not allowed to edit this idea")]
    Forbidden,
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Read model handed to the front end
///
/// Augments the raw idea with everything the status and ownership policies
/// derive for the current actor, so the front end renders without policy
/// logic of its own.
#[derive(Debug, Clone, Serialize)]
pub struct IdeaView {
    #[serde(flatten)]
    pub idea: Idea,
    #[serde(rename = "statusLabel")]
    pub status_label: &'static str,
    #[serde(rename = "visibleFields")]
    pub visible_fields: Vec<IdeaField>,
    #[serde(rename = "editableFields")]
    pub editable_fields: Vec<IdeaField>,
    #[serde(rename = "canEdit")]
    pub can_edit: bool,
    pub subscribed: bool,
}

/// Application service for ideas
pub struct IdeaService {
    store: Arc<dyn IdeaStore>,
    demo: bool,
}

impl IdeaService {
    /// Create a service over an existing store
    pub fn new(store: Arc<dyn IdeaStore>, demo: bool) -> Self {
        Self { store, demo }
    }

    /// Create a service from platform configuration
    pub fn from_config(config: &PlatformConfig) -> ServiceResult<Self> {
        let selection = StoreFactory::create(config)?;
        Ok(Self::new(selection.store, selection.demo))
    }

    /// Whether the sample dataset is being served
    pub fn is_demo(&self) -> bool {
        self.demo
    }

    fn view_for(&self, actor: &Actor, idea: Idea) -> IdeaView {
        let policy = policy_for(idea.status);
        IdeaView {
            status_label: idea.status.label(),
            visible_fields: policy.visible.to_vec(),
            editable_fields: policy.editable.to_vec(),
            can_edit: ownership::can_edit(actor, &idea),
            subscribed: ownership::is_subscribed(actor, &idea),
            idea,
        }
    }

    /// List all ideas as views for the current actor
    pub async fn list_ideas(&self, actor: &Actor) -> ServiceResult<Vec<IdeaView>> {
        let ideas = self.store.list_ideas().await?;
        debug!("Retrieved {} ideas", ideas.len());
        Ok(ideas
            .into_iter()
            .map(|idea| self.view_for(actor, idea))
            .collect())
    }

    /// Get a single idea as a view for the current actor
    pub async fn get_idea(&self, actor: &Actor, id: &str) -> ServiceResult<Option<IdeaView>> {
        let idea = self.store.get_idea(id).await?;
        Ok(idea.map(|idea| self.view_for(actor, idea)))
    }

    /// Submit a new idea
    pub async fn submit_idea(
        &self,
        actor: &Actor,
        input: IdeaCreateInput,
    ) -> ServiceResult<IdeaView> {
        let validation_errors = validate_idea_create(&input);
        if !validation_errors.is_empty() {
            return Err(ServiceError::Validation(validation_errors));
        }

        let idea = self.store.create_idea(input, actor).await?;
        info!("Idea '{}' submitted with ID {}", idea.title, idea.id);
        Ok(self.view_for(actor, idea))
    }

    /// Edit the description of an idea
    ///
    /// Editing while the idea sits in revision hands it back to the review
    /// queue: the patch resets the status to submitted in the same call.
    pub async fn update_description(
        &self,
        actor: &Actor,
        id: &str,
        description: &str,
    ) -> ServiceResult<IdeaView> {
        let validation_errors = validate_description(description);
        if !validation_errors.is_empty() {
            return Err(ServiceError::Validation(validation_errors));
        }

        let idea = self
            .store
            .get_idea(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;

        if !ownership::can_edit(actor, &idea) {
            return Err(ServiceError::Forbidden);
        }

        let resubmit = idea.status == IdeaStatus::NeedsRevision;
        let patch = IdeaPatch {
            description: Some(description.to_string()),
            status: resubmit.then_some(IdeaStatus::Submitted),
            subscribers: None,
        };

        let updated = self.store.update_idea(id, patch).await?;
        if resubmit {
            info!("Idea {} resubmitted after revision", id);
        } else {
            info!("Idea {} description updated", id);
        }
        Ok(self.view_for(actor, updated))
    }

    /// Subscribe the actor to notifications about an idea
    pub async fn subscribe(&self, actor: &Actor, id: &str) -> ServiceResult<IdeaView> {
        let idea = self
            .store
            .get_idea(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;

        if ownership::is_subscribed(actor, &idea) {
            return Ok(self.view_for(actor, idea));
        }

        let mut subscribers = idea.subscribers.clone();
        subscribers.push(actor.id.clone());
        let patch = IdeaPatch {
            subscribers: Some(subscribers),
            ..IdeaPatch::default()
        };

        let updated = self.store.update_idea(id, patch).await?;
        info!("Actor {} subscribed to idea {}", actor.id, id);
        Ok(self.view_for(actor, updated))
    }

    /// Unsubscribe the actor from notifications about an idea
    pub async fn unsubscribe(&self, actor: &Actor, id: &str) -> ServiceResult<IdeaView> {
        let idea = self
            .store
            .get_idea(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;

        if !ownership::is_subscribed(actor, &idea) {
            return Ok(self.view_for(actor, idea));
        }

        let subscribers: Vec<String> = idea
            .subscribers
            .iter()
            .filter(|sub| *sub != &actor.id)
            .cloned()
            .collect();
        let patch = IdeaPatch {
            subscribers: Some(subscribers),
            ..IdeaPatch::default()
        };

        let updated = self.store.update_idea(id, patch).await?;
        info!("Actor {} unsubscribed from idea {}", actor.id, id);
        Ok(self.view_for(actor, updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{DEMO_USER_ID, DEMO_USER_NAME};
    use crate::store::SampleStore;
    use pretty_assertions::assert_eq;

    fn demo_service() -> IdeaService {
        IdeaService::new(Arc::new(SampleStore::new()), true)
    }

    fn demo_actor() -> Actor {
        Actor::new(DEMO_USER_ID, DEMO_USER_NAME)
    }

    /// Id of the seeded idea owned by the demo actor in NeedsRevision status
    const REVISION_IDEA_ID: &str = "7f3b8a10-52cd-4a57-8c2e-4d9e1f6b0a22";
    /// Id of the seeded idea owned by the demo actor in Submitted status
    const SUBMITTED_IDEA_ID: &str = "c1a94702-48f2-4e6b-9d1a-6a2f9b3e0c11";

    #[tokio::test]
    async fn test_submit_idea_end_to_end() {
        let service = demo_service();
        let actor = demo_actor();
        let description = "Zeiterfassung per App NEU".to_string();
        assert_eq!(description.chars().count(), 25);

        let input = IdeaCreateInput {
            title: "Digitale Zeiterfassung".to_string(),
            description,
            idea_type: None,
        };

        let view = service.submit_idea(&actor, input).await.unwrap();
        assert_eq!(view.idea.status, IdeaStatus::Submitted);
        assert_eq!(view.status_label, "Eingereicht");
        assert_eq!(view.idea.idea_type, crate::types::IdeaType::Digitalization);
        assert!(!view.idea.id.is_empty());
        assert!(view.can_edit);

        let found = service.get_idea(&actor, &view.idea.id).await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_submit_rejects_invalid_input() {
        let service = demo_service();
        let input = IdeaCreateInput {
            title: String::new(),
            description: "zu kurz".to_string(),
            idea_type: None,
        };

        let err = service.submit_idea(&demo_actor(), input).await.unwrap_err();
        match err {
            ServiceError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_edit_during_revision_resubmits() {
        let service = demo_service();
        let actor = demo_actor();

        let view = service
            .update_description(&actor, REVISION_IDEA_ID, "Der Chatbot soll auch Hardware-Anfragen abdecken.")
            .await
            .unwrap();

        assert_eq!(view.idea.status, IdeaStatus::Submitted);
        assert_eq!(
            view.idea.description,
            "Der Chatbot soll auch Hardware-Anfragen abdecken."
        );
    }

    #[tokio::test]
    async fn test_edit_while_submitted_keeps_status() {
        let service = demo_service();
        let actor = demo_actor();

        let view = service
            .update_description(&actor, SUBMITTED_IDEA_ID, "Onboarding-Unterlagen vollständig digital.")
            .await
            .unwrap();

        assert_eq!(view.idea.status, IdeaStatus::Submitted);
    }

    #[tokio::test]
    async fn test_edit_by_non_owner_is_forbidden() {
        let service = demo_service();
        let stranger = Actor::new("someone-else", "Erika Musterfrau");

        let err = service
            .update_description(&stranger, SUBMITTED_IDEA_ID, "Eine fremde Beschreibung hier.")
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Forbidden));
    }

    #[tokio::test]
    async fn test_edit_in_locked_status_is_forbidden() {
        let service = demo_service();
        let actor = demo_actor();

        // Seeded idea in analysis, owned by another submitter; even its owner
        // could not edit it in this status
        let owner = Actor::new("f47ac10b-58cc-4372-a567-0e02b2c3d479", "Erika Musterfrau");
        let err = service
            .update_description(
                &owner,
                "3e6d2c55-91ab-4f08-b7d3-2c8f5a1e9d33",
                "Nachträgliche Änderung der Beschreibung.",
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Forbidden));
    }

    #[tokio::test]
    async fn test_edit_missing_idea_is_not_found() {
        let service = demo_service();
        let err = service
            .update_description(&demo_actor(), "does-not-exist", "Eine gültige Beschreibung.")
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_subscribe_is_idempotent() {
        let service = demo_service();
        let actor = Actor::new("new-subscriber", "Neuer Abonnent");

        let view = service.subscribe(&actor, SUBMITTED_IDEA_ID).await.unwrap();
        assert!(view.subscribed);
        let count = view.idea.subscribers.len();

        let view = service.subscribe(&actor, SUBMITTED_IDEA_ID).await.unwrap();
        assert!(view.subscribed);
        assert_eq!(view.idea.subscribers.len(), count);
    }

    #[tokio::test]
    async fn test_unsubscribe_removes_membership() {
        let service = demo_service();
        let actor = demo_actor();

        let view = service.unsubscribe(&actor, SUBMITTED_IDEA_ID).await.unwrap();
        assert!(!view.subscribed);

        // A second unsubscribe is a no-op
        let view = service.unsubscribe(&actor, SUBMITTED_IDEA_ID).await.unwrap();
        assert!(!view.subscribed);
    }

    #[tokio::test]
    async fn test_views_carry_policy_data() {
        let service = demo_service();
        let views = service.list_ideas(&demo_actor()).await.unwrap();

        for view in views {
            assert!(!view.visible_fields.is_empty());
            assert_eq!(
                view.can_edit,
                view.idea.submitter_id == DEMO_USER_ID
                    && !view.editable_fields.is_empty()
            );
        }
    }
}
