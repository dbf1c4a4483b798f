//! Storage abstraction over the platform and the demo dataset
//!
//! All durable state lives on the platform; the sample store is an
//! in-memory stand-in used when the platform is not configured or demo
//! mode is requested.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use ideenportal_platform::{PlatformClient, PlatformConfig, PlatformError, TableSchema};

use crate::mapper;
use crate::ownership::Actor;
use crate::sample::sample_ideas;
use crate::status::IdeaStatus;
use crate::types::{Idea, IdeaCreateInput, IdeaPatch};

/// Store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Idea not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Backing store for ideas
#[async_trait]
pub trait IdeaStore: Send + Sync {
    async fn list_ideas(&self) -> StoreResult<Vec<Idea>>;
    async fn get_idea(&self, id: &str) -> StoreResult<Option<Idea>>;
    async fn create_idea(&self, input: IdeaCreateInput, submitter: &Actor) -> StoreResult<Idea>;
    async fn update_idea(&self, id: &str, patch: IdeaPatch) -> StoreResult<Idea>;
}

/// Generate a unique idea ID
pub fn generate_idea_id() -> String {
    Uuid::new_v4().to_string()
}

/// In-memory store seeded with the demo dataset
pub struct SampleStore {
    ideas: RwLock<HashMap<String, Idea>>,
}

impl SampleStore {
    /// Create a store seeded with the sample dataset
    pub fn new() -> Self {
        let ideas = sample_ideas()
            .into_iter()
            .map(|idea| (idea.id.clone(), idea))
            .collect();
        Self {
            ideas: RwLock::new(ideas),
        }
    }

    /// Create an empty store
    pub fn empty() -> Self {
        Self {
            ideas: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for SampleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdeaStore for SampleStore {
    async fn list_ideas(&self) -> StoreResult<Vec<Idea>> {
        let ideas = self.ideas.read().await;
        let mut list: Vec<Idea> = ideas.values().cloned().collect();
        // Same ordering the platform query uses: newest first
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    async fn get_idea(&self, id: &str) -> StoreResult<Option<Idea>> {
        let ideas = self.ideas.read().await;
        Ok(ideas.get(id).cloned())
    }

    async fn create_idea(&self, input: IdeaCreateInput, submitter: &Actor) -> StoreResult<Idea> {
        let now = Utc::now();
        let idea = Idea {
            id: generate_idea_id(),
            title: input.title,
            description: input.description,
            submitter_id: submitter.id.clone(),
            submitter_name: submitter.name.clone(),
            idea_type: input.idea_type.unwrap_or_default(),
            status: IdeaStatus::Submitted,
            benefit_assessment: None,
            effort_estimate_days: None,
            planned_quarter: None,
            implementation_notes: None,
            subscribers: vec![submitter.id.clone()],
            created_at: now,
            modified_at: now,
            completed_at: None,
        };

        let mut ideas = self.ideas.write().await;
        ideas.insert(idea.id.clone(), idea.clone());
        Ok(idea)
    }

    async fn update_idea(&self, id: &str, patch: IdeaPatch) -> StoreResult<Idea> {
        let mut ideas = self.ideas.write().await;
        let idea = ideas
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if let Some(description) = patch.description {
            idea.description = description;
        }
        if let Some(status) = patch.status {
            idea.status = status;
        }
        if let Some(subscribers) = patch.subscribers {
            idea.subscribers = subscribers;
        }
        idea.modified_at = Utc::now();

        Ok(idea.clone())
    }
}

/// Store backed by the hosted platform
pub struct PlatformStore {
    client: PlatformClient,
    schema: TableSchema,
}

impl PlatformStore {
    /// Create a platform store from configuration
    pub fn new(config: PlatformConfig) -> StoreResult<Self> {
        let schema = config.schema.clone();
        let client = PlatformClient::new(config)?;
        Ok(Self { client, schema })
    }
}

#[async_trait]
impl IdeaStore for PlatformStore {
    async fn list_ideas(&self) -> StoreResult<Vec<Idea>> {
        let records = self.client.list_records().await?;
        Ok(records
            .iter()
            .map(|record| mapper::idea_from_record(record, &self.schema))
            .collect())
    }

    async fn get_idea(&self, id: &str) -> StoreResult<Option<Idea>> {
        match self.client.get_record(id).await {
            Ok(record) => Ok(Some(mapper::idea_from_record(&record, &self.schema))),
            Err(PlatformError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn create_idea(&self, input: IdeaCreateInput, submitter: &Actor) -> StoreResult<Idea> {
        let body = mapper::create_body(&input, submitter, &self.schema);
        let record = self.client.create_record(&body).await?;
        Ok(mapper::idea_from_record(&record, &self.schema))
    }

    async fn update_idea(&self, id: &str, patch: IdeaPatch) -> StoreResult<Idea> {
        let body = mapper::patch_body(&patch, &self.schema);
        match self.client.update_record(id, &body).await {
            Ok(record) => Ok(mapper::idea_from_record(&record, &self.schema)),
            Err(PlatformError::NotFound(_)) => Err(StoreError::NotFound(id.to_string())),
            Err(e) => Err(e.into()),
        }
    }
}

/// The selected store plus whether it serves the demo dataset
pub struct StoreSelection {
    pub store: Arc<dyn IdeaStore>,
    pub demo: bool,
}

/// Factory for creating store instances
pub struct StoreFactory;

impl StoreFactory {
    /// Select a store from configuration
    ///
    /// Demo mode and missing platform configuration both resolve to the
    /// sample store; only an explicitly configured platform connection is
    /// validated and used.
    pub fn create(config: &PlatformConfig) -> StoreResult<StoreSelection> {
        if config.demo_mode {
            info!("Demo mode enabled, serving the sample dataset");
            return Ok(StoreSelection {
                store: Arc::new(SampleStore::new()),
                demo: true,
            });
        }

        if !config.is_configured() {
            info!("Platform not configured, falling back to the sample dataset");
            return Ok(StoreSelection {
                store: Arc::new(SampleStore::new()),
                demo: true,
            });
        }

        config.validate()?;
        debug!("Connecting to platform at {}", config.base_url);
        Ok(StoreSelection {
            store: Arc::new(PlatformStore::new(config.clone())?),
            demo: false,
        })
    }
}
