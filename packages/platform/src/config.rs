use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{PlatformError, PlatformResult};

/// Connection settings for the hosted data platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Base URL of the platform environment
    pub base_url: String,

    /// API path segment, e.g. `api/data/v9.2`
    pub api_path: String,

    /// Logical name of the idea table
    pub table: String,

    /// Bearer token for API calls, if configured at deployment time
    pub token: Option<String>,

    /// Serve the built-in sample dataset instead of calling the platform
    pub demo_mode: bool,

    /// Wire field names of the idea table
    pub schema: TableSchema,
}

impl PlatformConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let base_url = env::var("PLATFORM_URL").unwrap_or_default();
        let api_path = env::var("PLATFORM_API_PATH").unwrap_or_else(|_| "api/data/v9.2".to_string());
        let table = env::var("PLATFORM_TABLE").unwrap_or_else(|_| "dig_ideen".to_string());
        let token = env::var("PLATFORM_TOKEN").ok().filter(|t| !t.is_empty());

        let demo_mode = env::var("DEMO_MODE")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .unwrap_or(false);

        PlatformConfig {
            base_url,
            api_path,
            table,
            token,
            demo_mode,
            schema: TableSchema::default(),
        }
    }

    /// Whether enough configuration is present to reach the platform
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && self.token.is_some()
    }

    /// Validate configuration before constructing a client
    pub fn validate(&self) -> PlatformResult<()> {
        if self.base_url.is_empty() {
            return Err(PlatformError::config("Platform URL is required"));
        }
        if !self.base_url.starts_with("https://") {
            return Err(PlatformError::config("Platform URL must use HTTPS"));
        }
        if self.token.is_none() {
            return Err(PlatformError::config("Platform token is required"));
        }
        Ok(())
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        PlatformConfig {
            base_url: String::new(),
            api_path: "api/data/v9.2".to_string(),
            table: "dig_ideen".to_string(),
            token: None,
            demo_mode: false,
            schema: TableSchema::default(),
        }
    }
}

/// Wire field names of the idea table
///
/// The platform exposes customizer-prefixed logical names; everything the
/// domain model reads or writes goes through this map rather than inline
/// string literals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSchema {
    pub id: String,
    pub title: String,
    pub description: String,
    pub idea_type: String,
    pub status: String,
    pub submitter: String,
    pub submitter_nav: String,
    pub users_table: String,
    pub benefit_assessment: String,
    pub effort_estimate: String,
    pub planned_quarter: String,
    pub implementation_notes: String,
    pub subscribers: String,
    pub created: String,
    pub modified: String,
    pub completed: String,
}

impl Default for TableSchema {
    fn default() -> Self {
        TableSchema {
            id: "dig_ideeid".to_string(),
            title: "dig_titel".to_string(),
            description: "dig_beschreibung".to_string(),
            idea_type: "dig_ideentyp".to_string(),
            status: "statuscode".to_string(),
            submitter: "_dig_einreicher_value".to_string(),
            submitter_nav: "dig_Einreicher".to_string(),
            users_table: "systemusers".to_string(),
            benefit_assessment: "dig_nutzenbewertung".to_string(),
            effort_estimate: "dig_aufwandsschaetzung".to_string(),
            planned_quarter: "dig_umsetzungsquartal".to_string(),
            implementation_notes: "dig_umsetzungsnotizen".to_string(),
            subscribers: "dig_abonnenten".to_string(),
            created: "createdon".to_string(),
            modified: "modifiedon".to_string(),
            completed: "dig_abschlussdatum".to_string(),
        }
    }
}
