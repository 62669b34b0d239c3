//! Queue configuration
//!
//! The `[queue]` section of `.campusq.toml`. Every field has a serde default
//! so a bare `[queue]` table works.

use serde::{Deserialize, Serialize};

use crate::models::{Kind, Priority};

/// Queue-level settings stored alongside the items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    /// ID prefix for applications (e.g., "APP" -> APP-1, APP-2, ...)
    #[serde(default = "default_application_prefix")]
    pub application_prefix: String,

    /// ID prefix for complaints
    #[serde(default = "default_complaint_prefix")]
    pub complaint_prefix: String,

    /// Priority assigned when the submitter picks none
    #[serde(default)]
    pub default_priority: Priority,
}

fn default_application_prefix() -> String {
    "APP".to_string()
}

fn default_complaint_prefix() -> String {
    "CMP".to_string()
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            application_prefix: default_application_prefix(),
            complaint_prefix: default_complaint_prefix(),
            default_priority: Priority::default(),
        }
    }
}

impl QueueConfig {
    /// The ID prefix used for a given kind
    #[must_use]
    pub fn prefix_for(&self, kind: Kind) -> &str {
        match kind {
            Kind::Application => &self.application_prefix,
            Kind::Complaint => &self.complaint_prefix,
        }
    }
}
