//! Item storage
//!
//! Stores items in `.campusq.toml` under `[[item]]` tables, with the
//! `[queue]` config at the top. Enum fields are persisted as strings;
//! conversion back to the model applies the defensive defaults (unknown
//! priority reads as normal, unknown status as pending, an unparseable
//! timestamp as absent) with a warning, so a hand-edited or partially
//! migrated file still loads.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::QueueConfig;
use crate::models::{Item, Kind, Priority, Status};

/// Queue file name, relative to the queue directory
pub const STORE_FILE: &str = ".campusq.toml";

/// Errors that can occur in the item store
#[derive(Debug, Error)]
pub enum StoreError {
    /// No queue file in the target directory
    #[error("no queue here ({0} not found) - run 'campusq init' first")]
    NotInitialized(PathBuf),

    /// Queue file already exists and force was not given
    #[error("queue already initialized at {0}")]
    AlreadyInitialized(PathBuf),

    /// IO error during file operations
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Queue file is not valid TOML
    #[error("failed to parse queue file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Queue file could not be serialized
    #[error("failed to write queue file: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// No item with the given ID
    #[error("item not found: {0}")]
    NotFound(String),

    /// Item already has a terminal status
    #[error("item {id} already decided ({status})")]
    AlreadyDecided {
        /// The item ID
        id: String,
        /// Its current terminal status
        status: Status,
    },

    /// Target status is not a valid transition
    #[error("cannot move {id} to {status}: only pending items can be decided")]
    InvalidTransition {
        /// The item ID
        id: String,
        /// The requested status
        status: Status,
    },
}

/// Queue file structure
#[derive(Debug, Default, Serialize, Deserialize)]
struct QueueFile {
    /// Queue metadata and settings
    #[serde(default)]
    queue: QueueMeta,

    /// Items in submission order
    #[serde(default, rename = "item")]
    items: Vec<ItemEntry>,
}

/// The `[queue]` table
#[derive(Debug, Default, Serialize, Deserialize)]
struct QueueMeta {
    /// When the queue was created (RFC3339)
    #[serde(default)]
    created_at: String,

    /// Settings (flattened into the same table)
    #[serde(flatten)]
    config: QueueConfig,
}

/// Item entry in TOML (serialization format)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemEntry {
    /// Item ID (e.g., "APP-3")
    pub id: String,
    /// Kind: application, complaint
    #[serde(default = "default_kind")]
    pub kind: String,
    /// Short description
    pub title: String,
    /// Declared priority: low, normal, high, urgent
    #[serde(default = "default_priority")]
    pub priority: String,
    /// Status: pending, approved, resolved, rejected
    #[serde(default = "default_status")]
    pub status: String,
    /// When submitted (RFC3339). Written once at creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
    /// Optional notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When decided (RFC3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<String>,
}

fn default_kind() -> String {
    "application".to_string()
}

fn default_priority() -> String {
    "normal".to_string()
}

fn default_status() -> String {
    "pending".to_string()
}

impl ItemEntry {
    /// Convert to the Item model, applying defensive defaults
    pub fn to_item(&self) -> Item {
        let declared_priority = self.priority.parse().unwrap_or_else(|_| {
            log::warn!(
                "item {}: unknown priority '{}', treating as normal",
                self.id,
                self.priority
            );
            Priority::Normal
        });
        let status = self.status.parse().unwrap_or_else(|_| {
            log::warn!(
                "item {}: unknown status '{}', treating as pending",
                self.id,
                self.status
            );
            Status::Pending
        });

        Item {
            id: self.id.clone(),
            kind: self.kind.parse().unwrap_or_default(),
            title: self.title.clone(),
            declared_priority,
            status,
            submitted_at: parse_timestamp(&self.id, self.submitted_at.as_deref()),
            notes: self.notes.clone(),
            decided_at: parse_timestamp(&self.id, self.decided_at.as_deref()),
        }
    }

    /// Create from the Item model
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            kind: item.kind.to_string(),
            title: item.title.clone(),
            priority: item.declared_priority.to_string(),
            status: item.status.to_string(),
            submitted_at: item.submitted_at.map(|t| t.to_rfc3339()),
            notes: item.notes.clone(),
            decided_at: item.decided_at.map(|t| t.to_rfc3339()),
        }
    }
}

fn parse_timestamp(id: &str, raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(t) => Some(t.with_timezone(&Utc)),
        Err(_) => {
            log::warn!("item {id}: unparseable timestamp '{raw}', treating as absent");
            None
        }
    }
}

/// Item store backed by a `.campusq.toml` file
#[derive(Debug, Clone)]
pub struct ItemStore {
    path: PathBuf,
}

impl ItemStore {
    /// Create a new queue file in `dir`
    pub fn init(dir: &Path, force: bool) -> Result<Self, StoreError> {
        let path = dir.join(STORE_FILE);
        if path.exists() && !force {
            return Err(StoreError::AlreadyInitialized(path));
        }

        let file = QueueFile {
            queue: QueueMeta {
                created_at: Utc::now().to_rfc3339(),
                config: QueueConfig::default(),
            },
            items: Vec::new(),
        };

        let store = Self { path };
        store.save_file(&file)?;
        Ok(store)
    }

    /// Open an existing queue in `dir`
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        let path = dir.join(STORE_FILE);
        if !path.exists() {
            return Err(StoreError::NotInitialized(path));
        }
        Ok(Self { path })
    }

    /// The queue configuration
    pub fn config(&self) -> Result<QueueConfig, StoreError> {
        Ok(self.load_file()?.queue.config)
    }

    /// Load all items
    pub fn load(&self) -> Result<Vec<Item>, StoreError> {
        let file = self.load_file()?;
        Ok(file.items.iter().map(ItemEntry::to_item).collect())
    }

    /// Get a single item by ID (case-insensitive)
    pub fn get(&self, id: &str) -> Result<Option<Item>, StoreError> {
        let items = self.load()?;
        Ok(items.into_iter().find(|i| i.id.eq_ignore_ascii_case(id)))
    }

    /// Next ID for a kind: PREFIX-(max existing numeric suffix + 1)
    pub fn next_id(&self, kind: Kind) -> Result<String, StoreError> {
        let file = self.load_file()?;
        let prefix = file.queue.config.prefix_for(kind).to_string();
        let pattern = format!("{prefix}-");
        let max: u32 = file
            .items
            .iter()
            .filter_map(|e| e.id.strip_prefix(&pattern))
            .filter_map(|n| n.parse().ok())
            .max()
            .unwrap_or(0);
        Ok(format!("{prefix}-{}", max + 1))
    }

    /// Append a new item
    pub fn add(&self, item: &Item) -> Result<(), StoreError> {
        let mut file = self.load_file()?;
        file.items.push(ItemEntry::from_item(item));
        self.save_file(&file)
    }

    /// Move a pending item to a terminal status, stamping `decided_at`
    ///
    /// The stored `submitted_at` is left untouched.
    pub fn set_status(
        &self,
        id: &str,
        status: Status,
        now: DateTime<Utc>,
    ) -> Result<Item, StoreError> {
        if !status.is_terminal() {
            return Err(StoreError::InvalidTransition {
                id: id.to_string(),
                status,
            });
        }

        let mut file = self.load_file()?;
        let entry = file
            .items
            .iter_mut()
            .find(|e| e.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let current = entry.to_item();
        if current.status.is_terminal() {
            return Err(StoreError::AlreadyDecided {
                id: current.id,
                status: current.status,
            });
        }

        entry.status = status.to_string();
        entry.decided_at = Some(now.to_rfc3339());
        let updated = entry.to_item();
        self.save_file(&file)?;
        Ok(updated)
    }

    /// Remove an item. Returns false if no item matched.
    pub fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut file = self.load_file()?;
        let before = file.items.len();
        file.items.retain(|e| !e.id.eq_ignore_ascii_case(id));
        if file.items.len() == before {
            return Ok(false);
        }
        self.save_file(&file)?;
        Ok(true)
    }

    fn load_file(&self) -> Result<QueueFile, StoreError> {
        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }

    fn save_file(&self, file: &QueueFile) -> Result<(), StoreError> {
        let content = toml::to_string_pretty(file)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
