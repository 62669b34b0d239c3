//! Item model
//!
//! An item is a submitted application or complaint. The submitter picks a
//! declared priority at creation; the engine computes the effective priority
//! for triage, but storage only ever holds the declared value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A submitted item awaiting triage or decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier (auto-generated: PREFIX-N)
    pub id: String,

    /// What kind of submission this is
    pub kind: Kind,

    /// Short description of the request or grievance
    pub title: String,

    /// Priority chosen by the submitter, stored unchanged
    pub declared_priority: Priority,

    /// Current lifecycle status
    pub status: Status,

    /// When this item was submitted. Set once at creation, never rewritten.
    /// Absent when the source record carried no usable timestamp.
    pub submitted_at: Option<DateTime<Utc>>,

    /// Optional notes/context from the submitter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When a reviewer moved this item to a terminal status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<DateTime<Utc>>,
}

/// Kind of submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// A request that gets approved or rejected
    #[default]
    Application,
    /// A grievance that gets resolved
    Complaint,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Application => write!(f, "application"),
            Self::Complaint => write!(f, "complaint"),
        }
    }
}

impl std::str::FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "application" | "app" => Ok(Self::Application),
            "complaint" | "cmp" => Ok(Self::Complaint),
            _ => Err(format!("Invalid kind: {s}. Use: application, complaint")),
        }
    }
}

/// Item lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Submitted, awaiting a reviewer decision. Only pending items escalate.
    #[default]
    Pending,
    /// Application accepted (terminal)
    Approved,
    /// Complaint addressed (terminal)
    Resolved,
    /// Declined (terminal)
    Rejected,
}

impl Status {
    /// Whether this status is terminal (no further transitions)
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Resolved => write!(f, "resolved"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" | "open" => Ok(Self::Pending),
            "approved" | "accepted" => Ok(Self::Approved),
            "resolved" | "closed" => Ok(Self::Resolved),
            "rejected" | "declined" => Ok(Self::Rejected),
            _ => Err(format!(
                "Invalid status: {s}. Use: pending, approved, resolved, rejected"
            )),
        }
    }
}

/// Declared priority level
///
/// Closed enumeration. The originating forms used `medium` and `normal`
/// interchangeably; `medium` is accepted as an alias everywhere strings come
/// in and is never emitted back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait
    Low,
    /// Default for new submissions
    #[default]
    #[serde(alias = "medium")]
    Normal,
    /// Needs attention soon
    High,
    /// Needs attention now
    Urgent,
}

impl Priority {
    /// Integer rank used for comparison and sorting: low=1 .. urgent=4
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Normal => 2,
            Self::High => 3,
            Self::Urgent => 4,
        }
    }

    /// The higher-ranked of two priorities
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if other.rank() > self.rank() { other } else { self }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Normal => write!(f, "normal"),
            Self::High => write!(f, "high"),
            Self::Urgent => write!(f, "urgent"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "normal" | "medium" | "med" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            "urgent" | "critical" => Ok(Self::Urgent),
            _ => Err(format!(
                "Invalid priority: {s}. Use: low, normal, high, urgent"
            )),
        }
    }
}

impl Item {
    /// Create a new pending item submitted now
    #[must_use]
    pub fn new(id: String, kind: Kind, title: String) -> Self {
        Self {
            id,
            kind,
            title,
            declared_priority: Priority::default(),
            status: Status::default(),
            submitted_at: Some(Utc::now()),
            notes: None,
            decided_at: None,
        }
    }

    /// Create a new pending item with all options
    #[must_use]
    pub fn with_options(
        id: String,
        kind: Kind,
        title: String,
        declared_priority: Priority,
        submitted_at: Option<DateTime<Utc>>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id,
            kind,
            title,
            declared_priority,
            status: Status::default(),
            submitted_at,
            notes,
            decided_at: None,
        }
    }

    /// Hours since submission, fractional. `None` when undated.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn age_hours(&self, now: DateTime<Utc>) -> Option<f64> {
        let submitted = self.submitted_at?;
        Some((now - submitted).num_seconds() as f64 / 3600.0)
    }
}
