//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::engine;
use crate::models::{Item, Priority};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One row of the triage view
#[derive(Debug, Clone, Serialize)]
pub struct ItemRow {
    /// Item ID (e.g., "APP-3")
    pub id: String,
    /// Kind: application or complaint
    pub kind: String,
    /// Short description
    pub title: String,
    /// Effective priority after escalation
    pub priority: String,
    /// Priority as declared by the submitter
    pub declared_priority: String,
    /// Whether the engine raised the priority
    pub escalated: bool,
    /// Current status
    pub status: String,
    /// When submitted (RFC3339), if known
    pub submitted_at: Option<String>,
    /// Hours since submission, if known
    pub age_hours: Option<f64>,
}

/// Result of a triage or list operation
#[derive(Debug, Serialize)]
pub struct TriageResult {
    /// Number of items shown
    pub total: usize,
    /// Items, in triage order
    pub items: Vec<ItemRow>,
}

/// Result of a submit operation
#[derive(Debug, Serialize)]
pub struct SubmitResult {
    /// The new item's ID
    pub id: String,
    /// Kind submitted
    pub kind: String,
    /// Title as recorded
    pub title: String,
    /// Declared priority as recorded
    pub priority: String,
}

/// Result of a show operation
#[derive(Debug, Serialize)]
pub struct ShowResult {
    /// Whether the item exists
    pub found: bool,
    /// The item, when found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<ItemRow>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

/// Color a priority label for terminal display
fn paint_priority(label: &str) -> String {
    match label.parse::<Priority>() {
        Ok(Priority::Urgent) => label.red().bold().to_string(),
        Ok(Priority::High) => label.yellow().to_string(),
        Ok(Priority::Low) => label.dimmed().to_string(),
        _ => label.to_string(),
    }
}

impl ItemRow {
    /// Build a row from an item, computing the effective priority at `now`
    #[must_use]
    pub fn from_item(item: &Item, now: DateTime<Utc>) -> Self {
        let effective = engine::effective_priority(item, now);
        Self {
            id: item.id.clone(),
            kind: item.kind.to_string(),
            title: item.title.clone(),
            priority: effective.to_string(),
            declared_priority: item.declared_priority.to_string(),
            escalated: effective.rank() > item.declared_priority.rank(),
            status: item.status.to_string(),
            submitted_at: item.submitted_at.map(|t| t.to_rfc3339()),
            age_hours: item.age_hours(now),
        }
    }

    fn render_line(&self) {
        let marker = if self.escalated { "^" } else { " " };
        let age = self
            .age_hours
            .map_or_else(|| "-".to_string(), |h| format!("{h:.0}h"));
        println!(
            "  {:<8} {marker}{:<8} {:<11} {:>5}  {}",
            self.id,
            paint_priority(&self.priority),
            self.status,
            age,
            self.title
        );
        if self.escalated {
            println!("           (declared {})", self.declared_priority);
        }
    }
}

impl TriageResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.items.is_empty() {
            println!("Queue is empty.");
            return;
        }

        println!("{} item(s):\n", self.total);
        for row in &self.items {
            row.render_line();
        }
    }
}

impl SubmitResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Submitted {}: {}", self.kind, self.id);
                println!("  Title:    {}", self.title);
                println!("  Priority: {}", paint_priority(&self.priority));
            }
            OutputMode::Json => render_json(self),
        }
    }
}

impl ShowResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.item {
                Some(row) => {
                    println!("{} ({})", row.id, row.kind);
                    println!("  Title:     {}", row.title);
                    println!("  Status:    {}", row.status);
                    println!("  Priority:  {}", paint_priority(&row.priority));
                    if row.escalated {
                        println!("  Declared:  {}", row.declared_priority);
                    }
                    if let Some(at) = &row.submitted_at {
                        println!("  Submitted: {at}");
                    }
                    if let Some(age) = row.age_hours {
                        println!("  Age:       {age:.1}h");
                    }
                }
                None => println!("Item not found."),
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to serialize output: {e}"),
    }
}
