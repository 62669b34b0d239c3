//! List command - items in submission order

use chrono::Utc;

use campusq::models::{Kind, Status};
use campusq::output::{ItemRow, OutputMode, TriageResult};

use super::open_store;

/// List items as stored, optionally filtered by status and kind
pub fn list(status: Option<&str>, kind: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let store = open_store()?;
    let now = Utc::now();

    let status_filter: Option<Status> = status
        .map(str::parse)
        .transpose()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    let kind_filter: Option<Kind> = kind
        .map(str::parse)
        .transpose()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let items = store.load()?;
    let rows: Vec<ItemRow> = items
        .iter()
        .filter(|i| status_filter.is_none_or(|s| i.status == s))
        .filter(|i| kind_filter.is_none_or(|k| i.kind == k))
        .map(|i| ItemRow::from_item(i, now))
        .collect();

    let result = TriageResult {
        total: rows.len(),
        items: rows,
    };
    result.render(mode);
    Ok(())
}
