//! Triage command - the escalation-ordered queue view

use campusq::engine;
use campusq::models::Kind;
use campusq::output::{ItemRow, OutputMode, TriageResult};

use super::{clock, open_store};

/// Show the queue in triage order
///
/// Pending items only by default; `all` includes decided items. `at`
/// evaluates escalation as of an arbitrary time instead of now.
pub fn triage(kind: Option<&str>, all: bool, at: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let store = open_store()?;
    let now = clock(at)?;

    let kind_filter: Option<Kind> = kind
        .map(str::parse)
        .transpose()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let mut items = store.load()?;
    items.retain(|i| {
        (all || !i.status.is_terminal()) && kind_filter.is_none_or(|k| i.kind == k)
    });

    let ordered = engine::sort_by_priority(&items, now);
    let rows: Vec<ItemRow> = ordered.iter().map(|i| ItemRow::from_item(i, now)).collect();

    let result = TriageResult {
        total: rows.len(),
        items: rows,
    };
    result.render(mode);
    Ok(())
}
