//! Submit command - create a new pending item

use campusq::models::{Item, Kind, Priority};
use campusq::output::{OutputMode, SubmitResult};

use super::{clock, open_store};

/// Create a pending item with a declared priority
pub fn submit(
    kind: &str,
    title: &str,
    priority: Option<&str>,
    note: Option<&str>,
    at: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let store = open_store()?;

    let kind: Kind = kind.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let declared: Priority = match priority {
        Some(p) => p.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        None => store.config()?.default_priority,
    };
    let submitted_at = clock(at)?;

    let id = store.next_id(kind)?;
    let item = Item::with_options(
        id.clone(),
        kind,
        title.to_string(),
        declared,
        Some(submitted_at),
        note.map(String::from),
    );
    store.add(&item)?;

    let result = SubmitResult {
        id,
        kind: kind.to_string(),
        title: title.to_string(),
        priority: declared.to_string(),
    };
    result.render(mode);
    Ok(())
}
