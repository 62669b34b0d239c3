//! Show command - one item in detail

use chrono::Utc;

use campusq::output::{ItemRow, OutputMode, ShowResult};

use super::open_store;

/// Show a single item with its effective priority and age
pub fn show(id: &str, mode: OutputMode) -> anyhow::Result<()> {
    let store = open_store()?;
    let now = Utc::now();

    let item = store.get(id)?;
    let result = ShowResult {
        found: item.is_some(),
        item: item.map(|i| ItemRow::from_item(&i, now)),
    };
    result.render(mode);
    Ok(())
}
