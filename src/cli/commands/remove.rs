//! Remove command - drop an item from the queue

use campusq::output::{OperationResult, OutputMode};

use super::open_store;

/// Remove an item by ID
pub fn remove(id: &str, mode: OutputMode) -> anyhow::Result<()> {
    let store = open_store()?;

    let removed = store.remove(id)?;
    let result = OperationResult {
        success: removed,
        message: if removed {
            format!("Removed {id}")
        } else {
            format!("Item not found: {id}")
        },
    };
    result.render(mode);
    Ok(())
}
