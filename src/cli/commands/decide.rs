//! Decide commands - approve, reject, resolve

use chrono::Utc;

use campusq::models::Status;
use campusq::output::{OperationResult, OutputMode};
use campusq::storage::StoreError;

use super::open_store;

/// Move a pending item to a terminal status
pub fn decide(id: &str, status: Status, mode: OutputMode) -> anyhow::Result<()> {
    let store = open_store()?;

    match store.set_status(id, status, Utc::now()) {
        Ok(item) => {
            let result = OperationResult {
                success: true,
                message: format!("{}: {}", item.id, item.status),
            };
            result.render(mode);
            Ok(())
        }
        Err(e @ (StoreError::NotFound(_) | StoreError::AlreadyDecided { .. })) => {
            let result = OperationResult {
                success: false,
                message: e.to_string(),
            };
            result.render(mode);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
