//! Command implementations

mod decide;
mod init;
mod list;
mod remove;
mod show;
mod submit;
mod triage;

pub use decide::decide;
pub use init::init;
pub use list::list;
pub use remove::remove;
pub use show::show;
pub use submit::submit;
pub use triage::triage;

use chrono::{DateTime, Utc};

/// Parse an `--at` override, defaulting to the current time
fn clock(at: Option<&str>) -> anyhow::Result<DateTime<Utc>> {
    match at {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| anyhow::anyhow!("invalid timestamp '{raw}': {e}")),
        None => Ok(Utc::now()),
    }
}

/// The queue store in the current working directory
fn open_store() -> anyhow::Result<campusq::storage::ItemStore> {
    let cwd = std::env::current_dir()?;
    Ok(campusq::storage::ItemStore::open(&cwd)?)
}
