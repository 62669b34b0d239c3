//! Initialize a queue in the current directory

use campusq::output::{OperationResult, OutputMode};
use campusq::storage::{ItemStore, StoreError, STORE_FILE};

/// Create the queue file, refusing to clobber one unless forced
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match ItemStore::init(&cwd, force) {
        Ok(_) => {
            let result = OperationResult {
                success: true,
                message: format!("Created {STORE_FILE}"),
            };
            result.render(mode);
            if mode == OutputMode::Human {
                println!("\nNext steps:");
                println!("  campusq submit application \"<title>\" --priority normal");
                println!("  campusq triage");
            }
            Ok(())
        }
        Err(StoreError::AlreadyInitialized(_)) => {
            let result = OperationResult {
                success: false,
                message: format!(
                    "Already initialized ({STORE_FILE} exists). Use --force to reinitialize."
                ),
            };
            result.render(mode);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
