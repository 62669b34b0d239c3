//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use super::commands;
use campusq::output::OutputMode;

/// campusq - Triage queue with time-based priority escalation
#[derive(Parser, Debug)]
#[command(
    name = "campusq",
    version,
    about = "Triage queue with time-based priority escalation",
    long_about = "Track campus applications and complaints in a local queue.\n\n\
                  Submitters declare a priority; items left pending escalate\n\
                  to high after 48 hours and urgent after 72 hours, and the\n\
                  triage view orders the queue accordingly."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a queue in the current directory
    Init {
        /// Force re-initialization
        #[arg(short, long)]
        force: bool,
    },

    /// Submit an application or complaint
    Submit {
        /// Kind: application, complaint
        kind: String,

        /// Short description
        title: String,

        /// Priority: low, normal, high, urgent
        #[arg(short, long)]
        priority: Option<String>,

        /// Additional context
        #[arg(short, long)]
        note: Option<String>,

        /// Submission time (RFC3339), for backdated imports
        #[arg(long)]
        at: Option<String>,
    },

    /// Show the queue in triage order (most urgent first)
    Triage {
        /// Filter by kind: application, complaint
        #[arg(short, long)]
        kind: Option<String>,

        /// Include decided items, not just pending ones
        #[arg(short, long)]
        all: bool,

        /// Evaluate escalation as of this time (RFC3339) instead of now
        #[arg(long)]
        at: Option<String>,
    },

    /// List items in submission order
    List {
        /// Filter by status: pending, approved, resolved, rejected
        #[arg(short, long)]
        status: Option<String>,

        /// Filter by kind: application, complaint
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Show a single item
    Show {
        /// Item ID (e.g., APP-3)
        id: String,
    },

    /// Approve a pending application
    Approve {
        /// Item ID
        id: String,
    },

    /// Reject a pending item
    Reject {
        /// Item ID
        id: String,
    },

    /// Resolve a pending complaint
    Resolve {
        /// Item ID
        id: String,
    },

    /// Remove an item from the queue
    Remove {
        /// Item ID
        id: String,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Submit {
            kind,
            title,
            priority,
            note,
            at,
        }) => commands::submit(
            &kind,
            &title,
            priority.as_deref(),
            note.as_deref(),
            at.as_deref(),
            output_mode,
        ),
        Some(Command::Triage { kind, all, at }) => {
            commands::triage(kind.as_deref(), all, at.as_deref(), output_mode)
        }
        Some(Command::List { status, kind }) => {
            commands::list(status.as_deref(), kind.as_deref(), output_mode)
        }
        Some(Command::Show { id }) => commands::show(&id, output_mode),
        Some(Command::Approve { id }) => {
            commands::decide(&id, campusq::models::Status::Approved, output_mode)
        }
        Some(Command::Reject { id }) => {
            commands::decide(&id, campusq::models::Status::Rejected, output_mode)
        }
        Some(Command::Resolve { id }) => {
            commands::decide(&id, campusq::models::Status::Resolved, output_mode)
        }
        Some(Command::Remove { id }) => commands::remove(&id, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("campusq v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        }
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("campusq v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'campusq --help' for usage");
                println!("Run 'campusq init' to get started");
            }
            Ok(())
        }
    }
}
