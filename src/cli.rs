use clap::{Parser, Subcommand};

/// Panelink — drive admin-panel approval actions from the terminal
#[derive(Parser)]
#[command(name = "panelink", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Approve a pending request
    Approve {
        /// Subject of the approval
        #[arg(long)]
        user_id: String,
        /// Entity that originated the pending request
        #[arg(long)]
        requestor_id: String,
    },

    /// Reject a pending request
    Reject {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        requestor_id: String,
    },

    /// Submit an arbitrary decision action (passed through unvalidated)
    Submit {
        #[arg(long)]
        action: String,
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        requestor_id: String,
    },

    /// Print the language catalogue and switch paths
    Languages,
}
