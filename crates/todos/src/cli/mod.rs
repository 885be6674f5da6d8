//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};

/// Data-access CLI for todo records and attachments.
#[derive(Debug, Parser)]
#[command(name = "todos")]
#[command(version, about = "Data-access CLI for todo records and attachments", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all todos owned by a user.
    List {
        /// Owner ID.
        #[arg(long, env = "TODOS_USER_ID")]
        user_id: String,
    },
    /// Get a todo by ID.
    Get {
        /// Todo ID.
        todo_id: String,
    },
    /// Check whether a user owns a todo.
    Exists {
        /// Todo ID.
        todo_id: String,
        /// Owner ID.
        #[arg(long, env = "TODOS_USER_ID")]
        user_id: String,
    },
    /// Create a new todo.
    Create {
        /// Owner ID.
        #[arg(long, env = "TODOS_USER_ID")]
        user_id: String,
        /// Todo name.
        #[arg(long)]
        name: String,
        /// Due date.
        #[arg(long)]
        due_date: Option<String>,
    },
    /// Replace the name, due date and done flag of a todo.
    Update {
        /// Todo ID.
        todo_id: String,
        /// Owner ID.
        #[arg(long, env = "TODOS_USER_ID")]
        user_id: String,
        /// Todo name.
        #[arg(long)]
        name: String,
        /// Due date. Omit to clear it.
        #[arg(long)]
        due_date: Option<String>,
        /// Mark the todo as done.
        #[arg(long)]
        done: bool,
    },
    /// Set the attachment URL of a todo.
    Attach {
        /// Todo ID.
        todo_id: String,
        /// Owner ID.
        #[arg(long, env = "TODOS_USER_ID")]
        user_id: String,
        /// Attachment URL.
        #[arg(long)]
        url: String,
    },
    /// Generate a pre-signed upload URL for a todo attachment.
    UploadUrl {
        /// Todo ID.
        todo_id: String,
        /// Owner ID.
        #[arg(long, env = "TODOS_USER_ID")]
        user_id: String,
    },
    /// Record an uploaded object as the attachment of a todo.
    PersistAttachment {
        /// Todo ID.
        todo_id: String,
        /// Owner ID.
        #[arg(long, env = "TODOS_USER_ID")]
        user_id: String,
        /// Object key inside the attachment bucket.
        #[arg(long)]
        object_key: String,
    },
    /// Delete a todo.
    Delete {
        /// Todo ID.
        todo_id: String,
        /// Owner ID.
        #[arg(long, env = "TODOS_USER_ID")]
        user_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_update_without_due_date() {
        let cli = Cli::parse_from([
            "todos", "update", "t1", "--user-id", "u1", "--name", "X", "--done",
        ]);

        match cli.command {
            Commands::Update {
                todo_id,
                user_id,
                name,
                due_date,
                done,
            } => {
                assert_eq!(todo_id, "t1");
                assert_eq!(user_id, "u1");
                assert_eq!(name, "X");
                assert_eq!(due_date, None);
                assert!(done);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_format_and_kebab_case_subcommand() {
        let cli = Cli::parse_from([
            "todos",
            "--format",
            "json",
            "persist-attachment",
            "t1",
            "--user-id",
            "u1",
            "--object-key",
            "img-42",
        ]);

        assert!(matches!(cli.format, OutputFormat::Json));
        assert!(matches!(
            cli.command,
            Commands::PersistAttachment { ref object_key, .. } if object_key == "img-42"
        ));
    }
}
