//! todos CLI entry point.

use anyhow::Context;
use clap::Parser;
use todos::cli::{Cli, Commands, OutputFormat};
use todos::output::{format_output, pretty};
use todos::{Config, TodoGateway};
use todos_core::todo::{CreateTodoRequest, UpdateTodoRequest};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todos=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let gateway = TodoGateway::from_config(&config).await;

    match cli.command {
        Commands::List { user_id } => {
            let todos = gateway.list_by_owner(&user_id).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&todos, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_todos(&todos)),
            }
        }
        Commands::Get { todo_id } => {
            let todo = gateway
                .find_by_id(&todo_id)
                .await?
                .with_context(|| format!("Todo not found: {}", todo_id))?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&todo, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_todo(&todo)),
            }
        }
        Commands::Exists { todo_id, user_id } => {
            let exists = gateway.exists_for_owner(&todo_id, &user_id).await?;
            println!("{}", exists);
        }
        Commands::Create {
            user_id,
            name,
            due_date,
        } => {
            let request = CreateTodoRequest {
                name,
                due_date,
            };
            let todo = gateway.create(request.into_record(user_id)).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&todo, cli.format)),
                OutputFormat::Pretty => println!("Created:\n{}", pretty::format_todo(&todo)),
            }
        }
        Commands::Update {
            todo_id,
            user_id,
            name,
            due_date,
            done,
        } => {
            let update = UpdateTodoRequest {
                name,
                due_date,
                done,
            };
            gateway
                .update_fields(&todo_id, &user_id, &update.into())
                .await?;
            if !cli.quiet {
                println!("Updated todo {}", todo_id);
            }
        }
        Commands::Attach {
            todo_id,
            user_id,
            url,
        } => {
            gateway
                .update_attachment_reference(&todo_id, &user_id, &url)
                .await?;
            if !cli.quiet {
                println!("Attached {} to todo {}", url, todo_id);
            }
        }
        Commands::UploadUrl { todo_id, user_id } => {
            let target = gateway.generate_upload_target(&todo_id, &user_id).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&target, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_upload_target(&target)),
            }
        }
        Commands::PersistAttachment {
            todo_id,
            user_id,
            object_key,
        } => {
            gateway
                .persist_attachment_reference(&todo_id, &user_id, &object_key)
                .await?;
            if !cli.quiet {
                println!("Persisted attachment {} for todo {}", object_key, todo_id);
            }
        }
        Commands::Delete { todo_id, user_id } => {
            gateway.delete(&todo_id, &user_id).await?;
            if !cli.quiet {
                println!("Deleted todo {}", todo_id);
            }
        }
    }

    Ok(())
}
