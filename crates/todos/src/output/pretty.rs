//! Pretty output formatting.

use todos_core::attachment::UploadTarget;
use todos_core::todo::TodoRecord;

/// Format a todo for display.
pub fn format_todo(todo: &TodoRecord) -> String {
    let status = if todo.done { "done" } else { "open" };
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  Owner: {}\n  Created: {}",
        todo.name, status, todo.todo_id, todo.user_id, todo.created_at
    );
    if let Some(due_date) = &todo.due_date {
        output.push_str(&format!("\n  Due: {}", due_date));
    }
    if let Some(url) = &todo.attachment_url {
        output.push_str(&format!("\n  Attachment: {}", url));
    }
    output
}

/// Format todos for display.
pub fn format_todos(todos: &[TodoRecord]) -> String {
    if todos.is_empty() {
        return "No todos found.".to_string();
    }
    let mut output = format!("TODOS ({})\n", todos.len());
    output.push_str(&"-".repeat(40));
    for todo in todos {
        output.push_str(&format!("\n{}", format_todo(todo)));
        output.push('\n');
    }
    output
}

/// Format an upload target for display.
pub fn format_upload_target(target: &UploadTarget) -> String {
    format!(
        "Upload URL: {}\n  Attachment: {}\n  Expires: {}",
        target.upload_url,
        target.attachment_url,
        target.expires_at.to_rfc3339()
    )
}
