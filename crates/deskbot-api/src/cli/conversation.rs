//! Conversation listing and deletion commands.

use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;

use crate::state::AppState;

/// `deskbot list` - list stored conversations, newest first.
pub async fn list(state: &AppState, json: bool) -> anyhow::Result<()> {
    let conversations = state.support.list_conversations().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&conversations)?);
        return Ok(());
    }

    if conversations.is_empty() {
        println!("  No conversations stored yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Session", "Created", "Escalated"]);
    for head in &conversations {
        table.add_row(vec![
            head.session_id.clone(),
            head.created_at.to_rfc3339(),
            if head.escalated { "yes" } else { "no" }.to_string(),
        ]);
    }

    println!("{table}");
    println!("  {} conversation(s)", conversations.len());
    Ok(())
}

/// `deskbot delete <session-id>` - delete a conversation.
pub async fn delete(state: &AppState, session_id: &str, json: bool) -> anyhow::Result<()> {
    let existed = state.support.delete_conversation(session_id).await?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "session_id": session_id, "deleted": existed })
        );
    } else if existed {
        println!(
            "  {} Conversation {session_id} deleted",
            console::style("✓").green()
        );
    } else {
        println!(
            "  {} No conversation with id {session_id}",
            console::style("✗").red()
        );
    }

    Ok(())
}
