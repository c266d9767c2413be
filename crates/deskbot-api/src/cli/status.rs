//! `status` command: data directory and storage overview.

use crate::state::AppState;

pub async fn status(state: &AppState, json: bool) -> anyhow::Result<()> {
    let conversations = state.support.list_conversations().await?;
    let escalated = conversations.iter().filter(|c| c.escalated).count();

    if json {
        let status = serde_json::json!({
            "data_dir": state.data_dir.display().to_string(),
            "conversations": conversations.len(),
            "escalated": escalated,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!("  {} Deskbot status", console::style("💬").bold());
    println!();
    println!("  Data dir:       {}", state.data_dir.display());
    println!("  Conversations:  {}", conversations.len());
    println!("  Escalated:      {escalated}");
    println!();
    Ok(())
}
