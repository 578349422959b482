//! Read command implementation

use anyhow::Result;

use crate::store::ProjectStore;

pub fn run(store: &ProjectStore, id: &str) -> Result<()> {
    let conversation = store.conversation(id)?;

    println!("\n{}", "=".repeat(80));
    println!(
        "Project: {} | Conversation: {}",
        id, conversation.conversation_id
    );
    println!("Started: {}", conversation.created_at.to_rfc3339());
    println!("{}", "=".repeat(80));

    if conversation.messages.is_empty() {
        println!("\nNo messages yet.");
        return Ok(());
    }

    for msg in &conversation.messages {
        println!(
            "\n[{}] ({})",
            msg.role.as_str().to_uppercase(),
            msg.timestamp.to_rfc3339()
        );
        println!("{}", msg.content);
        println!("{}", "-".repeat(40));
    }

    Ok(())
}
