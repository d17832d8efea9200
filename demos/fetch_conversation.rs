//! Fetch a conversation turn as a fully materialized event list.
//!
//! Run:
//!   CHATGPT_ACCESS_TOKEN=your_token cargo run --example fetch_conversation

use chatgpt_client::ConversationClientBuilder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = ConversationClientBuilder::new().build()?;

    let prompt = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Say hello in one short sentence.".to_string());

    let events = client.fetch_conversation(prompt).await?;
    println!("decoded {} events", events.len());

    // The last message-bearing event holds the complete reply.
    if let Some(text) = events.iter().rev().find_map(|e| e.text()) {
        println!("--- reply ---\n{}", text);
    }

    Ok(())
}
