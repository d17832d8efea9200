//! Stream a conversation turn and print fragments as they arrive.
//!
//! Prerequisites:
//! - Set `CHATGPT_ACCESS_TOKEN`
//!
//! Run:
//!   CHATGPT_ACCESS_TOKEN=your_token cargo run --example stream_conversation

use chatgpt_client::ConversationClientBuilder;
use futures::StreamExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    if std::env::var("CHATGPT_ACCESS_TOKEN").is_err() {
        eprintln!("Error: CHATGPT_ACCESS_TOKEN environment variable is not set.");
        eprintln!("Run with: CHATGPT_ACCESS_TOKEN=your_token cargo run --example stream_conversation");
        std::process::exit(1);
    }

    let client = ConversationClientBuilder::new().build()?;

    let prompt = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Say hello in one short sentence.".to_string());

    let mut events = client.stream_conversation(prompt).await?;
    while let Some(event) = events.next().await {
        let event = event?;
        // Each event carries the full text so far; print the latest fragment.
        if let Some(text) = event.text() {
            println!("{}", text);
        }
    }

    println!("--- stream complete ---");
    Ok(())
}
