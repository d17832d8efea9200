//! List the model variants the backend offers.
//!
//! Run:
//!   CHATGPT_ACCESS_TOKEN=your_token cargo run --example list_models

use chatgpt_client::ConversationClientBuilder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = ConversationClientBuilder::new().build()?;

    println!("Requesting model list...");
    match client.list_models().await {
        Ok(catalog) => {
            println!("Available models:");
            for model in catalog.models {
                println!("- {} {}", model.slug, model.title.unwrap_or_default());
            }
        }
        Err(e) => {
            println!("Error listing models: {}", e);
            println!("Note: This is expected if CHATGPT_ACCESS_TOKEN is missing or invalid.");
        }
    }

    Ok(())
}
