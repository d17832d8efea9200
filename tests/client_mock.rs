//! Client integration tests against a local mock server.

use chatgpt_client::{ConversationClientBuilder, Error};
use futures::StreamExt;
use mockito::Matcher;
use serde_json::json;

fn client_for(server: &mockito::ServerGuard) -> chatgpt_client::ConversationClient {
    ConversationClientBuilder::new()
        .access_token("test-token")
        .base_url(server.url())
        .model("test-model")
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn list_models_parses_catalog_and_sends_bearer_auth() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/backend-api/models")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body(
            json!({
                "models": [
                    {"slug": "text-davinci-002-render-sha", "title": "Default", "tags": ["free"]},
                    {"slug": "gpt-4", "max_tokens": 8192}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let catalog = client_for(&server).list_models().await.unwrap();

    mock.assert_async().await;
    assert_eq!(catalog.models.len(), 2);
    assert_eq!(catalog.models[0].slug, "text-davinci-002-render-sha");
    assert_eq!(catalog.models[1].max_tokens, Some(8192));
}

#[tokio::test]
async fn list_conversations_forwards_offset_and_limit() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/backend-api/conversations")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("offset".into(), "20".into()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "items": [{"id": "c-1", "title": "First chat"}],
                "total": 1,
                "limit": 10,
                "offset": 20
            })
            .to_string(),
        )
        .create_async()
        .await;

    let page = client_for(&server).list_conversations(20, 10).await.unwrap();

    mock.assert_async().await;
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "c-1");
    assert_eq!(page.offset, 20);
}

#[tokio::test]
async fn fetch_conversation_decodes_framed_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/backend-api/conversation")
        .match_body(Matcher::PartialJson(json!({
            "action": "next",
            "model": "test-model"
        })))
        .with_status(200)
        .with_body("data: {\"a\":1}\n\ndata: [DONE]\n")
        .create_async()
        .await;

    let events = client_for(&server).fetch_conversation("hello").await.unwrap();

    mock.assert_async().await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].extra["a"], 1);
}

#[tokio::test]
async fn stream_conversation_yields_events_then_ends() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/backend-api/conversation")
        .with_status(200)
        .with_body(
            "data: {\"message\":{\"id\":\"m-1\",\"content\":{\"content_type\":\"text\",\"parts\":[\"Hel\"]}}}\n\
             data: {\"message\":{\"id\":\"m-1\",\"content\":{\"content_type\":\"text\",\"parts\":[\"Hello\"]}}}\n\
             data: [DONE]\n",
        )
        .create_async()
        .await;

    let mut stream = client_for(&server).stream_conversation("hi").await.unwrap();

    let mut parts = Vec::new();
    while let Some(event) = stream.next().await {
        parts.push(event.unwrap().text().unwrap_or_default().to_string());
    }

    assert_eq!(parts, vec!["Hel", "Hello"]);
}

#[tokio::test]
async fn stream_reply_carries_conversation_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/backend-api/conversation")
        .match_body(Matcher::PartialJson(json!({
            "action": "next",
            "conversation_id": "c-1",
            "parent_message_id": "m-9"
        })))
        .with_status(200)
        .with_body("data: {\"a\":1}\ndata: [DONE]\n")
        .create_async()
        .await;

    let mut stream = client_for(&server)
        .stream_reply("more please", "c-1", "m-9")
        .await
        .unwrap();

    let mut count = 0;
    while let Some(event) = stream.next().await {
        event.unwrap();
        count += 1;
    }

    mock.assert_async().await;
    assert_eq!(count, 1);
}

#[tokio::test]
async fn fetch_conversation_fails_whole_call_on_malformed_frame() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/backend-api/conversation")
        .with_status(200)
        .with_body("data: {\"a\":1}\ndata: not-json\ndata: {\"a\":2}\n")
        .create_async()
        .await;

    let err = client_for(&server).fetch_conversation("hello").await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn http_error_status_propagates_as_transport_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/backend-api/models")
        .with_status(500)
        .create_async()
        .await;

    let err = client_for(&server).list_models().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
