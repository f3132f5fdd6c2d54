//! Live connectivity test for the LLM client (requires an API key).

use gloat4::{Completion, LlmClient, LlmConfig, LlmProvider};

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_groq_connectivity() {
    dotenvy::dotenv().ok();

    let api_key = std::env::var("GROQ_API_KEY").expect("GROQ_API_KEY not set");

    let config = LlmConfig::new(
        LlmProvider::Groq,
        api_key,
        "llama-3.1-8b-instant".to_string(),
        50,
    );

    let client = LlmClient::new(config);

    let response = client
        .complete("Say 'Hello, world!' and nothing else.")
        .await
        .expect("Failed to generate");

    assert!(!response.is_empty(), "Response should not be empty");
    eprintln!("Response: {}", response);
}
