pub mod client;

pub use client::{init_ai_client, AiClient, AiClientTrait, OpenAiClient};
