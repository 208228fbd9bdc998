mod client;

pub use client::{AiClientConfig, OpenAiRecommendationClient};
