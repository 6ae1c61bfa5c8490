pub mod gemini_client;
pub mod openai_client;
