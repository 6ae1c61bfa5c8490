use crate::domain::common::{KondateConfig, services::Service};
use crate::infrastructure::llm::{gemini_client::GeminiLLMClient, openai_client::OpenAILLMClient};

pub type KondateService = Service<OpenAILLMClient, GeminiLLMClient>;

pub fn create_service(config: KondateConfig) -> KondateService {
    let openai_client = OpenAILLMClient::new(config.llm.openai_api_key.clone());
    let gemini_client = GeminiLLMClient::new(config.llm.google_api_key.clone());

    Service::new(openai_client, gemini_client, config.llm)
}
