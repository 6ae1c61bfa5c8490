use crate::domain::common::LLMConfig;
use crate::domain::meal_plan::ports::LLMClient;

/// Concrete service assembly, generic over the two provider clients so the
/// business logic can be exercised against mocks.
#[derive(Debug, Clone)]
pub struct Service<O, G>
where
    O: LLMClient,
    G: LLMClient,
{
    pub(crate) openai_client: O,
    pub(crate) gemini_client: G,
    pub(crate) llm: LLMConfig,
}

impl<O, G> Service<O, G>
where
    O: LLMClient,
    G: LLMClient,
{
    pub fn new(openai_client: O, gemini_client: G, llm: LLMConfig) -> Self {
        Self {
            openai_client,
            gemini_client,
            llm,
        }
    }
}
