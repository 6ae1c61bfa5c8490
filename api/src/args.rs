use clap::Parser;
use kondate_core::domain::common::{KondateConfig, LLMConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "kondate-api", about = "AI meal plan generation service")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "PORT", default_value = "3333")]
    pub port: u16,

    #[arg(long, env = "ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Public base URL the UI layer uses for metadata and link generation.
    #[arg(long, env = "APP_BASE_URL", default_value = "http://localhost:3000")]
    pub base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "OPENAI_API_KEY")]
    pub openai_api_key: String,

    /// Model for text-only chat-completion generation.
    #[arg(long, env = "OPENAI_CHAT_MODEL", default_value = "gpt-4o-mini")]
    pub openai_chat_model: String,

    /// Model for image and structured-output generation.
    #[arg(long, env = "OPENAI_VISION_MODEL", default_value = "gpt-4o")]
    pub openai_vision_model: String,

    #[arg(long, env = "GOOGLE_API_KEY")]
    pub google_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_model: String,
}

impl From<Args> for KondateConfig {
    fn from(args: Args) -> Self {
        KondateConfig {
            llm: LLMConfig {
                openai_api_key: args.llm.openai_api_key,
                openai_chat_model: args.llm.openai_chat_model,
                openai_vision_model: args.llm.openai_vision_model,
                google_api_key: args.llm.google_api_key,
                gemini_model: args.llm.gemini_model,
            },
        }
    }
}
