pub mod config;
pub mod openai;
pub mod parser;

pub use config::LlmConfig;
pub use openai::OpenAiClient;
pub use parser::parse_user_request;
