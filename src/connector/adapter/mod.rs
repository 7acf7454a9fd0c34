mod mistral_client;
mod mock_chat_client;

pub use mistral_client::*;
pub use mock_chat_client::*;
