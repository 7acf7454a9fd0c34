pub mod application;
pub mod connector;
pub mod domain;

pub use application::{ChatClient, ChatSession};

pub use connector::{MistralClient, MistralConfig, MockChatClient};

pub use domain::{Credential, DomainError, Role, TranscriptStore, Turn};
