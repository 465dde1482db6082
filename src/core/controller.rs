use serde::{Deserialize, Serialize};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub store: RepositoryStore,
}

impl AppState {
    pub fn new(branch: &str, store: RepositoryStore) -> AppState {
        AppState {
            config: Configuration::new(branch),
            store,
        }
    }
}

// ConsoleMessage is the line printed back to the operator when a command fails
#[derive(Debug, PartialEq, Clone)]
pub struct ConsoleMessage(pub String);

impl From<CommandError> for ConsoleMessage {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::DuplicateKey { message } => {
                ConsoleMessage(format!("Error: {}", message))
            }
            CommandError::NotFound { message } => {
                ConsoleMessage(format!("Error: {}", message))
            }
            CommandError::Validation { message, .. } => {
                ConsoleMessage(message)
            }
            CommandError::Serialization { message } => {
                ConsoleMessage(format!("Error: {}", message))
            }
            CommandError::Runtime { message, .. } => {
                ConsoleMessage(format!("Error: {}", message))
            }
        }
    }
}
