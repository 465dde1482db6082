use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable {
    fn id(&self) -> String;
}

pub const DEFAULT_SEPARATOR: &str = "--------------------";

// Configuration abstracts config options for the catalog console
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub log_level: String,
    pub separator: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            log_level: "warn".to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::{Configuration, DEFAULT_SEPARATOR};

    #[test]
    fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!("warn", config.log_level.as_str());
        assert_eq!(DEFAULT_SEPARATOR, config.separator.as_str());
    }
}
