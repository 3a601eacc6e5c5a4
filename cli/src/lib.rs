pub mod config;

use mountain_query::QueryError;
use std::path::PathBuf;

/// Error type for failures that end the program
#[derive(Debug)]
pub enum CliError {
    StoreNotFound(PathBuf),
    SourceLost(QueryError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::StoreNotFound(path) => {
                write!(
                    f,
                    "Mountain store not found: {}\n\nPossible fixes:\n  - Create it with: mq load <mountains.json>\n  - Use --data to point at an existing store\n  - Set [store] path in the config file",
                    path.display()
                )
            }
            CliError::SourceLost(e) => {
                write!(
                    f,
                    "Lost access to the mountain store: {e}\n\nCheck that the store file is readable and valid JSON, or recreate it with: mq load <mountains.json>"
                )
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::StoreNotFound(_) => None,
            CliError::SourceLost(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_store_not_found_display() {
        let error = CliError::StoreNotFound(PathBuf::from("/tmp/none.json"));
        let display_msg = format!("{}", error);

        assert!(display_msg.contains("Mountain store not found"));
        assert!(display_msg.contains("/tmp/none.json"));
        assert!(display_msg.contains("Possible fixes"));
        assert!(display_msg.contains("mq load"));
        assert!(display_msg.contains("--data"));
    }

    #[test]
    fn test_cli_error_source_lost_display() {
        let error = CliError::SourceLost(QueryError::Source("permission denied".to_string()));
        let display_msg = format!("{}", error);

        assert!(display_msg.contains("Lost access to the mountain store"));
        assert!(display_msg.contains("permission denied"));
    }

    #[test]
    fn test_cli_error_implements_std_error() {
        let error: Box<dyn std::error::Error> =
            CliError::StoreNotFound(PathBuf::from("x.json")).into();
        assert!(error.source().is_none());

        let error: Box<dyn std::error::Error> =
            CliError::SourceLost(QueryError::Source("gone".to_string())).into();
        assert!(error.source().is_some());
    }
}
