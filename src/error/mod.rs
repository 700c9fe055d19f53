use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Could not resolve latest version of {package}: {reason}")]
    VersionLookup { package: String, reason: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Install failed: {0}")]
    Install(String),

    #[error("Post-install step `{command}` failed for {package}: {reason}")]
    PostInstall {
        package: String,
        command: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl Error {
    /// Version lookup failure for `package`
    pub fn lookup(package: &str, reason: impl Into<String>) -> Self {
        Error::VersionLookup {
            package: package.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_names_package() {
        let err = Error::lookup("express", "HTTP 404");
        let msg = err.to_string();
        assert!(msg.contains("express"));
        assert!(msg.contains("HTTP 404"));
    }

    #[test]
    fn test_post_install_error_message() {
        let err = Error::PostInstall {
            package: "typescript".to_string(),
            command: "npx tsc --init".to_string(),
            reason: "exit code 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("npx tsc --init"));
        assert!(msg.contains("typescript"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
