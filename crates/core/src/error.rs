use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error(
        "{description} setting is missing. Pass it using the '{setting}' parameter or the {env_var} environment variable."
    )]
    MissingSetting {
        /// Settings field name, e.g. `project`.
        setting: String,
        /// Environment variable consulted as fallback.
        env_var: String,
        /// Human readable name used in the message.
        description: String,
    },
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl SdkError {
    pub fn missing_setting(
        setting: impl Into<String>,
        env_var: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        SdkError::MissingSetting {
            setting: setting.into(),
            env_var: env_var.into(),
            description: description.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        SdkError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Format error details for better debugging visibility
    pub fn format_details(&self) -> String {
        match self {
            SdkError::MissingSetting {
                setting, env_var, ..
            } => format!("missing setting '{}' (env {})", setting, env_var),
            SdkError::InvalidArgument { message } => format!("invalid argument: {}", message),
            SdkError::Serde(se) => format!("serde error: {}", se),
        }
    }
}
