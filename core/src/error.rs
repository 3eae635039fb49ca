use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid range for {field}: min {min} > max {max} or bound not finite")]
    InvalidRange { field: &'static str, min: f64, max: f64 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid month '{input}': expected Jan..Dec or 1..12")]
    InvalidMonth { input: String },

    #[error("Area selection contained no coordinates")]
    EmptySelection,
}

pub type SimResult<T> = Result<T, SimError>;
