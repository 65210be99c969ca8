use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Reference data error in {table}: {source}")]
    Data {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    pub(crate) fn data(table: &'static str) -> impl FnOnce(serde_json::Error) -> SimError {
        move |source| SimError::Data { table, source }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, SimError::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
