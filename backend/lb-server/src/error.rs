use thiserror::Error;

/// Startup failures; anything here aborts the process before it serves requests
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] lb_config::ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] lb_store::StoreError),

    #[error("Link client error: {0}")]
    LinkClient(#[from] lb_link::LinkError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
