#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    #[error("{0}")]
    Rejected(String),
}
