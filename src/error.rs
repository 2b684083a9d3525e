use thiserror::Error;

/// Failure retrieving the raw catalog bytes.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("catalog request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("catalog request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read catalog file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Malformed or schema-mismatched catalog payload.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("catalog is not a valid proposal list")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("could not fetch the proposal catalog")]
    Fetch(#[from] FetchError),

    #[error("could not decode the proposal catalog")]
    Decode(#[from] DecodeError),
}
