use thiserror::Error;

pub type Reason = String;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// request never produced a response: unreachable host, CORS, aborted
    #[error("network error: {0}")]
    Network(Reason),
    /// server answered outside of 2xx
    #[error("server responded {status}: {reason}")]
    Status { status: u16, reason: Reason },
    /// response body is not the json we expected
    #[error("decode error: {0}")]
    Decode(Reason),
    #[error("invalid config: {0}")]
    Config(Reason),
}

impl From<gloo_net::Error> for Error {
    fn from(value: gloo_net::Error) -> Self {
        match value {
            gloo_net::Error::SerdeError(err) => Error::Decode(err.to_string()),
            err => Error::Network(err.to_string()),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(value: url::ParseError) -> Self {
        Error::Config(value.to_string())
    }
}
