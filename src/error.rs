use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("component {id} not found in media stream {stream}")]
    ComponentNotFound { stream: String, id: u32 },
    #[error("component {id} of media stream {stream} already released")]
    ComponentReleased { stream: String, id: u32 },
    #[error("media stream {0} has been freed")]
    StreamFreed(String),
    #[error("media stream not found: {0}")]
    StreamNotFound(String),
    #[error("media stream {0} already exists")]
    DuplicateStream(String),
    #[error("media stream {0} belongs to another agent")]
    ForeignStream(String),
    #[error("media stream {stream} reached its component limit: {limit}")]
    ComponentLimit { stream: String, limit: usize },
    #[error("component ids of media stream {0} exhausted")]
    ComponentIdExhausted(String),
    #[error("invalid transport:{0}")]
    InvalidTransport(String),
}

pub type Result<T, E = Error> = ::std::result::Result<T, E>;
