use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No compatible GPU adapter: {0}")]
    AdapterNotFound(String),

    #[error("Surface creation failed: {0}")]
    SurfaceCreation(String),

    #[error("Device request failed: {0}")]
    DeviceRequest(String),
}
