//! Status source collaborator

use alloc::vec::Vec;

use crate::error::FetchError;

/// Fetches the raw status document
///
/// Implemented by the board firmware with an HTTP GET of the configured
/// endpoint. The monitor decodes the body itself.
pub trait StatusSource {
    /// Response body of one request
    fn fetch(&mut self) -> Result<Vec<u8>, FetchError>;
}
