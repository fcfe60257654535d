use std::fmt::{Debug, Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum QrError {
    DataTooLong,
    InvalidVersion,
    InvalidMaskPattern,
}

impl Display for QrError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let msg = match *self {
            Self::DataTooLong => "Data too long",
            Self::InvalidVersion => "Invalid version",
            Self::InvalidMaskPattern => "Invalid mask pattern",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for QrError {}

pub type QrResult<T> = Result<T, QrError>;
