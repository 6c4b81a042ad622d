use std::error::Error;
use std::fmt;
use std::io;

/// Errors raised by container construction, indexing, arithmetic and text I/O.
#[derive(Debug)]
pub enum ContainerError {
    /// Requested length/order is zero or above the configured maximum.
    InvalidSize { requested: usize, max: usize },
    /// A required buffer argument was absent.
    NullArgument(&'static str),
    /// Index is negative or not below the current size.
    IndexOutOfRange { index: i128, len: usize },
    /// Operands of a binary operation have incompatible lengths/orders.
    SizeMismatch { expected: usize, found: usize },
    /// A token could not be parsed as an element.
    Parse { position: usize, token: String },
    /// The stream ended before enough elements were read.
    UnexpectedEof { expected: usize, found: usize },
    Io(io::Error),
}

/// Category of a [`ContainerError`], without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidSize,
    NullArgument,
    IndexOutOfRange,
    SizeMismatch,
    Parse,
    UnexpectedEof,
    Io,
}

impl ContainerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContainerError::InvalidSize { .. } => ErrorKind::InvalidSize,
            ContainerError::NullArgument(_) => ErrorKind::NullArgument,
            ContainerError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            ContainerError::SizeMismatch { .. } => ErrorKind::SizeMismatch,
            ContainerError::Parse { .. } => ErrorKind::Parse,
            ContainerError::UnexpectedEof { .. } => ErrorKind::UnexpectedEof,
            ContainerError::Io(_) => ErrorKind::Io,
        }
    }
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ContainerError::InvalidSize { requested, max } => write!(
                f,
                "invalid size {}: must be between 1 and {}",
                requested, max
            ),
            ContainerError::NullArgument(name) => write!(f, "required argument `{}` is missing", name),
            ContainerError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            ContainerError::SizeMismatch { expected, found } => write!(
                f,
                "size mismatch: expected operand of size {}, found {}",
                expected, found
            ),
            ContainerError::Parse { position, token } => {
                write!(f, "cannot parse element {} from token {:?}", position, token)
            }
            ContainerError::UnexpectedEof { expected, found } => write!(
                f,
                "unexpected end of input: expected {} elements, read {}",
                expected, found
            ),
            ContainerError::Io(err) => write!(f, "i/o error: {}", err),
        }
    }
}

impl Error for ContainerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ContainerError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ContainerError {
    fn from(err: io::Error) -> Self {
        ContainerError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, ContainerError>;
