use std::error::Error;
use std::{fmt, io};

use super::color::Color;

#[derive(Debug)]
pub enum ColorClientError {
    IOError { error: io::Error },
    // clean EOF where the protocol still required a byte
    Disconnected,
    // the server echoed a different color than the one we sent;
    // either a concurrent update from another client or a server bug
    AckMismatch { sent: Color, acked: Color },
}

impl ColorClientError {
    fn new(error: io::Error) -> ColorClientError {
        ColorClientError::IOError { error }
    }
}

impl From<io::Error> for ColorClientError {
    fn from(error: io::Error) -> Self {
        ColorClientError::new(error)
    }
}

impl fmt::Display for ColorClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ColorClientError::IOError { error } => write!(f, "IO Error: {}", error),
            ColorClientError::Disconnected => {
                write!(f, "server closed the connection mid-exchange")
            }
            ColorClientError::AckMismatch { sent, acked } => write!(
                f,
                "server acknowledged color {} but we sent {}",
                acked, sent
            ),
        }
    }
}

impl Error for ColorClientError {}
