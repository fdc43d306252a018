// synchronous client for the single-byte color service
// one TcpStream per invocation, no retries, no reconnects
use std::io;
use std::net::{Shutdown, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use byteorder::{ReadBytesExt, WriteBytesExt};
use log::debug;
use rand::Rng;

use crate::config::ServerConfig;

mod color;
pub use color::{Color, WHEEL_MAX, WHEEL_MIN};

mod errors;
pub use errors::ColorClientError;

// how often the monitor loop wakes up to check its stop flag
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(200);

pub struct ColorClient {
    stream: TcpStream,
}

/// Result of a completed update round-trip: the color the server held
/// before, and the new color it acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub previous: Color,
    pub committed: Color,
}

/// Progress of an update round-trip, reported as each value crosses the
/// wire so callers can surface it even when a later step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStep {
    /// the color the server held when we asked
    Current(Color),
    /// the color we are proposing, reported before the ack arrives
    Proposed(Color),
}

impl ColorClient {
    /// Connects to the configured server. No connect timeout; an
    /// unreachable peer surfaces as an IO error from the OS.
    pub fn connect(config: &ServerConfig) -> Result<Self, ColorClientError> {
        let stream = TcpStream::connect(config.addr())?;
        debug!("connected to {}", config);
        Ok(ColorClient { stream })
    }

    /// Reads one color byte. `Ok(None)` means the peer closed the stream
    /// cleanly before sending anything.
    pub fn read_color(&mut self) -> Result<Option<Color>, ColorClientError> {
        match self.stream.read_u8() {
            Ok(byte) => Ok(Some(Color::from_byte(byte))),
            Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    pub fn write_color(&mut self, color: Color) -> Result<(), ColorClientError> {
        self.stream.write_u8(color.as_byte())?;
        Ok(())
    }

    /// Update round-trip with a random wheel color.
    pub fn update<R, F>(
        &mut self,
        rng: &mut R,
        report: F,
    ) -> Result<UpdateOutcome, ColorClientError>
    where
        R: Rng,
        F: FnMut(UpdateStep),
    {
        self.update_to(Color::random(rng), report)
    }

    /// Reads the current color, writes `next`, and reads the server's
    /// acknowledgment. `report` is called as each step happens, so the
    /// current and proposed values are visible even if the exchange fails
    /// afterwards. The ack must echo `next` exactly; anything else is an
    /// `AckMismatch`. EOF at either read is `Disconnected`.
    pub fn update_to<F>(
        &mut self,
        next: Color,
        mut report: F,
    ) -> Result<UpdateOutcome, ColorClientError>
    where
        F: FnMut(UpdateStep),
    {
        let previous = self.read_color()?.ok_or(ColorClientError::Disconnected)?;
        report(UpdateStep::Current(previous));
        debug!("server holds {}, proposing {}", previous, next);

        report(UpdateStep::Proposed(next));
        self.write_color(next)?;

        let acked = self.read_color()?.ok_or(ColorClientError::Disconnected)?;
        if acked != next {
            return Err(ColorClientError::AckMismatch { sent: next, acked });
        }

        Ok(UpdateOutcome {
            previous,
            committed: acked,
        })
    }

    /// Reads color bytes until the peer closes the stream or `stop` is
    /// raised, calling `report` once per byte in arrival order. Returns
    /// how many colors were reported.
    ///
    /// The socket is switched to a short read timeout so the stop flag
    /// gets polled between bytes; a timed-out read is not an error.
    pub fn monitor<F>(
        &mut self,
        stop: &AtomicBool,
        mut report: F,
    ) -> Result<usize, ColorClientError>
    where
        F: FnMut(Color),
    {
        self.stream.set_read_timeout(Some(STOP_POLL_INTERVAL))?;

        let mut seen = 0;
        while !stop.load(Ordering::Relaxed) {
            match self.stream.read_u8() {
                Ok(byte) => {
                    report(Color::from_byte(byte));
                    seen += 1;
                }
                Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(error)
                    if error.kind() == io::ErrorKind::WouldBlock
                        || error.kind() == io::ErrorKind::TimedOut =>
                {
                    continue;
                }
                Err(error) => return Err(error.into()),
            }
        }

        Ok(seen)
    }

    pub fn shutdown(&self) -> Result<(), ColorClientError> {
        self.stream.shutdown(Shutdown::Both)?;
        Ok(())
    }
}
