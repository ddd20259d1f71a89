//! Shared output destination
//!
//! One writable stream (console or append-mode file) behind a single mutex.
//! The lock is held only around the write call, never around formatting, so
//! concurrent callers may land in either order but each line lands whole.

use super::error::{LoggerError, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Debug)]
enum Destination {
    Console,
    File(BufWriter<File>),
    /// After `close`; writes are silently dropped.
    Closed,
}

#[derive(Debug)]
pub struct Sink {
    dest: Mutex<Destination>,
}

impl Sink {
    /// Open the destination, terminating the process on failure.
    ///
    /// A logger that cannot write has no way to fulfill its contract, so an
    /// unopenable destination is treated as a fatal dependency failure.
    /// Embedding contexts that cannot tolerate process exit should use
    /// [`Sink::try_open`].
    pub fn open(path: Option<&Path>) -> Self {
        match Self::try_open(path) {
            Ok(sink) => sink,
            Err(err) => {
                eprintln!("fieldlog: {}", err);
                std::process::exit(1);
            }
        }
    }

    /// Open the destination, returning an error instead of exiting.
    ///
    /// `None` selects the console; a path is opened for append, created if
    /// absent.
    pub fn try_open(path: Option<&Path>) -> Result<Self> {
        let dest = match path {
            None => Destination::Console,
            Some(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        LoggerError::sink_open(path.display().to_string(), e.to_string())
                    })?;
                Destination::File(BufWriter::new(file))
            }
        };
        Ok(Self {
            dest: Mutex::new(dest),
        })
    }

    /// Append one already-rendered line plus a trailing newline.
    pub fn write_line(&self, line: &str) -> Result<()> {
        let mut dest = self.dest.lock();
        match &mut *dest {
            Destination::Console => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                out.write_all(line.as_bytes())?;
                out.write_all(b"\n")?;
            }
            Destination::File(writer) => {
                writer.write_all(line.as_bytes())?;
                writer.write_all(b"\n")?;
            }
            Destination::Closed => {}
        }
        Ok(())
    }

    /// Flush buffered output to the destination.
    pub fn flush(&self) -> Result<()> {
        let mut dest = self.dest.lock();
        match &mut *dest {
            Destination::Console => io::stdout().flush()?,
            Destination::File(writer) => writer.flush()?,
            Destination::Closed => {}
        }
        Ok(())
    }

    /// Flush and release the file handle.
    ///
    /// Must be called before process exit when a file destination is in
    /// use, or buffered bytes may be lost. Later writes are dropped.
    pub fn close(&self) -> Result<()> {
        let mut dest = self.dest.lock();
        if let Destination::File(writer) = &mut *dest {
            writer.flush()?;
        }
        *dest = Destination::Closed;
        Ok(())
    }
}

impl Drop for Sink {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
