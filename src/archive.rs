//! Archive writer
//!
//! A gzip-compressed tar stream addressed by forward-slash archive keys.
//! Several collectors append concurrently; the tar builder sits behind a
//! single mutex so entries are never interleaved. Headers are deterministic
//! (mode 0644, uid/gid 0, mtime 0), so two runs over the same tree differ at
//! most in entry order.
//!
//! Only `finish` completes the stream. An archive that is abandoned or
//! dropped closes its gate first, so neither the tar trailer nor the gzip
//! footer reaches the sink.

use flate2::write::GzEncoder;
use flate2::{Compression, GzBuilder};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tar::{Builder, Header};

use crate::error::{
    Result, archive_write_failed, duplicate_entry, file_read_failed, finish_failed,
};

/// Byte sink receiving the archive
///
/// `finish` is invoked exactly once, after the tar trailer and the gzip
/// footer are written. It must return only once the bytes are durable.
pub trait OutputSink: Write + Send {
    fn finish(&mut self) -> io::Result<()> {
        self.flush()
    }
}

impl OutputSink for File {
    fn finish(&mut self) -> io::Result<()> {
        self.flush()?;
        self.sync_all()
    }
}

impl OutputSink for Vec<u8> {}

impl OutputSink for io::Sink {}

/// Sits between the compressor and the sink; once closed, writes are dropped
struct Gate<W> {
    sink: W,
    open: bool,
}

impl<W: Write> Write for Gate<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.open {
            self.sink.write(buf)
        } else {
            Ok(buf.len())
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.open { self.sink.flush() } else { Ok(()) }
    }
}

struct State<W: Write> {
    builder: Option<Builder<GzEncoder<Gate<W>>>>,
    written: BTreeSet<String>,
}

/// Append-only archive shared by all collectors of a run
pub struct Archive<W: OutputSink> {
    state: Mutex<State<W>>,
}

impl<W: OutputSink> Archive<W> {
    /// Open an archive bound to `sink`
    pub fn new(sink: W) -> Self {
        let encoder = GzBuilder::new()
            .mtime(0)
            .operating_system(255)
            .write(Gate { sink, open: true }, Compression::default());
        let mut builder = Builder::new(encoder);
        builder.mode(tar::HeaderMode::Deterministic);

        Self {
            state: Mutex::new(State {
                builder: Some(builder),
                written: BTreeSet::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State<W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stream `source` into the archive under `key`
    pub fn append_file(&self, key: &str, source: &Path) -> Result<()> {
        let file = File::open(source)
            .map_err(|e| file_read_failed(source.display().to_string(), e.to_string()))?;
        let size = file
            .metadata()
            .map_err(|e| file_read_failed(source.display().to_string(), e.to_string()))?
            .len();

        let mut header = Header::new_gnu();
        header.set_size(size);
        header.set_mode(0o644);
        header.set_uid(0);
        header.set_gid(0);
        header.set_mtime(0);

        let mut state = self.lock();
        if !state.written.insert(key.to_string()) {
            return Err(duplicate_entry(key));
        }
        let builder = state
            .builder
            .as_mut()
            .ok_or_else(|| archive_write_failed(key, "archive already finished"))?;
        builder
            .append_data(&mut header, key, file)
            .map_err(|e| archive_write_failed(key, e.to_string()))?;

        tracing::debug!(entry = key, "archived");
        Ok(())
    }

    /// Archive keys written so far, sorted
    pub fn paths(&self) -> Vec<String> {
        self.lock().written.iter().cloned().collect()
    }

    /// Write the trailer, flush the compressor and wait for the sink
    ///
    /// Returns the sink once it has reported completion.
    pub fn finish(mut self) -> Result<W> {
        let builder = self
            .state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .builder
            .take()
            .ok_or_else(|| finish_failed("archive already finished"))?;

        let encoder = builder
            .into_inner()
            .map_err(|e| finish_failed(format!("writing tar trailer: {e}")))?;
        let mut sink = encoder
            .finish()
            .map_err(|e| finish_failed(format!("compressing gzip stream: {e}")))?
            .sink;
        sink.finish()
            .map_err(|e| finish_failed(format!("flushing output: {e}")))?;

        Ok(sink)
    }

    /// Give up a failed archive without completing it
    ///
    /// The sink is dropped without `finish`; whatever already reached it is
    /// a truncated stream that does not read back.
    pub fn abandon(self) {
        tracing::debug!(entries = self.lock().written.len(), "archive abandoned");
    }
}

impl<W: OutputSink> Drop for Archive<W> {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(builder) = state.builder.as_mut() {
            builder.get_mut().get_mut().open = false;
        }
    }
}

/// Read back the entry paths of a finished archive, in stored order
pub fn read_entry_paths<R: io::Read>(reader: R) -> io::Result<Vec<String>> {
    let mut archive = tar::Archive::new(flate2::read::GzDecoder::new(reader));
    let mut paths = Vec::new();
    for entry in archive.entries()? {
        let entry = entry?;
        paths.push(entry.path()?.to_string_lossy().replace('\\', "/"));
    }
    Ok(paths)
}
