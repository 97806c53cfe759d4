//! Delivery of an exported PDF under its derived filename.
//!
//! The directory sink stages the payload in a `NamedTempFile` inside the
//! target directory and moves it into place without replacing an existing
//! file. The temporary file is a scoped resource: whether the write or the
//! move fails, dropping the handle removes it, so no partial download is ever
//! left behind.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::info;

use crate::export::{ExportError, PdfDownload};

const MAX_NAME_SUFFIX: u32 = 99;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveredFile {
    pub filename: String,
    pub path: PathBuf,
    pub size: usize,
}

/// Blocking by contract; async callers run it under `spawn_blocking`.
pub trait DownloadSink: Send + Sync {
    fn deliver(&self, download: &PdfDownload) -> Result<DeliveredFile, ExportError>;
}

pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&self, download: &PdfDownload) -> Result<DeliveredFile, ExportError> {
        let mut staged = NamedTempFile::new_in(&self.dir)?;
        staged.write_all(&download.bytes)?;
        staged.as_file().sync_all()?;

        // Never replace an earlier export: on a name clash retry as `<stem>-N.pdf`
        let mut filename = download.filename.clone();
        let mut suffix = 0;
        let target = loop {
            let target = self.dir.join(&filename);
            match staged.persist_noclobber(&target) {
                Ok(_) => break target,
                Err(e)
                    if e.error.kind() == io::ErrorKind::AlreadyExists
                        && suffix < MAX_NAME_SUFFIX =>
                {
                    staged = e.file;
                    suffix += 1;
                    filename = with_suffix(&download.filename, suffix);
                }
                Err(e) => return Err(ExportError::Io(e.error)),
            }
        };

        info!(
            "Delivered {filename} ({} bytes) to {}",
            download.bytes.len(),
            target.display()
        );

        Ok(DeliveredFile {
            filename,
            path: target,
            size: download.bytes.len(),
        })
    }
}

fn with_suffix(filename: &str, suffix: u32) -> String {
    match filename.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem}-{suffix}.{ext}"),
        None => format!("{filename}-{suffix}"),
    }
}
