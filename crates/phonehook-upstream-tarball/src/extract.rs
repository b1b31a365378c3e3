//! Filtered, flattened tarball extraction.

use std::{
    collections::BTreeSet,
    fs::File,
    io::{self, Read},
    path::Path,
};

use flate2::read::GzDecoder;
use phonehook_upstream_interface::{Result, UpstreamError};
use tar::Archive;
use tracing::debug;

use crate::TarballError;

/// Reader failing once more than `limit` bytes went through.
pub(crate) struct LimitedReader<R> {
    inner: R,
    remaining: u64,
    exceeded: bool,
}

impl<R> LimitedReader<R> {
    pub fn new(inner: R, limit: u64) -> Self {
        Self {
            inner,
            remaining: limit,
            exceeded: false,
        }
    }

    pub fn exceeded(&self) -> bool {
        self.exceeded
    }
}

impl<R: Read> Read for LimitedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.inner.read(buf)?;
        if read as u64 > self.remaining {
            self.exceeded = true;
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "download size limit exceeded",
            ));
        }

        self.remaining -= read as u64;
        Ok(read)
    }
}

/// Extract every regular file whose archive path contains `marker` into
/// `destination`, keeping only the base filename.
///
/// At most `limit` bytes of compressed input are read.
pub(crate) fn extract_release_files<R: Read>(
    reader: R,
    marker: &str,
    destination: &Path,
    limit: u64,
    url: &str,
) -> Result<Vec<String>> {
    let mut archive = Archive::new(GzDecoder::new(LimitedReader::new(reader, limit)));
    let result = extract_entries(&mut archive, marker, destination);

    if archive.into_inner().into_inner().exceeded() {
        return Err(UpstreamError::TooLarge {
            url: url.into(),
            limit,
        });
    }

    result.map_err(|e| TarballError::ArchiveError { source: e }.into())
}

fn extract_entries<R: Read>(
    archive: &mut Archive<R>,
    marker: &str,
    destination: &Path,
) -> io::Result<Vec<String>> {
    let mut extracted = BTreeSet::new();

    for entry in archive.entries()? {
        let mut entry = entry?;
        if !entry.header().entry_type().is_file() {
            continue;
        }

        let path = entry.path()?.to_string_lossy().into_owned();
        if !path.contains(marker) {
            continue;
        }

        let Some(file_name) = Path::new(&path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
        else {
            continue;
        };

        debug!(path = %path, "Extracting {file_name}");
        let mut file = File::create(destination.join(&file_name))?;
        io::copy(&mut entry, &mut file)?;
        extracted.insert(file_name);
    }

    Ok(extracted.into_iter().collect())
}
