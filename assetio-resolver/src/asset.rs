//! Readable and writable asset handles.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

/// A readable asset.
pub trait Asset: fmt::Debug + Send + Sync {
    /// Size in bytes at open time.
    fn size(&self) -> usize;

    /// Reads into `buf` starting at byte `offset`. Returns bytes read, zero
    /// at end of asset.
    fn read(&self, buf: &mut [u8], offset: usize) -> io::Result<usize>;

    /// The whole asset contents.
    fn buffer(&self) -> io::Result<Arc<[u8]>> {
        let mut buf = vec![0u8; self.size()];
        let mut filled = 0;
        while filled < buf.len() {
            let n = self.read(&mut buf[filled..], filled)?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        buf.truncate(filled);
        Ok(buf.into())
    }
}

/// A writable asset. Contents are durable only after [`WritableAsset::close`].
pub trait WritableAsset: fmt::Debug + Send + Sync {
    /// Writes `data` at byte `offset`. Returns bytes written.
    fn write(&self, data: &[u8], offset: usize) -> io::Result<usize>;

    fn close(&self) -> io::Result<()>;
}

fn lock<T>(file: &Mutex<T>) -> MutexGuard<'_, T> {
    // A poisoned lock still guards a valid file handle.
    file.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A file on disk opened for reading.
#[derive(Debug)]
pub struct FilesystemAsset {
    path: PathBuf,
    file: Mutex<File>,
    size: usize,
}

impl FilesystemAsset {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let metadata = file.metadata()?;
        if metadata.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is a directory", path.display()),
            ));
        }
        Ok(Self {
            path: path.to_path_buf(),
            size: usize::try_from(metadata.len()).unwrap_or(usize::MAX),
            file: Mutex::new(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Asset for FilesystemAsset {
    fn size(&self) -> usize {
        self.size
    }

    fn read(&self, buf: &mut [u8], offset: usize) -> io::Result<usize> {
        if offset >= self.size {
            return Ok(0);
        }
        let mut file = lock(&self.file);
        file.seek(SeekFrom::Start(offset as u64))?;
        file.read(buf)
    }
}

/// A file on disk opened for writing.
///
/// Parent directories are created on open. `WriteMode::Replace` truncates
/// any existing file; `WriteMode::Update` keeps its bytes.
#[derive(Debug)]
pub struct FilesystemWritableAsset {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl FilesystemWritableAsset {
    pub fn create(path: impl AsRef<Path>, mode: assetio_types::WriteMode) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut options = OpenOptions::new();
        options.write(true).create(true);
        match mode {
            assetio_types::WriteMode::Replace => options.truncate(true),
            assetio_types::WriteMode::Update => options.truncate(false),
        };
        let file = options.open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(Some(file)),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WritableAsset for FilesystemWritableAsset {
    fn write(&self, data: &[u8], offset: usize) -> io::Result<usize> {
        let mut guard = lock(&self.file);
        let file = guard
            .as_mut()
            .ok_or_else(|| io::Error::other(format!("{} already closed", self.path.display())))?;
        file.seek(SeekFrom::Start(offset as u64))?;
        file.write_all(data)?;
        Ok(data.len())
    }

    fn close(&self) -> io::Result<()> {
        let mut guard = lock(&self.file);
        match guard.take() {
            Some(file) => file.sync_all(),
            None => Ok(()),
        }
    }
}
