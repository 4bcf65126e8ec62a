//! Filesystem implementation of [`ListRepository`].

use std::future::Future;
use std::io::{self, Write};
use std::path::PathBuf;

use callblocker_app::ports::ListRepository;
use callblocker_domain::error::{CallBlockerError, DecodeError, NotFoundError};
use callblocker_domain::list::{BlockList, ListDir};
use tempfile::NamedTempFile;

use crate::error::StorageError;

const LIST_FILE_NAME: &str = "main.json";

/// Configuration for the filesystem storage adapter.
pub struct Config {
    /// Root directory holding one sub-directory per list.
    pub data_dir: PathBuf,
}

impl Config {
    /// Build a [`FsListRepository`] from this configuration.
    ///
    /// Creates the data directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::DataDir`] if the directory cannot be created.
    pub async fn build(self) -> Result<FsListRepository, StorageError> {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|source| StorageError::DataDir {
                path: self.data_dir.clone(),
                source,
            })?;
        Ok(FsListRepository::new(self.data_dir))
    }
}

/// Flat-file list repository.
///
/// Each save writes its own uniquely named temporary file next to
/// `main.json` and renames it into place, so readers see either the old or
/// the new document. There is no locking between concurrent writers; the
/// last rename wins.
#[derive(Debug, Clone)]
pub struct FsListRepository {
    data_dir: PathBuf,
}

impl FsListRepository {
    /// Create a new repository rooted at `data_dir`.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the list file for `dir`.
    #[must_use]
    pub fn list_path(&self, dir: ListDir) -> PathBuf {
        self.data_dir.join(dir.as_str()).join(LIST_FILE_NAME)
    }
}

impl ListRepository for FsListRepository {
    fn load(
        &self,
        dir: ListDir,
    ) -> impl Future<Output = Result<BlockList, CallBlockerError>> + Send {
        let path = self.list_path(dir);
        async move {
            let bytes = match tokio::fs::read(&path).await {
                Ok(bytes) => bytes,
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    return Err(NotFoundError {
                        entity: "List",
                        id: dir.to_string(),
                    }
                    .into());
                }
                Err(source) => return Err(StorageError::Read { path, source }.into()),
            };

            serde_json::from_slice::<BlockList>(&bytes).map_err(|source| {
                tracing::warn!(path = %path.display(), error = %source, "malformed list file");
                CallBlockerError::from(DecodeError::StoredList {
                    list: dir.to_string(),
                    source,
                })
            })
        }
    }

    fn save(
        &self,
        dir: ListDir,
        list: BlockList,
    ) -> impl Future<Output = Result<(), CallBlockerError>> + Send {
        let list_dir = self.data_dir.join(dir.as_str());
        let path = list_dir.join(LIST_FILE_NAME);
        async move {
            let json = serde_json::to_vec_pretty(&list).map_err(StorageError::Serialize)?;
            let bytes = json.len();

            if let Err(source) = replace_file(list_dir, path.clone(), json).await {
                return Err(StorageError::Write { path, source }.into());
            }

            tracing::debug!(path = %path.display(), bytes, "wrote list file");
            Ok(())
        }
    }
}

/// Write `contents` to a fresh temporary file in `dir` and rename it to `path`.
async fn replace_file(dir: PathBuf, path: PathBuf, contents: Vec<u8>) -> io::Result<()> {
    tokio::fs::create_dir_all(&dir).await?;
    tokio::task::spawn_blocking(move || {
        let mut temp = NamedTempFile::new_in(&dir)?;
        temp.write_all(&contents)?;
        temp.persist(&path)?;
        Ok::<(), io::Error>(())
    })
    .await
    .map_err(io::Error::other)?
}
