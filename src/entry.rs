use std::fs::Metadata;

use crate::attributes::Attributes;
use crate::filetime::FileTime;

/// A single item produced by a [`Source`](crate::traits::Source) during enumeration.
///
/// Built transiently for each enumeration step and handed straight to the
/// formatter; nothing holds on to it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The entry's name as enumerated: the last path segment, not a full path.
    pub name: String,

    /// Attribute flags rendered as the `DRHSACE` letters.
    pub attributes: Attributes,

    /// Creation time.
    pub created: FileTime,

    /// Last access time.
    pub accessed: FileTime,

    /// Last write time.
    pub modified: FileTime,

    /// Size in bytes. Directories report 0.
    pub size: u64,
}

impl Entry {
    /// A directory entry with no timestamps, used for `.`/`..` when their
    /// metadata cannot be read. Such entries are never printed.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name:       name.into(),
            attributes: Attributes::DIRECTORY,
            created:    FileTime::UNIX_EPOCH,
            accessed:   FileTime::UNIX_EPOCH,
            modified:   FileTime::UNIX_EPOCH,
            size:       0,
        }
    }

    /// Build an entry from filesystem metadata.
    #[cfg(windows)]
    pub fn from_metadata(name: impl Into<String>, metadata: &Metadata) -> Self {
        use std::os::windows::fs::MetadataExt;

        let name = name.into();
        Self {
            attributes: Attributes::from_metadata(&name, metadata),
            created:    FileTime::from_ticks(metadata.creation_time()),
            accessed:   FileTime::from_ticks(metadata.last_access_time()),
            modified:   FileTime::from_ticks(metadata.last_write_time()),
            size:       if metadata.is_dir() { 0 } else { metadata.file_size() },
            name,
        }
    }

    /// Build an entry from filesystem metadata.
    ///
    /// Filesystems without a birth time report the last write time as the
    /// creation time. Any other unavailable timestamp reads as the Unix epoch.
    #[cfg(not(windows))]
    pub fn from_metadata(name: impl Into<String>, metadata: &Metadata) -> Self {
        let name = name.into();
        let modified = metadata.modified().map(FileTime::from).unwrap_or(FileTime::UNIX_EPOCH);
        Self {
            attributes: Attributes::from_metadata(&name, metadata),
            created:    metadata.created().map(FileTime::from).unwrap_or(modified),
            accessed:   metadata.accessed().map(FileTime::from).unwrap_or(FileTime::UNIX_EPOCH),
            modified,
            size:       if metadata.is_dir() { 0 } else { metadata.len() },
            name,
        }
    }
}
