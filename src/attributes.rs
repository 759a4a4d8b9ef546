use std::fmt;
use std::fs::Metadata;

use bitflags::bitflags;

bitflags! {
    /// File attribute flags, using the Windows `FILE_ATTRIBUTE_*` bit values.
    ///
    /// Only the seven flags the listing renders are kept; any other bit is
    /// dropped by [`Attributes::from_bits_truncate`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Attributes: u32 {
        const READONLY   = 0x0000_0001;
        const HIDDEN     = 0x0000_0002;
        const SYSTEM     = 0x0000_0004;
        const DIRECTORY  = 0x0000_0010;
        const ARCHIVE    = 0x0000_0020;
        const COMPRESSED = 0x0000_0800;
        const ENCRYPTED  = 0x0000_4000;
    }
}

/// Letter for each flag, in output order.
const LETTERS: [(Attributes, char); 7] = [
    (Attributes::DIRECTORY,  'D'),
    (Attributes::READONLY,   'R'),
    (Attributes::HIDDEN,     'H'),
    (Attributes::SYSTEM,     'S'),
    (Attributes::ARCHIVE,    'A'),
    (Attributes::COMPRESSED, 'C'),
    (Attributes::ENCRYPTED,  'E'),
];

impl Attributes {
    /// The set flags as letters in the fixed order `DRHSACE`, no separators.
    pub fn letters(self) -> String {
        LETTERS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, letter)| *letter)
            .collect()
    }

    /// Attributes of an entry named `name` with the given metadata.
    #[cfg(windows)]
    pub fn from_metadata(_name: &str, metadata: &Metadata) -> Self {
        use std::os::windows::fs::MetadataExt;
        Self::from_bits_truncate(metadata.file_attributes())
    }

    /// Attributes of an entry named `name` with the given metadata.
    ///
    /// Approximated from POSIX metadata: dot-names are hidden, anything that
    /// is not a file, directory or symlink counts as a system entry.
    /// Archive, compressed and encrypted have no equivalent here.
    #[cfg(not(windows))]
    pub fn from_metadata(name: &str, metadata: &Metadata) -> Self {
        let ft = metadata.file_type();
        let mut attrs = Self::empty();

        attrs.set(Self::DIRECTORY, ft.is_dir());
        attrs.set(Self::READONLY, metadata.permissions().readonly());
        attrs.set(Self::HIDDEN, name.starts_with('.'));
        attrs.set(Self::SYSTEM, !(ft.is_file() || ft.is_dir() || ft.is_symlink()));
        attrs
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters())
    }
}
