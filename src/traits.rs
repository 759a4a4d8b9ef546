use crate::engine::OpenConfig;
use crate::entry::Entry;
use crate::error::PhyloError;

/// An open enumeration: every entry matched by a pattern, in source order.
///
/// Dropping it releases the underlying handle.
pub type Enumeration = Box<dyn Iterator<Item = Result<Entry, PhyloError>>>;

/// Something that can enumerate the entries matching a pattern.
///
/// [`FsSource`](crate::FsSource) is the filesystem implementation and the
/// default used by [`ListBuilder`](crate::ListBuilder). Implement this to list
/// anything else that has names, flags and timestamps, or to feed
/// fixed entries in tests.
///
/// # Errors
///
/// `open` fails when the pattern cannot be enumerated at all: the location
/// is missing or unreadable, or nothing matches. Failures after the first
/// entry are yielded as `Err` items; the lister stops at the first one.
///
/// # Example
///
/// ```rust
/// use phylo::{Entry, Enumeration, OpenConfig, PhyloError, Source};
///
/// struct Fixed(Vec<Entry>);
///
/// impl Source for Fixed {
///     fn open(&self, _pattern: &str, _config: &OpenConfig) -> Result<Enumeration, PhyloError> {
///         Ok(Box::new(self.0.clone().into_iter().map(Ok::<_, PhyloError>)))
///     }
/// }
/// ```
pub trait Source {
    /// Open an enumeration for `pattern`.
    fn open(&self, pattern: &str, config: &OpenConfig) -> Result<Enumeration, PhyloError>;
}
