use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The allocator refused the buffer storage.
    #[error("failed to allocate {capacity} bytes")]
    Alloc { capacity: u32 },
    /// An append did not fit; nothing was written.
    #[error("append of {needed} bytes exceeds remaining capacity of {remaining}")]
    Overflow { needed: usize, remaining: usize },
}
