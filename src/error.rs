use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
///
/// Every failure surfaces synchronously to the caller of the offending
/// operation; nothing is retried internally.
#[expect(missing_docs, reason = "The variants are self-explanatory.")]
#[derive(Debug, Display, Error)]
pub enum Error {
    #[display("LED chain must contain at least one LED")]
    Configuration,

    #[display("LED selector out of range")]
    IndexOutOfRange,

    #[display("pixel channel transmit failed")]
    Hardware,
}
