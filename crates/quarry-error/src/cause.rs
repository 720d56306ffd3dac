//! Finding the structured error inside a chain of wrappers.

use std::error::Error as StdError;
use std::iter;
use std::sync::Arc;

use crate::{Error, ErrorCode};

/// Return the first [`Error`] in the `source()` chain of `err`, starting with
/// `err` itself.
///
/// Any wrapper that reports its inner error through
/// [`std::error::Error::source`] is seen through, such as `anyhow` contexts
/// and `thiserror` `#[source]` / `#[from]` fields. A boxed or `Arc`-shared
/// `Error` in the chain is found too. The returned reference points at the
/// original value. Driver errors are never matched.
///
/// A `thiserror` `#[error(transparent)]` variant hides the `Error` it holds:
/// its `source()` forwards to the inner error's `source()`, which is `None`.
/// Wrap with `#[error("{0}")]` and `#[from]` to keep the hint and detail
/// reachable.
pub fn structured_cause<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a Error> {
    iter::successors(Some(err), |&e| e.source()).find_map(as_structured)
}

/// The code of the structured error in `err`'s chain, if there is one.
pub fn code_of(err: &(dyn StdError + 'static)) -> Option<ErrorCode> {
    structured_cause(err).map(Error::code)
}

fn as_structured<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a Error> {
    err.downcast_ref::<Error>()
        .or_else(|| err.downcast_ref::<Box<Error>>().map(|boxed| &**boxed))
        .or_else(|| err.downcast_ref::<Arc<Error>>().map(|shared| &**shared))
}
