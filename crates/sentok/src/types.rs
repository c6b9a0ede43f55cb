//! # Common Types and Traits
use core::hash::Hash;
use num_traits::{FromPrimitive, ToPrimitive, Unsigned};
use std::fmt::Debug;

/// A type that can be used as a vocabulary index.
pub trait TokenType:
    'static
    + Default
    + Debug
    + Clone
    + Copy
    + Hash
    + Send
    + Sync
    + Unsigned
    + FromPrimitive
    + ToPrimitive
    + Ord
    + serde::Serialize
    + for<'de> serde::Deserialize<'de>
{
}

impl<T> TokenType for T where
    T: 'static
        + Default
        + Debug
        + Clone
        + Copy
        + Hash
        + Send
        + Sync
        + Unsigned
        + FromPrimitive
        + ToPrimitive
        + Ord
        + serde::Serialize
        + for<'de> serde::Deserialize<'de>
{
}

/// Word to T map.
pub type WordToTokenMap<T> = ahash::AHashMap<String, T>;

/// Convert a dense position into a token.
///
/// # Panics
/// If `index` does not fit in `T`.
pub fn token_from_index<T: TokenType>(index: usize) -> T {
    T::from_usize(index).unwrap_or_else(|| {
        panic!(
            "vocabulary index {index} overflows {}",
            std::any::type_name::<T>()
        )
    })
}

/// Convert a token into its dense position.
pub fn index_from_token<T: TokenType>(token: T) -> usize {
    token.to_usize().unwrap_or(usize::MAX)
}

/// Check if a type is `Send`.
#[cfg(test)]
pub(crate) fn check_is_send<S: Send>(_: S) {}

#[cfg(test)]
/// Check if a type is `Sync`.
pub(crate) fn check_is_sync<S: Sync>(_: S) {}
