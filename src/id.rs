//! Code for handling IDs
use anyhow::{Result, bail};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::hash::Hash;

/// The numeric identifier of a zone within one utility's record set.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct ZoneID(pub u32);

/// Indicates that the struct has an ID field
pub trait HasID<ID: Copy> {
    /// Get the struct's ID
    fn get_id(&self) -> ID;
}

/// Implement the `HasID` trait for the given type, assuming it has a field called `id`
macro_rules! define_id_getter {
    ($t:ty, $id_ty:ty) => {
        impl crate::id::HasID<$id_ty> for $t {
            fn get_id(&self) -> $id_ty {
                self.id
            }
        }
    };
}
pub(crate) use define_id_getter;

/// Check that no two items share an ID.
///
/// # Returns
///
/// An error naming the first repeated ID, if there is one.
pub fn check_unique_ids<ID, T>(items: &[T]) -> Result<()>
where
    ID: Copy + Eq + Hash + Display,
    T: HasID<ID>,
{
    if let Some(id) = items.iter().map(|item| item.get_id()).duplicates().next() {
        bail!("Duplicate ID {id} found");
    }

    Ok(())
}
