use alloc::vec::Vec;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Fenwick, Weight};

/// Serializes as the sequence of current values; the tree nodes are derived data.
impl<T: Weight + Serialize> Serialize for Fenwick<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.originals().serialize(serializer)
    }
}

impl<'de, T: Weight + Deserialize<'de>> Deserialize<'de> for Fenwick<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(deserializer)?;
        Ok(Self::from_slice(&values))
    }
}
