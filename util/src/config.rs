use serde::{Deserialize, Serialize};

use crate::error::ComponentError;

/// Maximum number of non exclusive components per row, between 1 and 5.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RowCapacity(u8);

impl RowCapacity {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(5);

    pub fn new(capacity: u8) -> Result<Self, ComponentError> {
        if capacity >= Self::MIN.0 && capacity <= Self::MAX.0 {
            Ok(Self(capacity))
        } else {
            Err(ComponentError::InvalidCapacity(capacity))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for RowCapacity {
    fn default() -> Self {
        Self::MAX
    }
}

impl TryFrom<u8> for RowCapacity {
    type Error = ComponentError;

    fn try_from(capacity: u8) -> Result<Self, Self::Error> {
        Self::new(capacity)
    }
}

impl From<RowCapacity> for u8 {
    fn from(capacity: RowCapacity) -> Self {
        capacity.0
    }
}

impl From<RowCapacity> for usize {
    fn from(capacity: RowCapacity) -> Self {
        capacity.0.into()
    }
}

/// Settings for a [`ComponentHelper`](crate::helper::ComponentHelper).
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct HelperConfig {
    pub row_capacity: RowCapacity,
}
