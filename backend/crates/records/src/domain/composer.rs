//! Composer Entity

use docstore::Model;
use kernel::id::Id;
use serde::{Deserialize, Serialize};

pub type ComposerId = Id<Composer>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composer {
    pub first_name: String,
    pub last_name: String,
}

impl Model for Composer {
    const COLLECTION: &'static str = "composers";
}
