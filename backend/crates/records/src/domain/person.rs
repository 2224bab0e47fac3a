//! Person Entity

use docstore::Model;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub dependents: Vec<Dependent>,
    pub birth_date: String,
}

/// A role held by a person, e.g. "Teacher"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependent {
    pub first_name: String,
    pub last_name: String,
}

impl Model for Person {
    const COLLECTION: &'static str = "persons";
}
