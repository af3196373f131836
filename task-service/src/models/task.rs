use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A todo item as stored in the tasks collection.
///
/// The identifier is assigned by the store at insert time and never changes;
/// `status` is the only field mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: bool,
}
