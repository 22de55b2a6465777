use serde::{Deserialize, Serialize};

use crate::dto::common::ApiEnvelope;

/// Category as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub created_at: String,
}

/// Body for creating or updating a category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBody {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

pub type CategoryListRes = ApiEnvelope<Vec<Category>>;
pub type CategoryDetailRes = ApiEnvelope<Category>;
/// Delete responses carry no data
pub type DeleteCategoryRes = ApiEnvelope<()>;
