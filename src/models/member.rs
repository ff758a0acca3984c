//! Member model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Member model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
}

/// Create member request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMember {
    pub name: String,
    pub email: Option<String>,
}
