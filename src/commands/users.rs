//! User Commands
//!
//! Admin user management for the dashboard.

use super::{delete, encode_component, get_json};
use crate::error::ApiResult;
use crate::models::UserPage;

fn users_endpoint(start_index: usize, limit: usize) -> String {
    if start_index == 0 {
        format!("/api/user/getusers?limit={}", limit)
    } else {
        format!("/api/user/getusers?startIndex={}&limit={}", start_index, limit)
    }
}

/// One page of users, skipping the first `start_index`
pub async fn get_users(start_index: usize, limit: usize) -> ApiResult<UserPage> {
    get_json(&users_endpoint(start_index, limit)).await
}

pub async fn delete_user(id: &str) -> ApiResult<()> {
    delete(&format!("/api/user/delete/{}", encode_component(id))).await
}
