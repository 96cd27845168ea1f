//! Comment Commands
//!
//! Read-only: comments under a post, and the recent ones for the dashboard.

use super::{encode_component, get_json};
use crate::error::ApiResult;
use crate::models::{Comment, CommentPage};

fn post_comments_endpoint(post_id: &str) -> String {
    format!("/api/comment/getPostComments/{}", encode_component(post_id))
}

pub async fn get_post_comments(post_id: &str) -> ApiResult<Vec<Comment>> {
    get_json(&post_comments_endpoint(post_id)).await
}

/// Most recent comments with site-wide totals (admin only)
pub async fn get_comments(limit: usize) -> ApiResult<CommentPage> {
    get_json(&format!("/api/comment/getcomments?limit={}", limit)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_comments_endpoint_encodes_id() {
        assert_eq!(
            post_comments_endpoint("65a1f0c2"),
            "/api/comment/getPostComments/65a1f0c2"
        );
        assert_eq!(
            post_comments_endpoint("a/b"),
            "/api/comment/getPostComments/a%2Fb"
        );
    }
}
