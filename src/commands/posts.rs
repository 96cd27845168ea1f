//! Post Commands
//!
//! Blog listing, lookup by slug and creation.

use super::{encode_component, get_json, post_json};
use crate::config::POSTS_PAGE_SIZE;
use crate::error::ApiResult;
use crate::models::{Post, PostDraft, PostPage};

/// Categories the backend accepts; new posts default to the first.
pub const CATEGORIES: [&str; 4] = ["uncategorized", "reactjs", "nextjs", "javascript"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Desc,
    Asc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Desc => "desc",
            SortOrder::Asc => "asc",
        }
    }

    pub fn parse(value: &str) -> Self {
        if value == "asc" {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }

    /// Value of a filter select, where the empty option means "any order"
    pub fn from_filter(value: &str) -> Option<Self> {
        (!value.is_empty()).then(|| Self::parse(value))
    }
}

/// Value of the category select, where the empty option means "all"
pub fn category_filter(value: &str) -> Option<String> {
    CATEGORIES
        .iter()
        .find(|category| **category == value)
        .map(|category| category.to_string())
}

/// Filters for `getposts`. Unset fields are left out of the query string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostQuery {
    pub search_term: Option<String>,
    pub sort: Option<SortOrder>,
    pub category: Option<String>,
    pub start_index: Option<usize>,
    pub limit: Option<usize>,
    pub slug: Option<String>,
}

impl PostQuery {
    pub fn by_slug(slug: &str) -> Self {
        Self {
            slug: Some(slug.to_string()),
            ..Self::default()
        }
    }

    /// One page of search hits. Filters the user has not picked are left out.
    pub fn search(
        term: &str,
        sort: Option<SortOrder>,
        category: Option<String>,
        start_index: usize,
    ) -> Self {
        Self {
            search_term: Some(term.to_string()),
            sort,
            category,
            start_index: (start_index > 0).then_some(start_index),
            limit: Some(POSTS_PAGE_SIZE),
            slug: None,
        }
    }

    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(term) = &self.search_term {
            pairs.push(("searchTerm", encode_component(term)));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", encode_component(category)));
        }
        if let Some(start) = self.start_index {
            pairs.push(("startIndex", start.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(slug) = &self.slug {
            pairs.push(("slug", encode_component(slug)));
        }

        pairs
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&")
    }
}

pub async fn get_posts(query: &PostQuery) -> ApiResult<PostPage> {
    let qs = query.to_query_string();
    if qs.is_empty() {
        get_json("/api/post/getposts").await
    } else {
        get_json(&format!("/api/post/getposts?{}", qs)).await
    }
}

/// The post with this slug, if any
pub async fn get_post_by_slug(slug: &str) -> ApiResult<Option<Post>> {
    let page = get_posts(&PostQuery::by_slug(slug)).await?;
    Ok(page.posts.into_iter().next())
}

pub async fn create_post(draft: &PostDraft) -> ApiResult<Post> {
    post_json("/api/post/create", draft).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        assert_eq!(PostQuery::default().to_query_string(), "");
    }

    #[test]
    fn test_query_string_encodes_and_orders() {
        let query = PostQuery {
            search_term: Some("rust & wasm".into()),
            sort: Some(SortOrder::Asc),
            category: Some("reactjs".into()),
            start_index: Some(9),
            limit: None,
            slug: None,
        };
        assert_eq!(
            query.to_query_string(),
            "searchTerm=rust%20%26%20wasm&sort=asc&category=reactjs&startIndex=9"
        );
    }

    #[test]
    fn test_by_slug() {
        assert_eq!(PostQuery::by_slug("hello-world").to_query_string(), "slug=hello-world");
    }

    #[test]
    fn test_fresh_search_has_no_filters() {
        let query = PostQuery::search("algebra", None, None, 0);
        assert_eq!(query.to_query_string(), "searchTerm=algebra&limit=9");
    }

    #[test]
    fn test_search_with_picked_filters() {
        let query = PostQuery::search(
            "hooks",
            SortOrder::from_filter("asc"),
            category_filter("reactjs"),
            9,
        );
        assert_eq!(
            query.to_query_string(),
            "searchTerm=hooks&sort=asc&category=reactjs&startIndex=9&limit=9"
        );
    }

    #[test]
    fn test_blank_filters_are_unset() {
        assert_eq!(SortOrder::from_filter(""), None);
        assert_eq!(category_filter(""), None);
        assert_eq!(category_filter("cobol"), None);
        assert_eq!(category_filter("nextjs").as_deref(), Some("nextjs"));
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(SortOrder::parse("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("whatever"), SortOrder::Desc);
        assert_eq!(SortOrder::default().as_str(), "desc");
        assert_eq!(CATEGORIES[0], "uncategorized");
    }
}
