//! Comment endpoints
//!
//! - GET /comments
//! - GET /comments/{id}
//! - GET /comments/user_address/{address}

use serde::Serialize;

use super::PageParams;
use crate::client::path_segment;
use crate::error::Result;
use crate::types::Comment;
use crate::GammaClient;

#[derive(Clone, Debug, Default, Serialize)]
pub struct ListCommentsParams {
    #[serde(flatten)]
    pub page: PageParams,
    /// `Event`, `Series` or `market`
    pub parent_entity_type: Option<String>,
    pub parent_entity_id: Option<i64>,
    pub get_positions: Option<bool>,
    pub holders_only: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct CommentsByUserParams {
    #[serde(flatten)]
    pub page: PageParams,
}

impl GammaClient {
    pub async fn list_comments(&self, params: &ListCommentsParams) -> Result<Vec<Comment>> {
        self.get_typed("/comments", params).await
    }

    /// A comment thread; the API answers with a list even for one id
    pub async fn get_comment(&self, id: &str) -> Result<Vec<Comment>> {
        self.get_typed(&format!("/comments/{}", path_segment(id)), &()).await
    }

    pub async fn list_comments_by_user(
        &self,
        user_address: &str,
        params: &CommentsByUserParams,
    ) -> Result<Vec<Comment>> {
        let path = format!("/comments/user_address/{}", path_segment(user_address));
        self.get_typed(&path, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::test_support::{last_target, mock_client};

    #[tokio::test]
    async fn test_list_comments() {
        let (seen, client) = mock_client(
            r#"[{"id":"1","body":"gm","parentEntityType":"Event","parentEntityID":903,"userAddress":"0xabc"}]"#,
        );
        let params = ListCommentsParams {
            parent_entity_type: Some("Event".into()),
            parent_entity_id: Some(903),
            ..Default::default()
        };

        let comments = client.list_comments(&params).await.unwrap();
        assert_eq!(comments[0].parent_entity_id.as_deref(), Some("903"));
        assert_eq!(comments[0].user_address.as_deref(), Some("0xabc"));

        let (path, query) = last_target(&seen);
        assert_eq!(path, "/comments");
        let query = query.unwrap();
        assert!(query.contains("parent_entity_type=Event"));
        assert!(query.contains("parent_entity_id=903"));
    }

    #[tokio::test]
    async fn test_get_comment_and_by_user() {
        let (seen, client) = mock_client(r#"[{"id":"77","body":"hello"}]"#);

        let thread = client.get_comment("77").await.unwrap();
        assert_eq!(thread[0].body.as_deref(), Some("hello"));
        assert_eq!(last_target(&seen).0, "/comments/77");

        let params = CommentsByUserParams { page: PageParams::new(3, 0) };
        client.list_comments_by_user("0xabc", &params).await.unwrap();
        assert_eq!(
            last_target(&seen),
            ("/comments/user_address/0xabc".to_string(), Some("limit=3&offset=0".to_string()))
        );
    }
}
