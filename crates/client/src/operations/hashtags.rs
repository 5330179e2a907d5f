//! Hashtags.

use fedigraph_common::ClientResult;
use fedigraph_types::{Connection, Hashtag, normalize_tag};
use serde_json::json;

use super::require;
use crate::client::FediClient;
use crate::missing_target::DeleteOutcome;
use crate::operation::Operation;
use crate::pagination::PageArgs;

/// Upper bound the server accepts for trending lookups.
pub const MAX_TRENDING: u32 = 40;

const GET_HASHTAG: Operation = Operation::query(
    "GetHashtag",
    "hashtag",
    concat!(
        "query GetHashtag($name: String!) { hashtag(name: $name) { ...HashtagFields } }",
        hashtag_fields!()
    ),
);

const FETCH_FOLLOWED_HASHTAGS: Operation = Operation::query(
    "FetchFollowedHashtags",
    "followedHashtags",
    concat!(
        "query FetchFollowedHashtags(",
        page_vars!(),
        ") { followedHashtags(",
        page_args!(),
        ") ",
        connection_of!("HashtagFields"),
        " }",
        hashtag_fields!()
    ),
);

const FETCH_TRENDING_HASHTAGS: Operation = Operation::query(
    "FetchTrendingHashtags",
    "trendingHashtags",
    concat!(
        "query FetchTrendingHashtags($limit: Int) { trendingHashtags(limit: $limit) { ...HashtagFields } }",
        hashtag_fields!()
    ),
);

const FOLLOW_HASHTAG: Operation = Operation::mutation(
    "FollowHashtag",
    "followHashtag",
    concat!(
        "mutation FollowHashtag($name: String!) { followHashtag(name: $name) { ...HashtagFields } }",
        hashtag_fields!()
    ),
);

const UNFOLLOW_HASHTAG: Operation = Operation::mutation(
    "UnfollowHashtag",
    "unfollowHashtag",
    "mutation UnfollowHashtag($name: String!) { unfollowHashtag(name: $name) }",
);

impl FediClient {
    /// A hashtag by name, with or without the leading `#`.
    pub async fn get_hashtag(&self, name: &str) -> ClientResult<Option<Hashtag>> {
        let name = normalize_tag(name);
        require("name", name)?;
        self.query(&GET_HASHTAG, json!({ "name": name })).await
    }

    pub async fn fetch_followed_hashtags(
        &self,
        page: &PageArgs,
    ) -> ClientResult<Connection<Hashtag>> {
        self.paginate(&FETCH_FOLLOWED_HASHTAGS, json!({}), page)
            .await
    }

    /// Currently trending hashtags, best first. `limit` is capped at
    /// [`MAX_TRENDING`].
    pub async fn fetch_trending_hashtags(&self, limit: u32) -> ClientResult<Vec<Hashtag>> {
        let limit = limit.clamp(1, MAX_TRENDING);
        self.query(&FETCH_TRENDING_HASHTAGS, json!({ "limit": limit }))
            .await
    }

    pub async fn follow_hashtag(&self, name: &str) -> ClientResult<Hashtag> {
        let name = normalize_tag(name);
        require("name", name)?;
        self.mutate(&FOLLOW_HASHTAG, json!({ "name": name })).await
    }

    pub async fn unfollow_hashtag(&self, name: &str) -> ClientResult<DeleteOutcome> {
        let name = normalize_tag(name);
        require("name", name)?;
        self.remove(&UNFOLLOW_HASHTAG, json!({ "name": name })).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::recording_client;

    #[tokio::test]
    async fn test_follow_hashtag_normalizes() {
        let (client, transport) = recording_client();
        transport.respond(json!({
            "data": { "followHashtag": { "name": "rust", "isFollowing": true } }
        }));

        let tag = client.follow_hashtag(" #rust ").await.unwrap();
        assert!(tag.is_following);
        assert_eq!(transport.last().variables["name"], "rust");
    }

    #[tokio::test]
    async fn test_trending_limit_capped() {
        let (client, transport) = recording_client();
        transport.respond(json!({ "data": { "trendingHashtags": [] } }));

        assert!(client.fetch_trending_hashtags(500).await.unwrap().is_empty());
        assert_eq!(transport.last().variables["limit"], MAX_TRENDING);
    }
}
