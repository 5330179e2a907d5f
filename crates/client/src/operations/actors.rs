//! Actors and the social graph.

use fedigraph_common::ClientResult;
use fedigraph_types::{Actor, Connection, Relationship, UpdateProfileInput};
use serde_json::{Value, json};

use super::require;
use crate::client::FediClient;
use crate::missing_target::DeleteOutcome;
use crate::operation::Operation;
use crate::pagination::PageArgs;

const GET_ACTOR: Operation = Operation::query(
    "GetActor",
    "actor",
    concat!(
        "query GetActor($id: ID!) { actor(id: $id) { ...ActorFields } }",
        actor_fields!()
    ),
);

const GET_ACTOR_BY_USERNAME: Operation = Operation::query(
    "GetActorByUsername",
    "actorByUsername",
    concat!(
        "query GetActorByUsername($username: String!, $domain: String) { \
         actorByUsername(username: $username, domain: $domain) { ...ActorFields } }",
        actor_fields!()
    ),
);

const FETCH_FOLLOWERS: Operation = Operation::query(
    "FetchFollowers",
    "followers",
    concat!(
        "query FetchFollowers($actorId: ID!, ",
        page_vars!(),
        ") { followers(actorId: $actorId, ",
        page_args!(),
        ") ",
        connection_of!("ActorFields"),
        " }",
        actor_fields!()
    ),
);

const FETCH_FOLLOWING: Operation = Operation::query(
    "FetchFollowing",
    "following",
    concat!(
        "query FetchFollowing($actorId: ID!, ",
        page_vars!(),
        ") { following(actorId: $actorId, ",
        page_args!(),
        ") ",
        connection_of!("ActorFields"),
        " }",
        actor_fields!()
    ),
);

const GET_RELATIONSHIP: Operation = Operation::query(
    "GetRelationship",
    "relationship",
    concat!(
        "query GetRelationship($actorId: ID!) { relationship(actorId: $actorId) { ...RelationshipFields } }",
        relationship_fields!()
    ),
);

const FOLLOW_ACTOR: Operation = Operation::mutation(
    "FollowActor",
    "followActor",
    concat!(
        "mutation FollowActor($id: ID!) { followActor(id: $id) { ...RelationshipFields } }",
        relationship_fields!()
    ),
);

const UNFOLLOW_ACTOR: Operation = Operation::mutation(
    "UnfollowActor",
    "unfollowActor",
    "mutation UnfollowActor($id: ID!) { unfollowActor(id: $id) }",
);

const BLOCK_ACTOR: Operation = Operation::mutation(
    "BlockActor",
    "blockActor",
    concat!(
        "mutation BlockActor($id: ID!) { blockActor(id: $id) { ...RelationshipFields } }",
        relationship_fields!()
    ),
);

const UNBLOCK_ACTOR: Operation = Operation::mutation(
    "UnblockActor",
    "unblockActor",
    "mutation UnblockActor($id: ID!) { unblockActor(id: $id) }",
);

const MUTE_ACTOR: Operation = Operation::mutation(
    "MuteActor",
    "muteActor",
    concat!(
        "mutation MuteActor($id: ID!, $notifications: Boolean, $duration: Int) { \
         muteActor(id: $id, notifications: $notifications, duration: $duration) { ...RelationshipFields } }",
        relationship_fields!()
    ),
);

const UNMUTE_ACTOR: Operation = Operation::mutation(
    "UnmuteActor",
    "unmuteActor",
    "mutation UnmuteActor($id: ID!) { unmuteActor(id: $id) }",
);

const UPDATE_PROFILE: Operation = Operation::mutation(
    "UpdateProfile",
    "updateProfile",
    concat!(
        "mutation UpdateProfile($input: UpdateProfileInput!) { updateProfile(input: $input) { ...ActorFields } }",
        actor_fields!()
    ),
);

/// Options for [`FediClient::mute_actor`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MuteOptions {
    /// Also mute notifications from the actor.
    pub notifications: bool,
    /// Mute duration in seconds. `None` mutes indefinitely.
    pub duration_secs: Option<u32>,
}

impl FediClient {
    /// An actor by id.
    pub async fn get_actor(&self, id: &str) -> ClientResult<Option<Actor>> {
        require("id", id)?;
        self.query(&GET_ACTOR, json!({ "id": id })).await
    }

    /// An actor by `username`, on `domain` or the local instance.
    pub async fn get_actor_by_username(
        &self,
        username: &str,
        domain: Option<&str>,
    ) -> ClientResult<Option<Actor>> {
        let username = username.trim_start_matches('@');
        require("username", username)?;
        self.query(
            &GET_ACTOR_BY_USERNAME,
            json!({ "username": username, "domain": domain }),
        )
        .await
    }

    pub async fn fetch_followers(
        &self,
        actor_id: &str,
        page: &PageArgs,
    ) -> ClientResult<Connection<Actor>> {
        require("actorId", actor_id)?;
        self.paginate(&FETCH_FOLLOWERS, json!({ "actorId": actor_id }), page)
            .await
    }

    pub async fn fetch_following(
        &self,
        actor_id: &str,
        page: &PageArgs,
    ) -> ClientResult<Connection<Actor>> {
        require("actorId", actor_id)?;
        self.paginate(&FETCH_FOLLOWING, json!({ "actorId": actor_id }), page)
            .await
    }

    /// The viewer's relationship with an actor.
    pub async fn get_relationship(&self, actor_id: &str) -> ClientResult<Relationship> {
        require("actorId", actor_id)?;
        self.query(&GET_RELATIONSHIP, json!({ "actorId": actor_id }))
            .await
    }

    /// Follow an actor. Locked accounts answer with `requested` set.
    pub async fn follow_actor(&self, id: &str) -> ClientResult<Relationship> {
        require("id", id)?;
        self.mutate(&FOLLOW_ACTOR, json!({ "id": id })).await
    }

    pub async fn unfollow_actor(&self, id: &str) -> ClientResult<DeleteOutcome> {
        require("id", id)?;
        self.remove(&UNFOLLOW_ACTOR, json!({ "id": id })).await
    }

    pub async fn block_actor(&self, id: &str) -> ClientResult<Relationship> {
        require("id", id)?;
        self.mutate(&BLOCK_ACTOR, json!({ "id": id })).await
    }

    pub async fn unblock_actor(&self, id: &str) -> ClientResult<DeleteOutcome> {
        require("id", id)?;
        self.remove(&UNBLOCK_ACTOR, json!({ "id": id })).await
    }

    pub async fn mute_actor(&self, id: &str, options: MuteOptions) -> ClientResult<Relationship> {
        require("id", id)?;
        let mut variables = json!({ "id": id, "notifications": options.notifications });
        if let Some(duration) = options.duration_secs {
            variables["duration"] = Value::from(duration);
        }
        self.mutate(&MUTE_ACTOR, variables).await
    }

    pub async fn unmute_actor(&self, id: &str) -> ClientResult<DeleteOutcome> {
        require("id", id)?;
        self.remove(&UNMUTE_ACTOR, json!({ "id": id })).await
    }

    /// Update the viewer's own profile.
    pub async fn update_profile(&self, input: &UpdateProfileInput) -> ClientResult<Actor> {
        self.mutate_input(&UPDATE_PROFILE, input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::recording_client;

    #[tokio::test]
    async fn test_follow_actor() {
        let (client, transport) = recording_client();
        transport.respond(json!({
            "data": { "followActor": { "id": "a2", "following": false, "requested": true } }
        }));

        let rel = client.follow_actor("a2").await.unwrap();
        assert!(rel.requested);
        assert!(!rel.following);
    }

    #[tokio::test]
    async fn test_unfollow_already_absent() {
        let (client, transport) = recording_client();
        transport.respond(json!({
            "errors": [{ "message": "missing target id: not following" }]
        }));

        assert_eq!(
            client.unfollow_actor("a2").await.unwrap(),
            DeleteOutcome::AlreadyAbsent
        );
    }

    #[tokio::test]
    async fn test_get_actor_by_username_strips_at() {
        let (client, transport) = recording_client();
        transport.respond(json!({
            "data": { "actorByUsername": { "id": "a1", "username": "alice", "domain": "remote.example" } }
        }));

        let actor = client
            .get_actor_by_username("@alice", Some("remote.example"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(actor.handle(), "alice@remote.example");

        let sent = transport.last();
        assert_eq!(sent.variables["username"], "alice");
        assert_eq!(sent.variables["domain"], "remote.example");
    }

    #[tokio::test]
    async fn test_mute_without_duration() {
        let (client, transport) = recording_client();
        transport.respond(json!({ "data": { "muteActor": { "id": "a2", "muting": true } } }));

        client
            .mute_actor("a2", MuteOptions::default())
            .await
            .unwrap();

        assert_eq!(
            Value::Object(transport.last().variables),
            json!({ "id": "a2", "notifications": false })
        );
    }

    #[tokio::test]
    async fn test_fetch_followers_paginated() {
        let (client, transport) = recording_client();
        transport.respond(json!({
            "data": { "followers": {
                "totalCount": 2,
                "edges": [
                    { "cursor": "c1", "node": { "id": "a3", "username": "carol" } },
                    { "cursor": "c2", "node": { "id": "a4", "username": "dave" } }
                ],
                "pageInfo": { "hasNextPage": false, "hasPreviousPage": false }
            } }
        }));

        let page = client
            .fetch_followers("a1", &PageArgs::first(2))
            .await
            .unwrap();
        assert_eq!(page.len(), 2);
        assert!(page.next_cursor().is_none());
        assert_eq!(transport.last().variables["first"], 2);
    }
}
