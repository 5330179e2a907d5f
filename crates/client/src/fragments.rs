//! Shared GraphQL selection sets.
//!
//! Each macro expands to a string literal so documents can be assembled at
//! compile time with `concat!`. A document must include every fragment it
//! spreads, transitively, and no fragment it does not use.

macro_rules! page_vars {
    () => {
        "$first: Int, $after: String, $last: Int, $before: String"
    };
}

macro_rules! page_args {
    () => {
        "first: $first, after: $after, last: $last, before: $before"
    };
}

/// Selection of a `Connection` whose nodes are spread with `$fragment`.
macro_rules! connection_of {
    ($fragment:literal) => {
        concat!(
            "{ totalCount edges { cursor node { ...",
            $fragment,
            " } } pageInfo { hasNextPage hasPreviousPage startCursor endCursor } }"
        )
    };
}

macro_rules! actor_fields {
    () => {
        " fragment ActorFields on Actor { id username domain displayName summary avatar header \
         followers following statusesCount trustScore bot locked \
         fields { name value verifiedAt } createdAt }"
    };
}

macro_rules! media_fields {
    () => {
        " fragment MediaFields on Media { id type url previewUrl description blurhash sensitive \
         width height }"
    };
}

/// Requires `ActorFields` and `MediaFields`.
macro_rules! object_fields {
    () => {
        " fragment ObjectFields on Object { id type actor { ...ActorFields } content inReplyToId \
         visibility sensitive spoilerText attachments { ...MediaFields } tags { name url } \
         mentions { id username domain } repliesCount likesCount sharesCount moderationScore \
         quoteUrl quoteCount quotePermission liked shared bookmarked pinned published updated }"
    };
}

/// `ObjectFields` together with everything it spreads.
macro_rules! object_document {
    () => {
        concat!(object_fields!(), actor_fields!(), media_fields!())
    };
}

/// Requires `object_document!()`.
macro_rules! activity_fields {
    () => {
        " fragment ActivityFields on Activity { id type actor { ...ActorFields } \
         object { ...ObjectFields } targetId published cost }"
    };
}

/// Requires `object_document!()`.
macro_rules! notification_fields {
    () => {
        " fragment NotificationFields on Notification { id type actor { ...ActorFields } \
         object { ...ObjectFields } read createdAt }"
    };
}

/// Requires `object_document!()`.
macro_rules! conversation_fields {
    () => {
        " fragment ConversationFields on Conversation { id accounts { ...ActorFields } \
         lastStatus { ...ObjectFields } unread updatedAt }"
    };
}

macro_rules! list_fields {
    () => {
        " fragment ListFields on List { id title repliesPolicy exclusive accountsCount createdAt \
         updatedAt }"
    };
}

macro_rules! hashtag_fields {
    () => {
        " fragment HashtagFields on Hashtag { name url displayName usageCount isFollowing \
         trendingRank history { day uses accounts } }"
    };
}

macro_rules! relationship_fields {
    () => {
        " fragment RelationshipFields on Relationship { id following followedBy blocking \
         blockedBy muting mutingNotifications requested domainBlocking note }"
    };
}

/// Requires `ActorFields`.
macro_rules! community_note_fields {
    () => {
        " fragment CommunityNoteFields on CommunityNote { id author { ...ActorFields } content \
         helpful notHelpful score createdAt }"
    };
}

/// Requires `ActorFields`.
macro_rules! moderation_pattern_fields {
    () => {
        " fragment ModerationPatternFields on ModerationPattern { id pattern type severity active \
         matchCount falsePositiveRate createdBy { ...ActorFields } createdAt updatedAt }"
    };
}

macro_rules! ai_analysis_fields {
    () => {
        " fragment AiAnalysisFields on AIAnalysis { id objectId objectType overallRisk \
         textAnalysis { sentiment toxicity spamScore dominantLanguage piiDetected } \
         moderationAction confidence analyzedAt }"
    };
}

macro_rules! trust_score_fields {
    () => {
        " fragment TrustScoreFields on TrustScore { actorId category score confidence updatedAt }"
    };
}

macro_rules! budget_fields {
    () => {
        " fragment InstanceBudgetFields on InstanceBudget { domain monthlyBudgetUsd \
         currentSpendUsd remainingBudgetUsd projectedOverspend alertThreshold autoLimit \
         periodStart }"
    };
}

macro_rules! federation_limit_fields {
    () => {
        " fragment FederationLimitFields on FederationLimit { domain ingressBytesPerDay \
         egressBytesPerDay requestsPerMinute monthlyBudgetUsd blocked updatedAt }"
    };
}

macro_rules! health_issue_selection {
    () => {
        "issues { type severity description detectedAt }"
    };
}
