//! Moderation: reports, community notes, patterns and AI analysis.

use fedigraph_common::ClientResult;
use fedigraph_types::{
    AiAnalysis, CommunityNote, CommunityNoteInput, Connection, FlagInput, ModerationPattern,
    ModerationPatternInput, ModerationReport,
};
use serde_json::json;
use validator::Validate;

use super::require;
use crate::client::FediClient;
use crate::missing_target::DeleteOutcome;
use crate::operation::Operation;
use crate::pagination::PageArgs;

const FLAG_OBJECT: Operation = Operation::mutation(
    "FlagObject",
    "flagObject",
    "mutation FlagObject($input: FlagInput!) { flagObject(input: $input) { id objectId reason status createdAt } }",
);

const FETCH_COMMUNITY_NOTES: Operation = Operation::query(
    "FetchCommunityNotes",
    "communityNotes",
    concat!(
        "query FetchCommunityNotes($objectId: ID!) { communityNotes(objectId: $objectId) { ...CommunityNoteFields } }",
        community_note_fields!(),
        actor_fields!()
    ),
);

const ADD_COMMUNITY_NOTE: Operation = Operation::mutation(
    "AddCommunityNote",
    "addCommunityNote",
    concat!(
        "mutation AddCommunityNote($input: CommunityNoteInput!) { addCommunityNote(input: $input) { ...CommunityNoteFields } }",
        community_note_fields!(),
        actor_fields!()
    ),
);

const VOTE_COMMUNITY_NOTE: Operation = Operation::mutation(
    "VoteCommunityNote",
    "voteCommunityNote",
    concat!(
        "mutation VoteCommunityNote($noteId: ID!, $helpful: Boolean!) { \
         voteCommunityNote(noteId: $noteId, helpful: $helpful) { ...CommunityNoteFields } }",
        community_note_fields!(),
        actor_fields!()
    ),
);

const FETCH_MODERATION_PATTERNS: Operation = Operation::query(
    "FetchModerationPatterns",
    "moderationPatterns",
    concat!(
        "query FetchModerationPatterns($active: Boolean, ",
        page_vars!(),
        ") { moderationPatterns(active: $active, ",
        page_args!(),
        ") ",
        connection_of!("ModerationPatternFields"),
        " }",
        moderation_pattern_fields!(),
        actor_fields!()
    ),
);

const CREATE_MODERATION_PATTERN: Operation = Operation::mutation(
    "CreateModerationPattern",
    "createModerationPattern",
    concat!(
        "mutation CreateModerationPattern($input: ModerationPatternInput!) { \
         createModerationPattern(input: $input) { ...ModerationPatternFields } }",
        moderation_pattern_fields!(),
        actor_fields!()
    ),
);

const UPDATE_MODERATION_PATTERN: Operation = Operation::mutation(
    "UpdateModerationPattern",
    "updateModerationPattern",
    concat!(
        "mutation UpdateModerationPattern($id: ID!, $input: ModerationPatternInput!) { \
         updateModerationPattern(id: $id, input: $input) { ...ModerationPatternFields } }",
        moderation_pattern_fields!(),
        actor_fields!()
    ),
);

const DELETE_MODERATION_PATTERN: Operation = Operation::mutation(
    "DeleteModerationPattern",
    "deleteModerationPattern",
    "mutation DeleteModerationPattern($id: ID!) { deleteModerationPattern(id: $id) }",
);

const REQUEST_AI_ANALYSIS: Operation = Operation::mutation(
    "RequestAiAnalysis",
    "requestAIAnalysis",
    concat!(
        "mutation RequestAiAnalysis($objectId: ID!) { requestAIAnalysis(objectId: $objectId) { ...AiAnalysisFields } }",
        ai_analysis_fields!()
    ),
);

const GET_AI_ANALYSIS: Operation = Operation::query(
    "GetAiAnalysis",
    "aiAnalysis",
    concat!(
        "query GetAiAnalysis($objectId: ID!) { aiAnalysis(objectId: $objectId) { ...AiAnalysisFields } }",
        ai_analysis_fields!()
    ),
);

impl FediClient {
    /// Report an object to the moderators.
    pub async fn flag_object(&self, input: &FlagInput) -> ClientResult<ModerationReport> {
        self.mutate_input(&FLAG_OBJECT, input).await
    }

    /// Community notes attached to an object, best rated first.
    pub async fn fetch_community_notes(&self, object_id: &str) -> ClientResult<Vec<CommunityNote>> {
        require("objectId", object_id)?;
        self.query(&FETCH_COMMUNITY_NOTES, json!({ "objectId": object_id }))
            .await
    }

    pub async fn add_community_note(&self, input: &CommunityNoteInput) -> ClientResult<CommunityNote> {
        self.mutate_input(&ADD_COMMUNITY_NOTE, input).await
    }

    /// Rate a community note as helpful or not.
    pub async fn vote_community_note(&self, note_id: &str, helpful: bool) -> ClientResult<CommunityNote> {
        require("noteId", note_id)?;
        self.mutate(
            &VOTE_COMMUNITY_NOTE,
            json!({ "noteId": note_id, "helpful": helpful }),
        )
        .await
    }

    /// Moderation patterns, optionally only active or only inactive ones.
    pub async fn fetch_moderation_patterns(
        &self,
        active: Option<bool>,
        page: &PageArgs,
    ) -> ClientResult<Connection<ModerationPattern>> {
        let variables = match active {
            Some(active) => json!({ "active": active }),
            None => json!({}),
        };
        self.paginate(&FETCH_MODERATION_PATTERNS, variables, page)
            .await
    }

    pub async fn create_moderation_pattern(
        &self,
        input: &ModerationPatternInput,
    ) -> ClientResult<ModerationPattern> {
        self.mutate_input(&CREATE_MODERATION_PATTERN, input).await
    }

    pub async fn update_moderation_pattern(
        &self,
        id: &str,
        input: &ModerationPatternInput,
    ) -> ClientResult<ModerationPattern> {
        require("id", id)?;
        input.validate()?;
        let input = serde_json::to_value(input)?;
        self.mutate(&UPDATE_MODERATION_PATTERN, json!({ "id": id, "input": input }))
            .await
    }

    pub async fn delete_moderation_pattern(&self, id: &str) -> ClientResult<DeleteOutcome> {
        require("id", id)?;
        self.remove(&DELETE_MODERATION_PATTERN, json!({ "id": id }))
            .await
    }

    /// Ask the server to (re)analyse an object. The analysis may complete
    /// later; follow it with `subscribe_ai_analysis_updates`.
    pub async fn request_ai_analysis(&self, object_id: &str) -> ClientResult<AiAnalysis> {
        require("objectId", object_id)?;
        self.mutate(&REQUEST_AI_ANALYSIS, json!({ "objectId": object_id }))
            .await
    }

    /// Latest analysis of an object, if one exists.
    pub async fn get_ai_analysis(&self, object_id: &str) -> ClientResult<Option<AiAnalysis>> {
        require("objectId", object_id)?;
        self.query(&GET_AI_ANALYSIS, json!({ "objectId": object_id }))
            .await
    }
}
