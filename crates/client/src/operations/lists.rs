//! Lists of followed accounts.

use fedigraph_common::{ClientError, ClientResult};
use fedigraph_types::{Actor, Connection, CreateListInput, List, UpdateListInput};
use serde_json::json;
use validator::Validate;

use super::require;
use crate::client::FediClient;
use crate::missing_target::DeleteOutcome;
use crate::operation::Operation;
use crate::pagination::PageArgs;

const FETCH_LISTS: Operation = Operation::query(
    "FetchLists",
    "lists",
    concat!("query FetchLists { lists { ...ListFields } }", list_fields!()),
);

const GET_LIST: Operation = Operation::query(
    "GetList",
    "list",
    concat!(
        "query GetList($id: ID!) { list(id: $id) { ...ListFields } }",
        list_fields!()
    ),
);

const FETCH_LIST_ACCOUNTS: Operation = Operation::query(
    "FetchListAccounts",
    "listAccounts",
    concat!(
        "query FetchListAccounts($listId: ID!, ",
        page_vars!(),
        ") { listAccounts(listId: $listId, ",
        page_args!(),
        ") ",
        connection_of!("ActorFields"),
        " }",
        actor_fields!()
    ),
);

const CREATE_LIST: Operation = Operation::mutation(
    "CreateList",
    "createList",
    concat!(
        "mutation CreateList($input: CreateListInput!) { createList(input: $input) { ...ListFields } }",
        list_fields!()
    ),
);

const UPDATE_LIST: Operation = Operation::mutation(
    "UpdateList",
    "updateList",
    concat!(
        "mutation UpdateList($id: ID!, $input: UpdateListInput!) { updateList(id: $id, input: $input) { ...ListFields } }",
        list_fields!()
    ),
);

const DELETE_LIST: Operation = Operation::mutation(
    "DeleteList",
    "deleteList",
    "mutation DeleteList($id: ID!) { deleteList(id: $id) }",
);

const ADD_ACCOUNTS_TO_LIST: Operation = Operation::mutation(
    "AddAccountsToList",
    "addAccountsToList",
    concat!(
        "mutation AddAccountsToList($listId: ID!, $accountIds: [ID!]!) { \
         addAccountsToList(listId: $listId, accountIds: $accountIds) { ...ListFields } }",
        list_fields!()
    ),
);

const REMOVE_ACCOUNTS_FROM_LIST: Operation = Operation::mutation(
    "RemoveAccountsFromList",
    "removeAccountsFromList",
    "mutation RemoveAccountsFromList($listId: ID!, $accountIds: [ID!]!) { \
     removeAccountsFromList(listId: $listId, accountIds: $accountIds) }",
);

fn require_accounts(account_ids: &[String]) -> ClientResult<()> {
    if account_ids.is_empty() {
        return Err(ClientError::Validation(
            "accountIds: at least one account is required".to_string(),
        ));
    }
    account_ids.iter().try_for_each(|id| require("accountIds", id))
}

impl FediClient {
    /// Every list the viewer owns.
    pub async fn fetch_lists(&self) -> ClientResult<Vec<List>> {
        self.query(&FETCH_LISTS, json!({})).await
    }

    pub async fn get_list(&self, id: &str) -> ClientResult<Option<List>> {
        require("id", id)?;
        self.query(&GET_LIST, json!({ "id": id })).await
    }

    /// Members of a list.
    pub async fn fetch_list_accounts(
        &self,
        list_id: &str,
        page: &PageArgs,
    ) -> ClientResult<Connection<Actor>> {
        require("listId", list_id)?;
        self.paginate(&FETCH_LIST_ACCOUNTS, json!({ "listId": list_id }), page)
            .await
    }

    pub async fn create_list(&self, input: &CreateListInput) -> ClientResult<List> {
        self.mutate_input(&CREATE_LIST, input).await
    }

    pub async fn update_list(&self, id: &str, input: &UpdateListInput) -> ClientResult<List> {
        require("id", id)?;
        input.validate()?;
        let input = serde_json::to_value(input)?;
        self.mutate(&UPDATE_LIST, json!({ "id": id, "input": input }))
            .await
    }

    pub async fn delete_list(&self, id: &str) -> ClientResult<DeleteOutcome> {
        require("id", id)?;
        self.remove(&DELETE_LIST, json!({ "id": id })).await
    }

    pub async fn add_accounts_to_list(
        &self,
        list_id: &str,
        account_ids: &[String],
    ) -> ClientResult<List> {
        require("listId", list_id)?;
        require_accounts(account_ids)?;
        self.mutate(
            &ADD_ACCOUNTS_TO_LIST,
            json!({ "listId": list_id, "accountIds": account_ids }),
        )
        .await
    }

    pub async fn remove_accounts_from_list(
        &self,
        list_id: &str,
        account_ids: &[String],
    ) -> ClientResult<DeleteOutcome> {
        require("listId", list_id)?;
        require_accounts(account_ids)?;
        self.remove(
            &REMOVE_ACCOUNTS_FROM_LIST,
            json!({ "listId": list_id, "accountIds": account_ids }),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::recording_client;

    #[tokio::test]
    async fn test_create_list_validates_title() {
        let (client, transport) = recording_client();
        let input = CreateListInput {
            title: String::new(),
            replies_policy: None,
            exclusive: None,
        };

        let err = client.create_list(&input).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_add_accounts() {
        let (client, transport) = recording_client();
        transport.respond(json!({
            "data": { "addAccountsToList": { "id": "l1", "title": "Friends", "accountsCount": 2 } }
        }));

        let list = client
            .add_accounts_to_list("l1", &["a1".to_string(), "a2".to_string()])
            .await
            .unwrap();
        assert_eq!(list.accounts_count, 2);
        assert_eq!(transport.last().variables["accountIds"], json!(["a1", "a2"]));
    }

    #[tokio::test]
    async fn test_remove_accounts_requires_ids() {
        let (client, _transport) = recording_client();
        let err = client
            .remove_accounts_from_list("l1", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }
}
