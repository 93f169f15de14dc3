use hn_core::entities::User;
use hn_db::repos::UserRepository;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ListResponse {
    users: Vec<User>,
    count: usize,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&list_users(ctx).await?, flags.format)
}

async fn list_users(ctx: &AppContext) -> anyhow::Result<ListResponse> {
    let users = ctx.db.list_users().await?;
    let count = users.len();
    Ok(ListResponse { users, count })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::test_context;

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let ctx = test_context().await;
        let response = list_users(&ctx).await.unwrap();
        assert_eq!(response.count, 0);
        assert!(response.users.is_empty());
    }

    #[tokio::test]
    async fn lists_registered_users_in_order() {
        let ctx = test_context().await;
        ctx.db.create_user("alice", "a@example.com").await.unwrap();
        ctx.db.create_user("bob", "").await.unwrap();

        let response = list_users(&ctx).await.unwrap();
        let names: Vec<&str> = response.users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob"]);
        assert_eq!(response.count, 2);

        let rendered = serde_json::to_value(&response).unwrap();
        assert_eq!(rendered["count"], 2);
        assert_eq!(rendered["users"][0]["email"], "a@example.com");
    }
}
