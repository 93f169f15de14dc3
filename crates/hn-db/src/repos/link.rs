//! Link repository: create, lookup, and filtered listing.

use async_trait::async_trait;
use chrono::Utc;

use hn_core::entities::{Link, NewLink};

use crate::HnDb;
use crate::error::DatabaseError;
use crate::helpers::{contains_folded, fold_case, get_opt_i64, parse_datetime};
use crate::repos::{LinkQuery, LinkRepository};

const LINK_COLUMNS: &str = "id, url, description, posted_by, created_at";

fn row_to_link(row: &libsql::Row) -> Result<Link, DatabaseError> {
    Ok(Link {
        id: row.get::<i64>(0)?,
        url: row.get::<String>(1)?,
        description: row.get::<String>(2)?,
        posted_by: get_opt_i64(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

/// `u64` bound to SQLite's signed `LIMIT`/`OFFSET`, saturating at `i64::MAX`.
fn sql_bound(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn window_bound(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

impl HnDb {
    async fn collect_links(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<Vec<Link>, DatabaseError> {
        let mut rows = self.conn().query(sql, params).await?;
        let mut links = Vec::new();
        while let Some(row) = rows.next().await? {
            links.push(row_to_link(&row)?);
        }
        Ok(links)
    }
}

#[async_trait]
impl LinkRepository for HnDb {
    async fn create_link(&self, link: NewLink) -> Result<Link, DatabaseError> {
        let now = Utc::now();

        let mut rows = self
            .conn()
            .query(
                "INSERT INTO links (url, description, posted_by, created_at)
                 VALUES (?1, ?2, ?3, ?4) RETURNING id",
                libsql::params![
                    link.url.as_str(),
                    link.description.as_str(),
                    link.posted_by,
                    now.to_rfc3339()
                ],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let id = row.get::<i64>(0)?;

        tracing::info!(link_id = id, posted_by = ?link.posted_by, "created link");

        Ok(Link {
            id,
            url: link.url,
            description: link.description,
            posted_by: link.posted_by,
            created_at: now,
        })
    }

    async fn find_link(&self, id: i64) -> Result<Option<Link>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {LINK_COLUMNS} FROM links WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_link(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_links(&self, query: &LinkQuery) -> Result<Vec<Link>, DatabaseError> {
        tracing::debug!(
            search = ?query.search,
            offset = query.offset,
            limit = query.limit,
            "listing links"
        );

        let Some(search) = query.search.as_deref() else {
            // LIMIT -1 is SQLite's "no limit"; OFFSET is only valid after a LIMIT.
            let limit = query.limit.map_or(-1, sql_bound);
            let offset = query.offset.map_or(0, sql_bound);
            return self
                .collect_links(
                    &format!("SELECT {LINK_COLUMNS} FROM links ORDER BY id LIMIT ?1 OFFSET ?2"),
                    libsql::params![limit, offset],
                )
                .await;
        };

        // SQLite's LIKE only folds ASCII, so filtering happens here.
        let needle = fold_case(search);
        let links = self
            .collect_links(&format!("SELECT {LINK_COLUMNS} FROM links ORDER BY id"), ())
            .await?;
        Ok(links
            .into_iter()
            .filter(|link| {
                contains_folded(&link.url, &needle) || contains_folded(&link.description, &needle)
            })
            .skip(query.offset.map_or(0, window_bound))
            .take(query.limit.map_or(usize::MAX, window_bound))
            .collect())
    }

    async fn links_posted_by(&self, user_id: i64) -> Result<Vec<Link>, DatabaseError> {
        self.collect_links(
            &format!("SELECT {LINK_COLUMNS} FROM links WHERE posted_by = ?1 ORDER BY id"),
            [user_id],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::test_support::{seed_link, seed_user, test_db};

    fn urls(links: &[Link]) -> Vec<&str> {
        links.iter().map(|link| link.url.as_str()).collect()
    }

    #[tokio::test]
    async fn create_link_roundtrip() {
        let db = test_db().await;
        let alice = seed_user(&db, "alice").await;

        let link = db
            .create_link(NewLink::new("https://a.com", "foo").posted_by(Some(alice)))
            .await
            .unwrap();
        assert!(link.id > 0);
        assert_eq!(link.posted_by, Some(alice));

        let fetched = db.find_link(link.id).await.unwrap().unwrap();
        assert_eq!(fetched.url, "https://a.com");
        assert_eq!(fetched.description, "foo");
        assert_eq!(fetched.posted_by, Some(alice));
    }

    #[tokio::test]
    async fn anonymous_link_has_no_owner() {
        let db = test_db().await;
        let link = seed_link(&db, "https://a.com", "foo").await;

        let fetched = db.find_link(link.id).await.unwrap().unwrap();
        assert_eq!(fetched.posted_by, None);
    }

    #[tokio::test]
    async fn find_missing_link_is_none() {
        let db = test_db().await;
        assert!(db.find_link(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn link_with_unknown_owner_is_rejected() {
        let db = test_db().await;
        let result = db
            .create_link(NewLink::new("https://a.com", "foo").posted_by(Some(999)))
            .await;
        assert!(result.is_err());
    }

    #[rstest]
    #[case(Some("foo"), vec!["a.com", "b.com"])]
    #[case(Some("bar"), vec!["b.com"])]
    #[case(Some("FOO"), vec!["a.com", "b.com"])]
    #[case(Some("B.COM"), vec!["b.com"])]
    #[case(Some("nothing"), vec![])]
    #[case(None, vec!["a.com", "b.com"])]
    #[tokio::test]
    async fn search_matches_url_or_description(
        #[case] search: Option<&str>,
        #[case] expected: Vec<&str>,
    ) {
        let db = test_db().await;
        seed_link(&db, "a.com", "foo").await;
        seed_link(&db, "b.com", "bar foo").await;

        let links = db
            .list_links(&LinkQuery {
                search: search.map(String::from),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(urls(&links), expected);
    }

    #[tokio::test]
    async fn search_wildcards_match_literally() {
        let db = test_db().await;
        seed_link(&db, "a.com", "100% rust").await;
        seed_link(&db, "b.com", "1000 rust").await;
        seed_link(&db, "c.com", "snake_case").await;
        seed_link(&db, "d.com", "snakeXcase").await;

        let percent = db
            .list_links(&LinkQuery {
                search: Some("0%".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(urls(&percent), vec!["a.com"]);

        let underscore = db
            .list_links(&LinkQuery {
                search: Some("e_c".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(urls(&underscore), vec!["c.com"]);
    }

    #[rstest]
    #[case("école", vec!["fr.com"])]
    #[case("ÉCOLE", vec!["fr.com"])]
    #[case("überblick", vec!["fr.com"])]
    #[case("STRASSE", vec!["de.com"])]
    #[tokio::test]
    async fn search_folds_non_ascii_case(#[case] search: &str, #[case] expected: Vec<&str>) {
        let db = test_db().await;
        seed_link(&db, "fr.com", "École Überblick").await;
        seed_link(&db, "de.com", "Hauptstrasse").await;

        let links = db
            .list_links(&LinkQuery {
                search: Some(search.into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(urls(&links), expected);
    }

    #[tokio::test]
    async fn offset_applies_before_limit() {
        let db = test_db().await;
        for i in 0..5 {
            seed_link(&db, &format!("{i}.com"), "link").await;
        }

        let links = db
            .list_links(&LinkQuery {
                offset: Some(2),
                limit: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(urls(&links), vec!["2.com", "3.com"]);
    }

    #[tokio::test]
    async fn offset_without_limit_returns_tail() {
        let db = test_db().await;
        for i in 0..5 {
            seed_link(&db, &format!("{i}.com"), "link").await;
        }

        let links = db
            .list_links(&LinkQuery {
                offset: Some(3),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(urls(&links), vec!["3.com", "4.com"]);
    }

    #[tokio::test]
    async fn pagination_composes_with_search() {
        let db = test_db().await;
        seed_link(&db, "a.com", "rust").await;
        seed_link(&db, "b.com", "go").await;
        seed_link(&db, "c.com", "rust").await;
        seed_link(&db, "d.com", "rust").await;

        let links = db
            .list_links(&LinkQuery {
                search: Some("rust".into()),
                offset: Some(1),
                limit: Some(1),
            })
            .await
            .unwrap();
        assert_eq!(urls(&links), vec!["c.com"]);
    }

    #[tokio::test]
    async fn links_posted_by_filters_owner() {
        let db = test_db().await;
        let alice = seed_user(&db, "alice").await;
        let bob = seed_user(&db, "bob").await;
        db.create_link(NewLink::new("a.com", "one").posted_by(Some(alice)))
            .await
            .unwrap();
        db.create_link(NewLink::new("b.com", "two").posted_by(Some(bob)))
            .await
            .unwrap();
        seed_link(&db, "c.com", "anon").await;

        let links = db.links_posted_by(alice).await.unwrap();
        assert_eq!(urls(&links), vec!["a.com"]);
    }
}
