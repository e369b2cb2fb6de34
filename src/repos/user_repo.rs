/*
 * Responsibility
 * - users / user_roles lookups via SQLx
 * - one query: the user row plus the ids of every role assigned to it
 */
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;
use crate::repos::store::{IdentityStore, RoleId, Subject};
use crate::services::auth::SubjectId;

#[derive(Debug, FromRow)]
struct SubjectRow {
    id: String,
    role_ids: Vec<RoleId>,
}

#[derive(Clone, Debug)]
pub struct PgIdentityStore {
    db: PgPool,
}

impl PgIdentityStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IdentityStore for PgIdentityStore {
    async fn find_subject_by_id(&self, id: &SubjectId) -> Result<Option<Subject>, RepoError> {
        let row = sqlx::query_as::<_, SubjectRow>(
            r#"
            SELECT
                u.id,
                COALESCE(
                    array_agg(ur.role_id) FILTER (WHERE ur.role_id IS NOT NULL),
                    '{}'::BIGINT[]
                ) AS role_ids
            FROM users u
            LEFT JOIN user_roles ur ON ur.user_id = u.id
            WHERE u.id = $1
            GROUP BY u.id
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(|r| Subject {
            id: SubjectId::from(r.id),
            role_ids: r.role_ids,
        }))
    }
}
