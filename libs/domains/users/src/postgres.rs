use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbBackend, DbErr, FromQueryResult, SqlErr, Statement,
};

use crate::error::{UserError, UserResult};
use crate::models::{User, UserDraft};
use crate::repository::UserRepository;

const USER_COLUMNS: &str =
    "id, first_name, last_name, email, mobile, address, created_at, updated_at";

/// PostgreSQL implementation of UserRepository using SeaORM raw statements
///
/// Uniqueness comes from the `UNIQUE(email)` constraint and every write is a single
/// statement, so no explicit transaction is needed.
#[derive(Clone)]
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct UserRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    mobile: String,
    address: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            mobile: row.mobile,
            address: row.address,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn db_error(e: DbErr) -> UserError {
    UserError::Internal(format!("Database error: {}", e))
}

/// Unique violations on write become DuplicateEmail; anything else is internal.
fn write_error(e: DbErr, email: &str) -> UserError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => UserError::DuplicateEmail(email.to_string()),
        _ => db_error(e),
    }
}

fn draft_values(draft: &UserDraft) -> [sea_orm::Value; 5] {
    [
        draft.first_name.clone().into(),
        draft.last_name.clone().into(),
        draft.email.clone().into(),
        draft.mobile.clone().into(),
        draft.address.clone().into(),
    ]
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let sql = format!("SELECT {} FROM users ORDER BY id", USER_COLUMNS);
        let stmt = Statement::from_string(DbBackend::Postgres, sql);

        let rows = UserRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let sql = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [id.into()]);

        let row = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(row.map(User::from))
    }

    async fn create(&self, draft: UserDraft) -> UserResult<User> {
        let sql = format!(
            r#"
            INSERT INTO users (first_name, last_name, email, mobile, address, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            RETURNING {}
            "#,
            USER_COLUMNS
        );
        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, draft_values(&draft));

        let user: User = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| write_error(e, &draft.email))?
            .ok_or_else(|| UserError::Internal("Insert returned no row".to_string()))?
            .into();

        tracing::info!(user_id = user.id, "Created user");
        Ok(user)
    }

    async fn update(&self, id: i64, draft: UserDraft) -> UserResult<User> {
        let sql = format!(
            r#"
            UPDATE users
            SET first_name = $1, last_name = $2, email = $3, mobile = $4, address = $5,
                updated_at = GREATEST(NOW(), updated_at)
            WHERE id = $6
            RETURNING {}
            "#,
            USER_COLUMNS
        );
        let mut values = draft_values(&draft).to_vec();
        values.push(id.into());
        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, values);

        let row = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| write_error(e, &draft.email))?
            .ok_or(UserError::NotFound(id))?;

        tracing::info!(user_id = id, "Updated user");
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> UserResult<bool> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            "DELETE FROM users WHERE id = $1",
            [id.into()],
        );

        let result = self.db.execute_raw(stmt).await.map_err(db_error)?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(user_id = id, "Deleted user");
        }
        Ok(deleted)
    }

    async fn count(&self) -> UserResult<usize> {
        #[derive(FromQueryResult)]
        struct CountResult {
            count: i64,
        }

        let stmt = Statement::from_string(
            DbBackend::Postgres,
            "SELECT COUNT(*) AS count FROM users",
        );

        let result = CountResult::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(result.map(|r| r.count as usize).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_constraint_errors_are_internal() {
        let err = write_error(DbErr::Custom("connection reset".into()), "a@b.com");
        assert!(matches!(err, UserError::Internal(msg) if msg.contains("connection reset")));
    }

    #[test]
    fn test_row_conversion() {
        let now = Utc::now();
        let user = User::from(UserRow {
            id: 9,
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "ann@example.com".into(),
            mobile: "5551234".into(),
            address: "1 Elm St".into(),
            created_at: now,
            updated_at: now,
        });
        assert_eq!(user.id, 9);
        assert_eq!(user.to_draft().email, "ann@example.com");
    }
}
