use std::sync::Arc;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{UpdateUserRequest, User, UserDraft};
use crate::repository::UserRepository;

/// Service layer for User business logic
///
/// Validates drafts before they reach the repository, so every stored user satisfies the
/// field rules regardless of which adapter called in.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    pub async fn get_user(&self, id: i64) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    pub async fn create_user(&self, draft: UserDraft) -> UserResult<User> {
        draft.validate()?;
        self.repository.create(draft).await
    }

    /// Checks run in order: body/path id agreement, field rules, existence, email.
    pub async fn update_user(&self, id: i64, request: UpdateUserRequest) -> UserResult<User> {
        if request.id != Some(id) {
            return Err(UserError::IdMismatch {
                path: id,
                body: request.id,
            });
        }

        request.draft.validate()?;

        self.repository.update(id, request.draft).await
    }

    pub async fn delete_user(&self, id: i64) -> UserResult<()> {
        if !self.repository.delete(id).await? {
            return Err(UserError::NotFound(id));
        }
        Ok(())
    }

    /// Inserts the demo users when the store is empty; returns how many were added.
    pub async fn seed_demo_users(&self) -> UserResult<usize> {
        if self.repository.count().await? > 0 {
            tracing::debug!("Store not empty, skipping demo seed");
            return Ok(0);
        }

        let mut seeded = 0;
        for draft in demo_users() {
            self.create_user(draft).await?;
            seeded += 1;
        }

        tracing::info!(count = seeded, "Seeded demo users");
        Ok(seeded)
    }
}

fn demo_users() -> [UserDraft; 2] {
    [
        UserDraft {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@example.com".into(),
            mobile: "1234567890".into(),
            address: "123 Main St".into(),
        },
        UserDraft {
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            email: "jane.smith@example.com".into(),
            mobile: "0987654321".into(),
            address: "456 Oak Ave".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use mockall::predicate::eq;

    fn draft() -> UserDraft {
        UserDraft {
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "ann@example.com".into(),
            mobile: "5551234".into(),
            address: "1 Elm St".into(),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_draft_without_touching_store() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_create().never();

        let service = UserService::new(mock_repo);
        let mut bad = draft();
        bad.mobile = "1234567890123".into();

        let err = service.create_user(bad).await.unwrap_err();
        match err {
            UserError::Validation(errors) => {
                let fields = errors.field_errors();
                assert_eq!(
                    fields.get("mobile").unwrap()[0].message.as_deref(),
                    Some("Mobile number cannot exceed 12 characters")
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_delegates_valid_draft() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_create()
            .with(eq(draft()))
            .times(1)
            .returning(|d| Ok(User::new(1, d)));

        let service = UserService::new(mock_repo);
        let user = service.create_user(draft()).await.unwrap();
        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn test_get_missing_user_is_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(5))
            .returning(|_| Ok(None));

        let service = UserService::new(mock_repo);
        assert!(matches!(
            service.get_user(5).await,
            Err(UserError::NotFound(5))
        ));
    }

    #[tokio::test]
    async fn test_update_id_mismatch_is_rejected_before_store() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_update().never();
        let service = UserService::new(mock_repo);

        let mismatched = UpdateUserRequest {
            id: Some(2),
            draft: draft(),
        };
        assert!(matches!(
            service.update_user(1, mismatched).await,
            Err(UserError::IdMismatch {
                path: 1,
                body: Some(2)
            })
        ));

        let missing = UpdateUserRequest {
            id: None,
            draft: draft(),
        };
        assert!(matches!(
            service.update_user(1, missing).await,
            Err(UserError::IdMismatch { body: None, .. })
        ));
    }

    #[tokio::test]
    async fn test_update_checks_id_before_fields() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_update().never();
        let service = UserService::new(mock_repo);

        let mismatched = UpdateUserRequest {
            id: Some(2),
            draft: UserDraft::default(),
        };
        assert!(matches!(
            service.update_user(1, mismatched).await,
            Err(UserError::IdMismatch { .. })
        ));

        let invalid = UpdateUserRequest {
            id: Some(1),
            draft: UserDraft::default(),
        };
        assert!(matches!(
            service.update_user(1, invalid).await,
            Err(UserError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_update_passes_through_store_conflict() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_update()
            .with(eq(1), eq(draft()))
            .returning(|_, d| Err(UserError::DuplicateEmail(d.email)));

        let service = UserService::new(mock_repo);
        let request = UpdateUserRequest {
            id: Some(1),
            draft: draft(),
        };
        assert!(matches!(
            service.update_user(1, request).await,
            Err(UserError::DuplicateEmail(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_delete()
            .with(eq(3))
            .returning(|_| Ok(false));

        let service = UserService::new(mock_repo);
        assert!(matches!(
            service.delete_user(3).await,
            Err(UserError::NotFound(3))
        ));
    }

    #[tokio::test]
    async fn test_seed_skips_non_empty_store() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_count().returning(|| Ok(1));
        mock_repo.expect_create().never();

        let service = UserService::new(mock_repo);
        assert_eq!(service.seed_demo_users().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seed_inserts_both_demo_users() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_count().returning(|| Ok(0));
        mock_repo
            .expect_create()
            .times(2)
            .returning(|d| Ok(User::new(1, d)));

        let service = UserService::new(mock_repo);
        assert_eq!(service.seed_demo_users().await.unwrap(), 2);
    }

    #[test]
    fn test_demo_users_pass_validation() {
        for user in demo_users() {
            assert!(user.validate().is_ok(), "{} should be valid", user.email);
        }
    }
}
