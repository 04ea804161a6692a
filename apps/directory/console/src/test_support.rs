use async_trait::async_trait;
use domain_users::{ClientError, ClientResult, User, UserApi, UserDraft};
use mockall::mock;

mock! {
    pub Api {}

    #[async_trait]
    impl UserApi for Api {
        async fn list(&self) -> ClientResult<Vec<User>>;
        async fn get(&self, id: i64) -> ClientResult<User>;
        async fn create(&self, draft: UserDraft) -> ClientResult<User>;
        async fn update(&self, id: i64, draft: UserDraft) -> ClientResult<()>;
        async fn delete(&self, id: i64) -> ClientResult<()>;
    }
}

pub fn draft(first: &str, email: &str) -> UserDraft {
    UserDraft {
        first_name: first.to_string(),
        last_name: "Lee".to_string(),
        email: email.to_string(),
        mobile: "5551234".to_string(),
        address: "1 Elm St".to_string(),
    }
}

pub fn ann() -> User {
    User::new(1, draft("Ann", "ann@x.io"))
}

/// A real `reqwest` error; an unparsable URL fails before any I/O.
pub fn transport_error() -> ClientError {
    let err = reqwest::Client::new()
        .get("not a url")
        .build()
        .unwrap_err();
    ClientError::Transport(err)
}
