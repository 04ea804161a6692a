//! Console state: the user list, the open form and the notice banner.
//!
//! Every server call goes through [`UserApi`], so the whole flow runs against a mock in
//! tests. Failures are reduced to one generic message per class; the underlying error is
//! only logged.

use domain_users::{ClientError, User, UserApi};
use reqwest::StatusCode;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::form::{FormMode, UserForm};
use crate::notice::{Notice, Notices};

pub const FETCH_FAILED: &str = "Failed to fetch users. Please try again.";
pub const SAVE_FAILED: &str = "Failed to save user. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete user. Please try again.";
pub const DUPLICATE_EMAIL: &str = "A user with this email already exists.";
pub const USER_GONE: &str = "That user no longer exists.";
pub const INPUT_REJECTED: &str = "The server rejected the input. Please review the form.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List,
    Form(UserForm),
    ConfirmDelete(i64),
}

pub struct App<A> {
    api: A,
    users: Vec<User>,
    screen: Screen,
    notices: Notices,
}

impl<A: UserApi> App<A> {
    pub fn new(api: A, notice_ttl: Duration) -> Self {
        Self {
            api,
            users: Vec::new(),
            screen: Screen::List,
            notices: Notices::new(notice_ttl),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn form_mut(&mut self) -> Option<&mut UserForm> {
        match &mut self.screen {
            Screen::Form(form) => Some(form),
            _ => None,
        }
    }

    pub fn notice(&mut self) -> Option<&Notice> {
        self.notices.active(Instant::now())
    }

    pub fn notice_expires_at(&self) -> Option<Instant> {
        self.notices.expires_at()
    }

    /// Reloads the list from the server. On failure the previous list stays on screen.
    pub async fn refresh(&mut self) -> bool {
        match self.api.list().await {
            Ok(users) => {
                self.users = users;
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch users");
                self.notices.error(FETCH_FAILED, Instant::now());
                false
            }
        }
    }

    pub fn add(&mut self) {
        self.screen = Screen::Form(UserForm::create());
    }

    pub fn edit(&mut self, id: i64) {
        match self.find(id).map(UserForm::edit) {
            Some(form) => self.screen = Screen::Form(form),
            None => self.notices.error(USER_GONE, Instant::now()),
        }
    }

    pub fn cancel(&mut self) {
        self.screen = Screen::List;
    }

    /// Asks for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: i64) {
        if self.find(id).is_some() {
            self.screen = Screen::ConfirmDelete(id);
        } else {
            self.notices.error(USER_GONE, Instant::now());
        }
    }

    /// Deletes the pending user when `confirmed`; otherwise leaves the list untouched.
    pub async fn confirm_delete(&mut self, confirmed: bool) {
        let Screen::ConfirmDelete(id) = self.screen else {
            return;
        };
        self.screen = Screen::List;

        if !confirmed {
            return;
        }

        match self.api.delete(id).await {
            Ok(()) => {
                if self.refresh().await {
                    self.notices.success("User deleted successfully!", Instant::now());
                }
            }
            Err(e) => {
                warn!(user_id = id, error = %e, "Failed to delete user");
                let gone = e.status() == Some(StatusCode::NOT_FOUND);
                self.notices.error(failure_message(&e, DELETE_FAILED), Instant::now());
                if gone {
                    self.users.retain(|u| u.id != id);
                }
            }
        }
    }

    /// Validates the open form and sends it.
    ///
    /// Local validation failures keep the form open with its errors and make no call.
    /// Returns `true` when the server accepted the user.
    pub async fn submit(&mut self) -> bool {
        let Screen::Form(form) = &mut self.screen else {
            return false;
        };
        let Some(draft) = form.submit() else {
            return false;
        };
        let mode = form.mode();

        let result = match mode {
            FormMode::Create => self
                .api
                .create(draft)
                .await
                .map(|_| "User created successfully!"),
            FormMode::Edit(id) => self
                .api
                .update(id, draft)
                .await
                .map(|()| "User updated successfully!"),
        };

        match result {
            Ok(message) => {
                self.screen = Screen::List;
                if self.refresh().await {
                    self.notices.success(message, Instant::now());
                }
                true
            }
            Err(e) => {
                warn!(?mode, error = %e, "Failed to save user");
                self.notices.error(failure_message(&e, SAVE_FAILED), Instant::now());
                if e.status() == Some(StatusCode::NOT_FOUND) {
                    self.screen = Screen::List;
                    self.refresh().await;
                }
                false
            }
        }
    }

    fn find(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}

/// Generic message for a failed call; `fallback` covers transport and server errors.
fn failure_message(err: &ClientError, fallback: &'static str) -> &'static str {
    match err.status() {
        Some(StatusCode::CONFLICT) => DUPLICATE_EMAIL,
        Some(StatusCode::NOT_FOUND) => USER_GONE,
        Some(StatusCode::BAD_REQUEST) => INPUT_REJECTED,
        _ => fallback,
    }
}
