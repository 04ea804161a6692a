//! Plain-text rendering of the console screens.

use domain_users::{Field, User};
use std::fmt::Write;

use crate::form::{FormMode, UserForm};
use crate::notice::{Notice, NoticeKind};

pub const LIST_HELP: &str = "[a] add  [e <id>] edit  [d <id>] delete  [r] refresh  [q] quit";
pub const FORM_HELP: &str = "[1-5] change field  [s] save  [c] cancel";

const ADDRESS_WIDTH: usize = 30;

pub fn notice(notice: &Notice) -> String {
    match notice.kind {
        NoticeKind::Success => format!("[ok] {}", notice.message),
        NoticeKind::Error => format!("[error] {}", notice.message),
    }
}

/// The user table, or a placeholder when there is nobody to show.
pub fn user_table(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<16} {:<16} {:<28} {:<12} {:<width$} {:<10}",
        "ID",
        "First name",
        "Last name",
        "Email",
        "Mobile",
        "Address",
        "Created",
        width = ADDRESS_WIDTH
    );
    for user in users {
        let _ = writeln!(
            out,
            "{:>4}  {:<16} {:<16} {:<28} {:<12} {:<width$} {:<10}",
            user.id,
            user.first_name,
            user.last_name,
            user.email,
            user.mobile,
            truncate(&user.address, ADDRESS_WIDTH),
            user.created_at.format("%Y-%m-%d"),
            width = ADDRESS_WIDTH
        );
    }
    out
}

/// Numbered fields with their current values and any error underneath.
pub fn form(form: &UserForm) -> String {
    let mut out = String::new();
    let _ = match form.mode() {
        FormMode::Create => writeln!(out, "Add New User"),
        FormMode::Edit(id) => writeln!(out, "Edit User #{id}"),
    };

    for (index, field) in Field::ALL.into_iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {:<11} {}",
            index + 1,
            format!("{}:", field.label()),
            form.draft().value(field)
        );
        if let Some(message) = form.error(field) {
            let _ = writeln!(out, "     ! {message}");
        }
    }
    out
}

pub fn confirm_delete(user: Option<&User>, id: i64) -> String {
    match user {
        Some(user) => format!(
            "Delete {} {} <{}>? [y/N] ",
            user.first_name, user.last_name, user.email
        ),
        None => format!("Delete user #{id}? [y/N] "),
    }
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let mut short: String = value.chars().take(max.saturating_sub(3)).collect();
    short.push_str("...");
    short
}
