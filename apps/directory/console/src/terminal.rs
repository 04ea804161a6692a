//! Line-oriented input loop driving [`App`].

use domain_users::{Field, UserApi};
use std::collections::VecDeque;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::app::{App, Screen};
use crate::view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Add,
    Edit(i64),
    Delete(i64),
    Refresh,
    Quit,
    Help,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or_default();
    let id = |arg: Option<&str>| -> Result<i64, String> {
        let raw = arg.ok_or_else(|| format!("'{verb}' needs a user id"))?;
        raw.parse()
            .map_err(|_| format!("'{raw}' is not a valid user id"))
    };

    match verb {
        "a" | "add" => Ok(Command::Add),
        "e" | "edit" => id(parts.next()).map(Command::Edit),
        "d" | "delete" => id(parts.next()).map(Command::Delete),
        "r" | "refresh" => Ok(Command::Refresh),
        "q" | "quit" => Ok(Command::Quit),
        "" | "h" | "help" | "?" => Ok(Command::Help),
        other => Err(format!("Unknown command '{other}'")),
    }
}

fn field_by_number(line: &str) -> Option<Field> {
    let index: usize = line.trim().parse().ok()?;
    Field::ALL.get(index.checked_sub(1)?).copied()
}

fn is_yes(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Runs until `q` or end of input.
///
/// A visible notice is dropped from the list screen once it expires, even while waiting
/// for input.
pub async fn run<A, R, W>(app: &mut App<A>, input: R, out: &mut W) -> io::Result<()>
where
    A: UserApi,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    // Fields still to be asked for, front first
    let mut prompts: VecDeque<Field> = VecDeque::new();

    app.refresh().await;

    loop {
        render(app, prompts.front().copied(), out).await?;

        let deadline = match app.screen() {
            Screen::List => app.notice_expires_at(),
            _ => None,
        };
        let line = match deadline {
            Some(deadline) => tokio::select! {
                line = lines.next_line() => line?,
                _ = tokio::time::sleep_until(deadline.into()) => continue,
            },
            None => lines.next_line().await?,
        };
        let Some(line) = line else {
            break;
        };

        match app.screen().clone() {
            Screen::List => {
                match parse_command(&line) {
                    Ok(Command::Add) => {
                        app.add();
                        prompts = Field::ALL.into_iter().collect();
                    }
                    Ok(Command::Edit(id)) => app.edit(id),
                    Ok(Command::Delete(id)) => app.request_delete(id),
                    Ok(Command::Refresh) => {
                        app.refresh().await;
                    }
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => {}
                    Err(message) => {
                        out.write_all(format!("{message}\n").as_bytes()).await?;
                    }
                }
            }
            Screen::Form(_) => {
                if let Some(field) = prompts.pop_front() {
                    if let Some(form) = app.form_mut() {
                        form.set(field, &line);
                        if let Some(message) = form.error(field) {
                            out.write_all(format!("  ! {message}\n").as_bytes()).await?;
                        }
                    }
                    continue;
                }

                match line.trim() {
                    "s" | "save" => {
                        if app.submit().await {
                            prompts.clear();
                        }
                    }
                    "c" | "cancel" => {
                        prompts.clear();
                        app.cancel();
                    }
                    other => match field_by_number(other) {
                        Some(field) => prompts.push_back(field),
                        None => {
                            out.write_all(format!("{}\n", view::FORM_HELP).as_bytes())
                                .await?;
                        }
                    },
                }
            }
            Screen::ConfirmDelete(_) => app.confirm_delete(is_yes(&line)).await,
        }
    }

    out.flush().await
}

async fn render<A, W>(app: &mut App<A>, prompt: Option<Field>, out: &mut W) -> io::Result<()>
where
    A: UserApi,
    W: AsyncWrite + Unpin,
{
    let mut text = String::new();

    if prompt.is_none() {
        if let Some(notice) = app.notice() {
            text.push_str(&view::notice(notice));
            text.push('\n');
        }
    }

    match app.screen() {
        Screen::List => {
            text.push('\n');
            text.push_str(&view::user_table(app.users()));
            text.push_str(view::LIST_HELP);
            text.push_str("\n> ");
        }
        Screen::Form(form) => match prompt {
            Some(field) => {
                text.push_str(&format!(
                    "{} [{}]: ",
                    field.label(),
                    form.draft().value(field)
                ));
            }
            None => {
                text.push('\n');
                text.push_str(&view::form(form));
                text.push_str(view::FORM_HELP);
                text.push_str("\n> ");
            }
        },
        Screen::ConfirmDelete(id) => {
            let user = app.users().iter().find(|u| u.id == *id);
            text.push_str(&view::confirm_delete(user, *id));
        }
    }

    out.write_all(text.as_bytes()).await?;
    out.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockApi, ann, draft};
    use domain_users::User;
    use mockall::Sequence;
    use mockall::predicate::eq;
    use std::time::Duration;

    async fn drive(api: MockApi, script: &str) -> String {
        let mut app = App::new(api, Duration::from_secs(3));
        let mut out = Vec::new();
        run(&mut app, script.as_bytes(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("a"), Ok(Command::Add));
        assert_eq!(parse_command("e 4"), Ok(Command::Edit(4)));
        assert_eq!(parse_command("delete 2"), Ok(Command::Delete(2)));
        assert_eq!(parse_command(""), Ok(Command::Help));
        assert!(parse_command("e").is_err());
        assert!(parse_command("d x").is_err());
        assert!(parse_command("zap").is_err());
    }

    #[test]
    fn test_field_by_number() {
        assert_eq!(field_by_number("1"), Some(Field::FirstName));
        assert_eq!(field_by_number("5"), Some(Field::Address));
        assert_eq!(field_by_number("0"), None);
        assert_eq!(field_by_number("6"), None);
    }

    #[tokio::test]
    async fn test_add_walks_through_fields_and_saves() {
        let mut api = MockApi::new();
        let mut seq = Sequence::new();
        api.expect_list()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![]));
        api.expect_create()
            .with(eq(draft("Ann", "ann@x.io")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|d| Ok(User::new(1, d)));
        api.expect_list()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![ann()]));

        let output = drive(api, "a\nAnn\nLee\nann@x.io\n5551234\n1 Elm St\ns\nq\n").await;

        assert!(output.contains("No users found."));
        assert!(output.contains("Add New User"));
        assert!(output.contains("[ok] User created successfully!"));
        assert!(output.contains("ann@x.io"));
    }

    #[tokio::test]
    async fn test_live_error_is_printed_after_input() {
        let mut api = MockApi::new();
        api.expect_list().times(1).returning(|| Ok(vec![]));

        let output = drive(api, "a\nAnn\nLee\nann@\n").await;

        assert!(output.contains(
            "  ! Please enter a valid email address format (e.g., user@example.com)"
        ));
    }

    #[tokio::test]
    async fn test_declined_delete_keeps_user() {
        let mut api = MockApi::new();
        api.expect_list().times(1).returning(|| Ok(vec![ann()]));
        api.expect_delete().never();

        let output = drive(api, "d 1\nn\nq\n").await;

        assert!(output.contains("Delete Ann Lee <ann@x.io>? [y/N] "));
    }

    #[tokio::test]
    async fn test_unknown_command_is_reported() {
        let mut api = MockApi::new();
        api.expect_list().times(1).returning(|| Ok(vec![]));

        let output = drive(api, "zap\n").await;

        assert!(output.contains("Unknown command 'zap'"));
    }
}
