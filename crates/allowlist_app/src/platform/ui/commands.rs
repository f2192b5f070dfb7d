use allowlist_core::{EditCursor, InheritanceStatus, Msg, SiteId};
use thiserror::Error;

pub const HELP: &[&str] = &[
    "org add [URL]                add an org default URL (bare `add` edits a new cell)",
    "org edit <I> <URL>           replace org default URL #I",
    "org del <I>                  delete org default URL #I",
    "org select <I>               start editing org default URL #I",
    "site <S> add [URL]           add a URL to site #S",
    "site <S> edit <I> <URL>      replace URL #I of site #S",
    "site <S> del <I>             delete URL #I of site #S",
    "site <S> select <I>          start editing URL #I of site #S",
    "site <S> status inherited|custom",
    "site <S> revert              reset site #S to the org defaults (asks first)",
    "type [TEXT]                  write TEXT into the cell being edited",
    "commit | cancel              leave edit mode",
    "show | help | quit",
];

/// A parsed line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Vec<Msg>),
    Show,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("{what} must be a number, got `{value}`")]
    InvalidNumber { what: &'static str, value: String },
    #[error("unexpected `{0}`")]
    UnexpectedArgument(String),
}

/// While a revert confirmation is open, every line answers it: `y`/`yes`
/// confirms, anything else cancels.
pub fn parse_line(line: &str, revert_pending: bool) -> Result<Command, CommandError> {
    let trimmed = line.trim();
    if revert_pending {
        let msg = if matches!(trimmed.to_ascii_lowercase().as_str(), "y" | "yes") {
            Msg::RevertConfirmed
        } else {
            Msg::RevertCancelled
        };
        return Ok(Command::Dispatch(vec![msg]));
    }

    let words: Vec<&str> = trimmed.split_whitespace().collect();
    let Some((&head, rest)) = words.split_first() else {
        return Ok(Command::Empty);
    };

    match head {
        "org" => parse_org(rest).map(Command::Dispatch),
        "site" => parse_site(rest).map(Command::Dispatch),
        "type" => {
            let text = trimmed
                .strip_prefix("type")
                .map(str::trim)
                .unwrap_or_default();
            Ok(Command::Dispatch(vec![Msg::CursorInput(text.to_string())]))
        }
        "commit" => no_more(rest, Command::Dispatch(vec![Msg::CommitEdit])),
        "cancel" => no_more(rest, Command::Dispatch(vec![Msg::CancelEdit])),
        "show" | "ls" => no_more(rest, Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_org(args: &[&str]) -> Result<Vec<Msg>, CommandError> {
    let (&action, args) = args
        .split_first()
        .ok_or(CommandError::MissingArgument("org action"))?;
    match action {
        "add" => Ok(vec![match optional_value(args)? {
            Some(value) => Msg::AppendOrgUrl { value },
            None => Msg::AddOrgUrl,
        }]),
        "edit" => {
            let (index, value) = index_and_value(args)?;
            Ok(vec![Msg::EditOrgUrl { index, value }])
        }
        "del" | "delete" => Ok(vec![Msg::DeleteOrgUrl {
            index: single_index(args)?,
        }]),
        "select" => Ok(vec![Msg::BeginEdit(EditCursor::org(single_index(args)?))]),
        other => Err(CommandError::Unknown(format!("org {other}"))),
    }
}

fn parse_site(args: &[&str]) -> Result<Vec<Msg>, CommandError> {
    let (&raw_site, args) = args
        .split_first()
        .ok_or(CommandError::MissingArgument("site number"))?;
    let site_id: SiteId = parse_number("site number", raw_site)?;
    let (&action, args) = args
        .split_first()
        .ok_or(CommandError::MissingArgument("site action"))?;
    match action {
        "add" => Ok(vec![match optional_value(args)? {
            Some(value) => Msg::AppendSiteUrl { site_id, value },
            None => Msg::AddSiteUrl { site_id },
        }]),
        "edit" => {
            let (index, value) = index_and_value(args)?;
            Ok(vec![Msg::EditSiteUrl {
                site_id,
                index,
                value,
            }])
        }
        "del" | "delete" => Ok(vec![Msg::DeleteSiteUrl {
            site_id,
            index: single_index(args)?,
        }]),
        "select" => Ok(vec![Msg::BeginEdit(EditCursor::site(
            site_id,
            single_index(args)?,
        ))]),
        "status" => {
            let status = match args {
                ["inherited" | "inherit"] => InheritanceStatus::Inherited,
                ["custom"] => InheritanceStatus::Custom,
                [] => return Err(CommandError::MissingArgument("status")),
                [other, ..] => return Err(CommandError::UnexpectedArgument(other.to_string())),
            };
            Ok(vec![Msg::SetSiteStatus { site_id, status }])
        }
        "revert" => {
            no_more(args, ())?;
            Ok(vec![Msg::RevertRequested { site_id }])
        }
        other => Err(CommandError::Unknown(format!("site {other}"))),
    }
}

fn optional_value(args: &[&str]) -> Result<Option<String>, CommandError> {
    match args {
        [] => Ok(None),
        [value] => Ok(Some(value.to_string())),
        [_, extra, ..] => Err(CommandError::UnexpectedArgument(extra.to_string())),
    }
}

fn index_and_value(args: &[&str]) -> Result<(usize, String), CommandError> {
    match args {
        [] => Err(CommandError::MissingArgument("url number")),
        [_] => Err(CommandError::MissingArgument("url")),
        [index, value] => Ok((parse_number("url number", index)?, value.to_string())),
        [_, _, extra, ..] => Err(CommandError::UnexpectedArgument(extra.to_string())),
    }
}

fn single_index(args: &[&str]) -> Result<usize, CommandError> {
    match args {
        [] => Err(CommandError::MissingArgument("url number")),
        [index] => parse_number("url number", index),
        [_, extra, ..] => Err(CommandError::UnexpectedArgument(extra.to_string())),
    }
}

fn parse_number(what: &'static str, raw: &str) -> Result<usize, CommandError> {
    raw.parse().map_err(|_| CommandError::InvalidNumber {
        what,
        value: raw.to_string(),
    })
}

fn no_more<T>(args: &[&str], value: T) -> Result<T, CommandError> {
    match args.first() {
        None => Ok(value),
        Some(extra) => Err(CommandError::UnexpectedArgument(extra.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(line: &str) -> Vec<Msg> {
        match parse_line(line, false).unwrap() {
            Command::Dispatch(msgs) => msgs,
            other => panic!("expected messages for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn org_commands() {
        assert_eq!(dispatch("org add"), vec![Msg::AddOrgUrl]);
        assert_eq!(
            dispatch("  org add https://x.example.com "),
            vec![Msg::AppendOrgUrl {
                value: "https://x.example.com".to_string()
            }]
        );
        assert_eq!(
            dispatch("org edit 1 https://y.example.com"),
            vec![Msg::EditOrgUrl {
                index: 1,
                value: "https://y.example.com".to_string()
            }]
        );
        assert_eq!(dispatch("org del 0"), vec![Msg::DeleteOrgUrl { index: 0 }]);
        assert_eq!(
            dispatch("org select 2"),
            vec![Msg::BeginEdit(EditCursor::org(2))]
        );
    }

    #[test]
    fn site_commands() {
        assert_eq!(dispatch("site 3 add"), vec![Msg::AddSiteUrl { site_id: 3 }]);
        assert_eq!(
            dispatch("site 3 add https://z.example.com"),
            vec![Msg::AppendSiteUrl {
                site_id: 3,
                value: "https://z.example.com".to_string()
            }]
        );
        assert_eq!(
            dispatch("site 1 delete 4"),
            vec![Msg::DeleteSiteUrl {
                site_id: 1,
                index: 4
            }]
        );
        assert_eq!(
            dispatch("site 0 status custom"),
            vec![Msg::SetSiteStatus {
                site_id: 0,
                status: InheritanceStatus::Custom
            }]
        );
        assert_eq!(
            dispatch("site 0 status inherited"),
            vec![Msg::SetSiteStatus {
                site_id: 0,
                status: InheritanceStatus::Inherited
            }]
        );
        assert_eq!(
            dispatch("site 2 revert"),
            vec![Msg::RevertRequested { site_id: 2 }]
        );
        assert_eq!(
            dispatch("site 2 select 0"),
            vec![Msg::BeginEdit(EditCursor::site(2, 0))]
        );
    }

    #[test]
    fn type_keeps_inner_spacing() {
        assert_eq!(
            dispatch("type a  b"),
            vec![Msg::CursorInput("a  b".to_string())]
        );
        assert_eq!(dispatch("type"), vec![Msg::CursorInput(String::new())]);
    }

    #[test]
    fn pending_revert_consumes_answer() {
        assert_eq!(
            parse_line("Y", true).unwrap(),
            Command::Dispatch(vec![Msg::RevertConfirmed])
        );
        assert_eq!(
            parse_line("org add", true).unwrap(),
            Command::Dispatch(vec![Msg::RevertCancelled])
        );
        assert_eq!(
            parse_line("", true).unwrap(),
            Command::Dispatch(vec![Msg::RevertCancelled])
        );
    }

    #[test]
    fn malformed_input_is_reported() {
        assert_eq!(parse_line("   ", false).unwrap(), Command::Empty);
        assert_eq!(
            parse_line("frobnicate", false),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
        assert_eq!(
            parse_line("org del x", false),
            Err(CommandError::InvalidNumber {
                what: "url number",
                value: "x".to_string()
            })
        );
        assert_eq!(
            parse_line("site 1 edit 0", false),
            Err(CommandError::MissingArgument("url"))
        );
        assert_eq!(
            parse_line("site 1 status maybe", false),
            Err(CommandError::UnexpectedArgument("maybe".to_string()))
        );
        assert_eq!(
            parse_line("show all", false),
            Err(CommandError::UnexpectedArgument("all".to_string()))
        );
    }
}
