//! Shell command parsing.

use picklist::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("missing argument: {0}")]
    Missing(&'static str),

    #[error(transparent)]
    Parse(#[from] PickListError),

    #[error("no item named {0:?} in the {1} list")]
    NoSuchItem(String, ListRole),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Help,
    Quit,
    /// `click <role> <name> [ctrl]`
    Click {
        role: ListRole,
        name: String,
        ctrl: bool,
    },
    /// `select <role> [name,name,...]`
    Select { role: ListRole, names: Vec<String> },
    /// `filter <role> [text...]`
    Filter { role: ListRole, query: String },
    /// `reorder <role> <direction>`
    Reorder {
        role: ListRole,
        direction: ReorderDirection,
    },
    /// `move <direction>`; unknown directions are passed through untouched.
    Move { direction: String },
}

pub const HELP: &str = "\
commands:
  show                              print both lists
  click <source|target> <name> [ctrl]
  select <source|target> [a,b,...]  replace a selection (empty clears)
  filter <source|target> [text]     set a filter query (empty clears)
  reorder <source|target> <up|top|down|bottom>
  move <toTarget|allToTarget|toSource|allToSource>
  help
  quit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;

        let command = match name {
            "show" | "ls" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "click" => {
                let role: ListRole = words.next().ok_or(CommandError::Missing("role"))?.parse()?;
                let name = words.next().ok_or(CommandError::Missing("item name"))?;
                Command::Click {
                    role,
                    name: name.to_string(),
                    ctrl: words.next() == Some("ctrl"),
                }
            }
            "select" => {
                let role: ListRole = words.next().ok_or(CommandError::Missing("role"))?.parse()?;
                let names = words
                    .next()
                    .map(|list| {
                        list.split(',')
                            .filter(|name| !name.is_empty())
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                Command::Select { role, names }
            }
            "filter" => {
                let role: ListRole = words.next().ok_or(CommandError::Missing("role"))?.parse()?;
                Command::Filter {
                    role,
                    query: words.collect::<Vec<_>>().join(" "),
                }
            }
            "reorder" => {
                let role: ListRole = words.next().ok_or(CommandError::Missing("role"))?.parse()?;
                let direction: ReorderDirection = words
                    .next()
                    .ok_or(CommandError::Missing("direction"))?
                    .parse()?;
                Command::Reorder { role, direction }
            }
            "move" => Command::Move {
                direction: words
                    .next()
                    .ok_or(CommandError::Missing("direction"))?
                    .to_string(),
            },
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_click_with_ctrl() {
        assert_eq!(
            Command::parse("click source Audi ctrl").unwrap(),
            Command::Click {
                role: ListRole::Source,
                name: "Audi".to_string(),
                ctrl: true,
            }
        );
    }

    #[test]
    fn test_parse_filter_keeps_spaces() {
        assert_eq!(
            Command::parse("filter target blue band").unwrap(),
            Command::Filter {
                role: ListRole::Target,
                query: "blue band".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_select_without_names_clears() {
        assert_eq!(
            Command::parse("select source").unwrap(),
            Command::Select {
                role: ListRole::Source,
                names: vec![],
            }
        );
    }

    #[test]
    fn test_bad_role() {
        assert!(matches!(
            Command::parse("filter left x"),
            Err(CommandError::Parse(PickListError::UnknownRole(_)))
        ));
    }
}
