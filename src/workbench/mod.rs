//! Command layer for the interactive driver
//!
//! This module maps single-character menu choices onto list operations and
//! records their outcomes, independent of any UI:
//! - [`Command`]: one variant per menu entry, with key mapping and metadata
//! - [`Workbench`]: owns the [`CursorList`] and a [`CommandLog`], executes
//!   commands, and phrases outcome lines
//! - [`CommandLog`]: append-only transcript of what each command did
//!
//! The UI collects a [`Record`] first for the commands that need one and
//! passes it in; everything else here is plain logic, so the whole driver
//! behavior is unit-testable without a terminal.

use crate::list::CursorList;
use crate::record::Record;

/// One menu entry of the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Init,
    UpdateActive,
    InsertFirst,
    ActivateFirst,
    PeekFirst,
    DeleteFirst,
    DeleteAfter,
    InsertAfter,
    PeekActive,
    Advance,
    QueryActive,
    Help,
}

impl Command {
    /// Every command in menu order
    pub const ALL: [Command; 12] = [
        Command::Init,
        Command::UpdateActive,
        Command::InsertFirst,
        Command::ActivateFirst,
        Command::PeekFirst,
        Command::DeleteFirst,
        Command::DeleteAfter,
        Command::InsertAfter,
        Command::PeekActive,
        Command::Advance,
        Command::QueryActive,
        Command::Help,
    ];

    /// Map a pressed key to a command (case-insensitive). Unknown keys map
    /// to `None`; the caller shows the menu and nothing else happens.
    pub fn from_key(key: char) -> Option<Command> {
        match key.to_ascii_uppercase() {
            '0' => Some(Command::Init),
            '1' => Some(Command::UpdateActive),
            '2' => Some(Command::InsertFirst),
            '3' => Some(Command::ActivateFirst),
            '4' => Some(Command::PeekFirst),
            '5' => Some(Command::DeleteFirst),
            '6' => Some(Command::DeleteAfter),
            '7' => Some(Command::InsertAfter),
            '8' => Some(Command::PeekActive),
            '9' => Some(Command::Advance),
            'A' => Some(Command::QueryActive),
            'M' => Some(Command::Help),
            _ => None,
        }
    }

    /// The key that triggers this command, as shown in the menu
    pub fn key(&self) -> char {
        match self {
            Command::Init => '0',
            Command::UpdateActive => '1',
            Command::InsertFirst => '2',
            Command::ActivateFirst => '3',
            Command::PeekFirst => '4',
            Command::DeleteFirst => '5',
            Command::DeleteAfter => '6',
            Command::InsertAfter => '7',
            Command::PeekActive => '8',
            Command::Advance => '9',
            Command::QueryActive => 'A',
            Command::Help => 'M',
        }
    }

    /// Whether the UI must collect a record before executing this command
    pub fn needs_record(&self) -> bool {
        matches!(
            self,
            Command::UpdateActive | Command::InsertFirst | Command::InsertAfter
        )
    }

    /// One-line description for the menu
    pub fn label(&self) -> &'static str {
        match self {
            Command::Init => "Init - reset the list to empty",
            Command::UpdateActive => "Update - overwrite the active item's record",
            Command::InsertFirst => "Insert first - insert a new item at the head",
            Command::ActivateFirst => "Activate first - point the cursor at the head",
            Command::PeekFirst => "Peek first - show the first item",
            Command::DeleteFirst => "Delete first - remove the head item",
            Command::DeleteAfter => "Delete after - remove the item after the cursor",
            Command::InsertAfter => "Insert after - insert a new item after the cursor",
            Command::PeekActive => "Peek active - show the active item",
            Command::Advance => "Advance - move the cursor to the next item",
            Command::QueryActive => "Is active - check whether the cursor is set",
            Command::Help => "Menu - print this menu",
        }
    }

    /// The usage menu, one line per command plus the quit hint
    pub fn menu_lines() -> Vec<String> {
        let mut lines = vec!["Press a key 0-9, A for one of the following:".to_string()];
        for command in Command::ALL {
            lines.push(format!("  {}: {}", command.key(), command.label()));
        }
        lines.push("  q or CTRL+D: quit".to_string());
        lines
    }
}

/// Append-only transcript of command outcomes
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    entries: Vec<String>,
}

impl CommandLog {
    pub fn new() -> Self {
        CommandLog::default()
    }

    pub fn push(&mut self, line: String) {
        self.entries.push(line);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The driver state: the list under exercise plus the outcome transcript
#[derive(Debug, Clone, Default)]
pub struct Workbench {
    list: CursorList,
    log: CommandLog,
}

impl Workbench {
    /// Create a workbench with an empty list and the menu already in the
    /// log, the way the driver greets the user
    pub fn new() -> Self {
        let mut workbench = Workbench {
            list: CursorList::new(),
            log: CommandLog::new(),
        };
        for line in Command::menu_lines() {
            workbench.log.push(line);
        }
        workbench
    }

    pub fn list(&self) -> &CursorList {
        &self.list
    }

    pub fn log(&self) -> &CommandLog {
        &self.log
    }

    /// Execute one command against the list. `record` must be provided for
    /// commands where [`Command::needs_record`] is true.
    ///
    /// Returns the outcome line, which is also appended to the log prefixed
    /// with the command's menu key.
    pub fn execute(&mut self, command: Command, record: Option<Record>) -> String {
        let outcome = match command {
            Command::Init => {
                self.list.init();
                "List reset to empty".to_string()
            }
            Command::UpdateActive => match record {
                Some(record) => match self.list.update_active(record.clone()) {
                    Ok(()) => format!("Active item updated: {}", record),
                    Err(e) => format!("Update failed: {}", e),
                },
                None => "Update aborted: no record entered".to_string(),
            },
            Command::InsertFirst => match record {
                Some(record) => {
                    self.list.insert_first(record.clone());
                    format!("Inserted at head: {}", record)
                }
                None => "Insert aborted: no record entered".to_string(),
            },
            Command::ActivateFirst => {
                self.list.activate_first();
                if self.list.is_active() {
                    "Cursor moved to the first item".to_string()
                } else {
                    "Cursor unset: list is empty".to_string()
                }
            }
            Command::PeekFirst => match self.list.peek_first() {
                Some(record) => format!("First item: {}", record),
                None => "First item: NULL".to_string(),
            },
            Command::DeleteFirst => match self.list.delete_first() {
                Ok(()) => "Deleted the first item".to_string(),
                Err(e) => format!("Delete failed: {}", e),
            },
            Command::DeleteAfter => match self.list.delete_after_active() {
                Ok(()) => "Deleted the item after the cursor".to_string(),
                Err(e) => format!("Delete after failed: {}", e),
            },
            Command::InsertAfter => match record {
                Some(record) => match self.list.insert_after_active(record.clone()) {
                    Ok(()) => format!("Inserted after cursor: {}", record),
                    Err(e) => format!("Insert after failed: {}", e),
                },
                None => "Insert aborted: no record entered".to_string(),
            },
            Command::PeekActive => match self.list.peek_active() {
                Some(record) => format!("Active item: {}", record),
                None => "Active item: NULL".to_string(),
            },
            Command::Advance => match self.list.advance() {
                Ok(()) => {
                    if self.list.is_active() {
                        "Cursor advanced".to_string()
                    } else {
                        "Cursor advanced off the tail".to_string()
                    }
                }
                Err(e) => format!("Advance failed: {}", e),
            },
            Command::QueryActive => {
                format!("Is_Active={}", self.list.is_active())
            }
            Command::Help => {
                for line in Command::menu_lines() {
                    self.log.push(line);
                }
                return "Menu printed".to_string();
            }
        };

        self.log.push(format!("[{}] {}", command.key(), outcome));
        outcome
    }

    /// Log an unknown keypress and reprint the menu so the user can recover
    pub fn unknown_key(&mut self, key: char) -> String {
        self.log.push(format!("Unknown option '{}'", key));
        for line in Command::menu_lines() {
            self.log.push(line);
        }
        format!("Unknown option '{}'", key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record::new(name, 23.0, 70.0, 150.0)
    }

    #[test]
    fn test_key_mapping_round_trips() {
        for command in Command::ALL {
            assert_eq!(Command::from_key(command.key()), Some(command));
        }
    }

    #[test]
    fn test_key_mapping_is_case_insensitive() {
        assert_eq!(Command::from_key('a'), Some(Command::QueryActive));
        assert_eq!(Command::from_key('m'), Some(Command::Help));
    }

    #[test]
    fn test_unknown_keys_map_to_none() {
        for key in ['x', 'Z', '#', ' '] {
            assert_eq!(Command::from_key(key), None);
        }
    }

    #[test]
    fn test_record_commands_are_flagged() {
        for command in Command::ALL {
            let expected = matches!(
                command,
                Command::UpdateActive | Command::InsertFirst | Command::InsertAfter
            );
            assert_eq!(command.needs_record(), expected);
        }
    }

    #[test]
    fn test_new_workbench_logs_menu() {
        let workbench = Workbench::new();
        assert_eq!(workbench.log().len(), Command::menu_lines().len());
        assert!(workbench.list().is_empty());
    }

    #[test]
    fn test_insert_first_logs_outcome() {
        let mut workbench = Workbench::new();
        let outcome = workbench.execute(Command::InsertFirst, Some(record("John")));

        assert_eq!(
            outcome,
            "Inserted at head: Name=John, age=23.0, weight=70.0, height=150.0"
        );
        assert_eq!(workbench.list().len(), 1);
        assert_eq!(
            workbench.log().entries().last().unwrap(),
            "[2] Inserted at head: Name=John, age=23.0, weight=70.0, height=150.0"
        );
    }

    #[test]
    fn test_peek_active_reports_null_when_unset() {
        let mut workbench = Workbench::new();
        workbench.execute(Command::InsertFirst, Some(record("John")));

        let outcome = workbench.execute(Command::PeekActive, None);
        assert_eq!(outcome, "Active item: NULL");
    }

    #[test]
    fn test_full_session_transcript() {
        let mut workbench = Workbench::new();

        workbench.execute(Command::InsertFirst, Some(record("John")));
        workbench.execute(Command::InsertFirst, Some(record("Catherine")));
        workbench.execute(Command::ActivateFirst, None);

        let outcome = workbench.execute(Command::PeekActive, None);
        assert!(outcome.starts_with("Active item: Name=Catherine"));

        assert_eq!(workbench.execute(Command::Advance, None), "Cursor advanced");
        assert_eq!(
            workbench.execute(Command::Advance, None),
            "Cursor advanced off the tail"
        );
        assert_eq!(
            workbench.execute(Command::Advance, None),
            "Advance failed: no active item"
        );
        assert_eq!(
            workbench.execute(Command::QueryActive, None),
            "Is_Active=false"
        );
    }

    #[test]
    fn test_precondition_failures_are_phrased() {
        let mut workbench = Workbench::new();

        assert_eq!(
            workbench.execute(Command::DeleteFirst, None),
            "Delete failed: list is empty"
        );
        assert_eq!(
            workbench.execute(Command::DeleteAfter, None),
            "Delete after failed: no active item"
        );
        assert_eq!(
            workbench.execute(Command::UpdateActive, Some(record("John"))),
            "Update failed: no active item"
        );
        assert!(workbench.list().is_empty());
    }

    #[test]
    fn test_init_resets_list_but_keeps_log() {
        let mut workbench = Workbench::new();
        workbench.execute(Command::InsertFirst, Some(record("John")));
        let log_len = workbench.log().len();

        workbench.execute(Command::Init, None);
        assert!(workbench.list().is_empty());
        assert_eq!(workbench.log().len(), log_len + 1);
    }

    #[test]
    fn test_unknown_key_reprints_menu() {
        let mut workbench = Workbench::new();
        let before = workbench.log().len();

        let outcome = workbench.unknown_key('x');
        assert_eq!(outcome, "Unknown option 'x'");
        assert_eq!(
            workbench.log().len(),
            before + 1 + Command::menu_lines().len()
        );
    }

    #[test]
    fn test_help_appends_menu() {
        let mut workbench = Workbench::new();
        let before = workbench.log().len();

        workbench.execute(Command::Help, None);
        assert_eq!(workbench.log().len(), before + Command::menu_lines().len());
    }
}
