//! Main TUI application state and logic

use crate::record::Record;
use crate::workbench::{Command, Workbench};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused (for scrolling)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Roster,
    Log,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Roster => FocusedPane::Log,
            FocusedPane::Log => FocusedPane::Roster,
        }
    }
}

/// The record field currently being collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Age,
    Weight,
    Height,
}

impl Field {
    fn prompt(self) -> &'static str {
        match self {
            Field::Name => "Please enter name",
            Field::Age => "Enter age",
            Field::Weight => "Enter weight",
            Field::Height => "Enter height",
        }
    }
}

/// What happened when a field was committed
enum FormStep {
    /// More fields to collect
    Continue,
    /// All four fields collected
    Complete(Record),
    /// The buffer did not parse; stay on the same field
    Invalid(String),
}

/// Field-by-field record entry for a pending command.
///
/// Collects Name → Age → Weight → Height; the name is sanitized at entry
/// (line endings cut, length bounded) so the list never sees a raw name.
pub struct InputForm {
    command: Command,
    field: Field,
    buffer: String,
    draft: Record,
}

impl InputForm {
    fn new(command: Command) -> Self {
        InputForm {
            command,
            field: Field::Name,
            buffer: String::new(),
            draft: Record::default(),
        }
    }

    pub fn title(&self) -> String {
        let name = self.command.label().split(" - ").next().unwrap_or("record");
        format!("Enter record: {}", name)
    }

    pub fn prompt(&self) -> &'static str {
        self.field.prompt()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    fn push(&mut self, c: char) {
        self.buffer.push(c);
    }

    fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Commit the buffer into the current field and move on
    fn commit_field(&mut self) -> FormStep {
        match self.field {
            Field::Name => {
                self.draft.name = Record::sanitize_name(&self.buffer);
                self.field = Field::Age;
            }
            Field::Age => match self.parse_number() {
                Ok(value) => {
                    self.draft.age = value;
                    self.field = Field::Weight;
                }
                Err(message) => return FormStep::Invalid(message),
            },
            Field::Weight => match self.parse_number() {
                Ok(value) => {
                    self.draft.weight = value;
                    self.field = Field::Height;
                }
                Err(message) => return FormStep::Invalid(message),
            },
            Field::Height => match self.parse_number() {
                Ok(value) => {
                    self.draft.height = value;
                    return FormStep::Complete(self.draft.clone());
                }
                Err(message) => return FormStep::Invalid(message),
            },
        }
        self.buffer.clear();
        FormStep::Continue
    }

    fn parse_number(&self) -> Result<f64, String> {
        self.buffer
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("'{}' is not a number", self.buffer.trim()))
    }
}

/// The main application state
pub struct App {
    /// The list under exercise plus the command transcript
    pub workbench: Workbench,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Record entry form, present while a command is collecting input
    input: Option<InputForm>,

    /// Per-pane scroll offsets
    pub roster_scroll: usize,
    pub log_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new() -> Self {
        App {
            workbench: Workbench::new(),
            focused_pane: FocusedPane::Roster,
            input: None,
            roster_scroll: 0,
            log_scroll: usize::MAX, // Stick to the bottom
            should_quit: false,
            status_message: String::from("Ready! Press M for the menu"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Layout: panes on top, optional input form, status bar at bottom
        let constraints = if self.input.is_some() {
            vec![
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ]
        } else {
            vec![Constraint::Min(0), Constraint::Length(1)]
        };
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(size);

        let pane_area = main_chunks[0];
        let (input_area, status_area) = if self.input.is_some() {
            (Some(main_chunks[1]), main_chunks[2])
        } else {
            (None, main_chunks[1])
        };

        // Two columns: roster left, log right
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        super::panes::render_roster_pane(
            frame,
            columns[0],
            self.workbench.list(),
            self.focused_pane == FocusedPane::Roster,
            &mut self.roster_scroll,
        );

        super::panes::render_log_pane(
            frame,
            columns[1],
            self.workbench.log(),
            self.focused_pane == FocusedPane::Log,
            &mut self.log_scroll,
        );

        if let (Some(form), Some(input_area)) = (&self.input, input_area) {
            super::panes::render_input_pane(frame, input_area, form);
        }

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.workbench.list(),
            self.input.is_some(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        // CTRL+D ends the session, like end-of-input in a plain console
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('d') {
            self.should_quit = true;
            return;
        }

        if self.input.is_some() {
            self.handle_input_key(key);
        } else {
            self.handle_browse_key(key);
        }
    }

    /// Keys while the record entry form is open
    fn handle_input_key(&mut self, key: KeyEvent) {
        let Some(form) = &mut self.input else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                // Abort the pending command, leave the list untouched
                let command = form.command;
                self.input = None;
                self.status_message = format!("{} aborted", command.label());
            }
            KeyCode::Backspace => {
                form.backspace();
            }
            KeyCode::Enter => match form.commit_field() {
                FormStep::Continue => {
                    self.status_message = format!("{}:", form.prompt());
                }
                FormStep::Complete(record) => {
                    let command = form.command;
                    self.input = None;
                    self.status_message = self.workbench.execute(command, Some(record));
                    self.log_scroll = usize::MAX;
                }
                FormStep::Invalid(message) => {
                    self.status_message = message;
                }
            },
            KeyCode::Char(c) => {
                form.push(c);
            }
            _ => {}
        }
    }

    /// Keys while browsing
    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Roster => {
                    self.roster_scroll = self.roster_scroll.saturating_sub(1);
                }
                FocusedPane::Log => {
                    self.log_scroll = self.log_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Roster => {
                    self.roster_scroll = self.roster_scroll.saturating_add(1);
                }
                FocusedPane::Log => {
                    self.log_scroll = self.log_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(c) => match Command::from_key(c) {
                Some(command) if command.needs_record() => {
                    self.input = Some(InputForm::new(command));
                    self.status_message = format!("{}:", Field::Name.prompt());
                }
                Some(command) => {
                    self.status_message = self.workbench.execute(command, None);
                    self.log_scroll = usize::MAX;
                }
                None => {
                    self.status_message = self.workbench.unknown_key(c);
                    self.log_scroll = usize::MAX;
                }
            },
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(form: &mut InputForm, text: &str) {
        form.buffer.clear();
        form.buffer.push_str(text);
    }

    #[test]
    fn test_form_collects_all_four_fields() {
        let mut form = InputForm::new(Command::InsertFirst);

        filled(&mut form, "John\n");
        assert!(matches!(form.commit_field(), FormStep::Continue));

        filled(&mut form, "23");
        assert!(matches!(form.commit_field(), FormStep::Continue));

        filled(&mut form, "70");
        assert!(matches!(form.commit_field(), FormStep::Continue));

        filled(&mut form, "150");
        match form.commit_field() {
            FormStep::Complete(record) => {
                assert_eq!(record, Record::new("John", 23.0, 70.0, 150.0));
            }
            _ => panic!("expected a complete record"),
        }
    }

    #[test]
    fn test_form_rejects_bad_number_and_stays_on_field() {
        let mut form = InputForm::new(Command::InsertFirst);

        filled(&mut form, "John");
        assert!(matches!(form.commit_field(), FormStep::Continue));

        filled(&mut form, "not-a-number");
        assert!(matches!(form.commit_field(), FormStep::Invalid(_)));
        assert_eq!(form.field, Field::Age);

        filled(&mut form, "23");
        assert!(matches!(form.commit_field(), FormStep::Continue));
        assert_eq!(form.field, Field::Weight);
    }

    #[test]
    fn test_form_accepts_whitespace_around_numbers() {
        let mut form = InputForm::new(Command::UpdateActive);

        filled(&mut form, "Catherine");
        form.commit_field();
        filled(&mut form, "  35.5 ");
        assert!(matches!(form.commit_field(), FormStep::Continue));
        assert_eq!(form.draft.age, 35.5);
    }
}
