//! Interactive single-field demo

use std::io;
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Style},
    text::Line,
    Frame, Terminal,
};
use tracing::info;

use crate::error::TuiResult;
use crate::input::EmailInput;

const HELP: &str = "→/Tab accept · Enter submit · Esc quit";

/// Event loop around one [`EmailInput`]
pub struct DemoApp {
    input: EmailInput,
    /// Requested field width; the field shrinks on narrower terminals
    width: u16,
    field_area: Rect,
    running: bool,
    submitted: Option<String>,
}

impl DemoApp {
    pub fn new(input: EmailInput) -> Self {
        Self {
            width: input.field().width(),
            input,
            field_area: Rect::default(),
            running: true,
            submitted: None,
        }
    }

    /// Take over the terminal until the user submits or quits.
    ///
    /// Returns the submitted value, `None` when the user quit.
    pub fn run(mut self) -> TuiResult<Option<String>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> TuiResult<Option<String>> {
        while self.running {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(50))? {
                let event = event::read()?;
                self.handle_event(event);
            }
        }

        Ok(self.submitted.take())
    }

    /// Lay out and paint the screen, remembering where the field landed
    pub fn draw(&mut self, frame: &mut Frame) {
        let [title, field, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(self.input.field().height()),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(Line::from("Email address"), title);

        let field = Rect {
            width: field.width.min(self.width),
            ..field
        };

        self.input.resize(field.width);
        self.field_area = field;
        frame.render_widget(self.input.widget(), field);
        frame.set_cursor_position(Position::new(
            field.x + self.input.cursor_column().min(field.width.saturating_sub(1)),
            field.y + self.input.field().padding(),
        ));

        frame.render_widget(
            Line::styled(HELP, Style::default().fg(Color::DarkGray)),
            help,
        );
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::FocusLost => {
                self.input.handle_focus_lost();
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false
            }
            KeyCode::Enter => {
                self.input.handle_key(key);
                let value = self.input.value().to_string();
                info!(value = %value, "Submitted email address");
                self.submitted = Some(value);
                self.running = false;
            }
            _ => {
                self.input.handle_key(key);
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if self.field_area.contains(Position::new(mouse.column, mouse.row)) {
            self.input.handle_click(mouse.column - self.field_area.x);
        }
    }

    pub fn input(&self) -> &EmailInput {
        &self.input
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn submitted(&self) -> Option<&str> {
        self.submitted.as_deref()
    }
}
