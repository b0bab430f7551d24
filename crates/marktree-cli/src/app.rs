use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Scrollable view over a rendered document.
pub struct App {
    title: String,
    lines: Vec<Line<'static>>,
    scroll: usize,
    /// Rows available for content at the last draw.
    viewport: usize,
    /// Rows the content takes once wrapped to the last drawn width.
    rows: usize,
}

impl App {
    pub fn new(title: impl Into<String>, lines: Vec<Line<'static>>) -> Self {
        let rows = lines.len();
        Self {
            title: title.into(),
            lines,
            scroll: 0,
            viewport: 0,
            rows,
        }
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    fn max_scroll(&self) -> usize {
        self.rows.saturating_sub(self.viewport.max(1))
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll = (self.scroll + rows).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Applies a key press; returns `true` when the viewer should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        let page = self.viewport.max(1);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_down(page),
            KeyCode::PageUp => self.scroll_up(page),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.scroll_to_bottom(),
            _ => {}
        }
        false
    }
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    // Borders take two rows and two columns
    let area = chunks[0];
    app.viewport = usize::from(area.height.saturating_sub(2));

    let content = if app.lines.is_empty() {
        vec![Line::from("(empty document)")]
    } else {
        app.lines.clone()
    };
    let page = Paragraph::new(content).wrap(Wrap { trim: false });
    app.rows = page.line_count(area.width.saturating_sub(2));
    app.scroll = app.scroll.min(app.max_scroll());

    let offset = u16::try_from(app.scroll).unwrap_or(u16::MAX);
    let page = page
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.title.as_str()),
        )
        .scroll((offset, 0));
    f.render_widget(page, area);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Up | "),
        Span::raw("↓/j: Down | "),
        Span::raw("g/G: Top/Bottom"),
    ]);
    f.render_widget(Paragraph::new(help), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn app_with(lines: usize) -> App {
        let lines = (0..lines).map(|i| Line::from(format!("line {i}"))).collect();
        let mut app = App::new("doc", lines);
        app.viewport = 10;
        app
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn scrolling_is_clamped() {
        let mut app = app_with(25);
        app.scroll_up(3);
        assert_eq!(app.scroll(), 0);
        app.scroll_down(100);
        assert_eq!(app.scroll(), 15);
        app.scroll_to_top();
        assert_eq!(app.scroll(), 0);
    }

    #[test]
    fn short_documents_do_not_scroll() {
        let mut app = app_with(3);
        app.scroll_to_bottom();
        assert_eq!(app.scroll(), 0);
    }

    #[test]
    fn keys_drive_scrolling() {
        let mut app = app_with(25);
        assert!(!app.handle_key(press(KeyCode::Char('j'))));
        assert!(!app.handle_key(press(KeyCode::Down)));
        assert_eq!(app.scroll(), 2);
        app.handle_key(press(KeyCode::Char('k')));
        assert_eq!(app.scroll(), 1);
        app.handle_key(press(KeyCode::Char('G')));
        assert_eq!(app.scroll(), 15);
        app.handle_key(press(KeyCode::Char('g')));
        assert_eq!(app.scroll(), 0);
        assert!(app.handle_key(press(KeyCode::Char('q'))));
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_title_and_content() {
        let mut app = App::new("notes.md", vec![Line::from("Hello Markdown")]);
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        terminal.draw(|f| ui(f, &mut app)).unwrap();

        let screen = screen(&terminal);
        assert!(screen.contains("notes.md"));
        assert!(screen.contains("Hello Markdown"));
        assert!(screen.contains("q: Quit"));
        assert_eq!(app.viewport, 5);
    }

    #[test]
    fn wrapped_rows_are_reachable() {
        let mut app = App::new(
            "doc",
            vec![Line::from("word ".repeat(200)), Line::from("THE END")],
        );
        let mut terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();
        terminal.draw(|f| ui(f, &mut app)).unwrap();
        assert!(!screen(&terminal).contains("THE END"));
        assert!(app.rows > app.lines.len());

        app.handle_key(press(KeyCode::Char('G')));
        terminal.draw(|f| ui(f, &mut app)).unwrap();

        assert!(app.scroll() > 0);
        assert_eq!(app.scroll(), app.rows - app.viewport);
        assert!(screen(&terminal).contains("THE END"));
    }
}
