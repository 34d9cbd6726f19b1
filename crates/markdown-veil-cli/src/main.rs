use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use markdown_veil_config::Config;
use markdown_veil_engine::{
    DecorationKind, LinkEntry, LinkNavigator, LinkRegistry, Options, Position, Range, Recomputed,
    Snapshot, TextIndex, recompute,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{env, io::stdout, path::Path, process};

/// Link-navigation collaborator for the status line: counts republications
/// and remembers the first target as a navigation preview.
#[derive(Default)]
struct StatusLinks {
    first_target: Option<String>,
    notifications: usize,
}

impl LinkNavigator for StatusLinks {
    fn set_links(&mut self, entries: &[LinkEntry]) {
        self.first_target = entries.first().map(|e| e.target.clone());
    }

    fn links_changed(&mut self) {
        self.notifications += 1;
    }
}

struct App {
    title: String,
    text: String,
    language_id: String,
    options: Options,
    cursor_line: u32,
    decorate: bool,
    result: Recomputed,
    registry: LinkRegistry,
    links: StatusLinks,
}

impl App {
    fn new(path: &Path, options: Options) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let language_id = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_string();
        let mut app = Self {
            title: path.display().to_string(),
            text,
            language_id,
            options,
            cursor_line: 0,
            decorate: true,
            result: Recomputed::default(),
            registry: LinkRegistry::new(),
            links: StatusLinks::default(),
        };
        app.recompute_now();
        Ok(app)
    }

    fn line_count(&self) -> u32 {
        self.text.split('\n').count() as u32
    }

    /// Full pipeline pass with the cursor line as the current selection.
    fn recompute_now(&mut self) {
        let snapshot = Snapshot {
            text: &self.text,
            language_id: &self.language_id,
        };
        let cursor = Position {
            line: self.cursor_line,
            column: 0,
        };
        let selections = [Range::new(cursor, cursor)];
        self.result = recompute(&snapshot, &selections, &self.options);
        self.registry
            .publish(self.result.links.clone(), &mut self.links);
    }

    fn move_cursor(&mut self, delta: i64) {
        let max = i64::from(self.line_count().saturating_sub(1));
        let line = (i64::from(self.cursor_line) + delta).clamp(0, max);
        if line as u32 != self.cursor_line {
            self.cursor_line = line as u32;
            self.recompute_now();
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <markdown-file>", args[0]);
        process::exit(1);
    }

    let options = match Config::load_options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let mut app = match App::new(Path::new(&args[1]), options) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: Failed to open '{}': {e}", args[1]);
            process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
                KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
                KeyCode::Char('r') => app.decorate = !app.decorate,
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let width = chunks[0].width.saturating_sub(2);
    let lines = if app.decorate {
        decorated_lines(&app.text, &app.result, app.cursor_line, width)
    } else {
        raw_lines(&app.text, app.cursor_line)
    };

    let visible = chunks[0].height.saturating_sub(2);
    let scroll = scroll_offset(app.cursor_line, visible);

    let content = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.title.clone()),
        )
        .scroll((scroll, 0));
    f.render_widget(content, chunks[0]);

    let mode = if app.decorate { "decorated" } else { "raw" };
    let first = match &app.links.first_target {
        Some(target) => format!(" | {target}"),
        None => String::new(),
    };
    let status = Line::from(vec![
        Span::raw("q: Quit | j/k: Move cursor | r: Toggle raw | "),
        Span::raw(format!(
            "{mode} | {} links ({} updates){first}",
            app.registry.last_published().len(),
            app.links.notifications
        )),
    ]);
    f.render_widget(Paragraph::new(vec![status]), chunks[1]);
}

/// Keeps the cursor line on screen; documents past `u16::MAX` lines pin to
/// the deepest scroll ratatui can express rather than wrapping around.
fn scroll_offset(cursor_line: u32, visible: u16) -> u16 {
    let offset = cursor_line.saturating_sub(u32::from(visible.saturating_sub(1)));
    u16::try_from(offset).unwrap_or(u16::MAX)
}

fn cursor_style() -> Style {
    Style::default().bg(Color::DarkGray)
}

fn raw_lines(text: &str, cursor_line: u32) -> Vec<Line<'static>> {
    text.split('\n')
        .enumerate()
        .map(|(i, raw)| {
            let style = if i as u32 == cursor_line {
                cursor_style()
            } else {
                Style::default()
            };
            Line::from(Span::styled(raw.to_string(), style))
        })
        .collect()
}

/// Terminal rendition of the decoration kinds: hide omits the text, headings
/// and links restyle it, horizontal rules become a drawn divider.
fn style_for(kinds: &[DecorationKind]) -> Style {
    let mut style = Style::default();
    for kind in kinds {
        style = match kind {
            DecorationKind::DefaultColor => style.fg(Color::White),
            DecorationKind::HeadingXxl => style.fg(Color::Magenta).add_modifier(Modifier::BOLD),
            DecorationKind::HeadingXl => style.fg(Color::Blue).add_modifier(Modifier::BOLD),
            DecorationKind::HeadingL => style.fg(Color::Cyan).add_modifier(Modifier::BOLD),
            DecorationKind::UriStyle => style.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            _ => style,
        };
    }
    style
}

fn decorated_lines(
    text: &str,
    result: &Recomputed,
    cursor_line: u32,
    width: u16,
) -> Vec<Line<'static>> {
    let index = TextIndex::new(text);

    // Decoration ranges back in byte coordinates for slicing.
    let mut effects: Vec<(usize, usize, DecorationKind)> = Vec::new();
    for kind in DecorationKind::ALL {
        for range in result.decorations.ranges(kind) {
            effects.push((index.byte_of(range.start), index.byte_of(range.end), kind));
        }
    }

    let mut lines = Vec::new();
    let mut offset = 0;
    for (i, raw) in text.split('\n').enumerate() {
        let line_start = offset;
        let line_end = offset + raw.len();
        offset = line_end + 1;

        if i as u32 == cursor_line {
            // The engine already suppressed decorations here; show the raw
            // markdown with a cursor highlight.
            lines.push(Line::from(Span::styled(raw.to_string(), cursor_style())));
            continue;
        }

        let is_rule = effects.iter().any(|&(s, e, kind)| {
            kind == DecorationKind::HorizontalLine && s < line_end && line_start < e
        });
        if is_rule {
            lines.push(Line::from(Span::styled(
                "─".repeat(usize::from(width)),
                Style::default().fg(Color::DarkGray),
            )));
            continue;
        }

        let mut cuts = vec![line_start, line_end];
        for &(s, e, _) in &effects {
            for point in [s, e] {
                if point > line_start && point < line_end {
                    cuts.push(point);
                }
            }
        }
        cuts.sort_unstable();
        cuts.dedup();

        let mut spans: Vec<Span<'static>> = Vec::new();
        for window in cuts.windows(2) {
            let (a, b) = (window[0], window[1]);
            let covering: Vec<DecorationKind> = effects
                .iter()
                .filter(|&&(s, e, _)| s <= a && b <= e)
                .map(|&(_, _, kind)| kind)
                .collect();
            if !covering.contains(&DecorationKind::Hide) {
                spans.push(Span::styled(text[a..b].to_string(), style_for(&covering)));
            }
            // Synthetic space injected after a link-text range.
            let inject = effects
                .iter()
                .any(|&(_, e, kind)| kind == DecorationKind::SpaceAfter && e == b);
            if inject {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn app_for(text: &str) -> App {
        let mut app = App {
            title: "demo.md".to_string(),
            text: text.to_string(),
            language_id: "md".to_string(),
            options: Options::default(),
            cursor_line: 0,
            decorate: true,
            result: Recomputed::default(),
            registry: LinkRegistry::new(),
            links: StatusLinks::default(),
        };
        app.recompute_now();
        app
    }

    fn rendered_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn event_loop_accepts_the_headless_backend() {
        // The draw error of any accepted backend must convert into the loop's
        // error type; monomorphizing over TestBackend holds that bound.
        let _: fn(&mut Terminal<TestBackend>, &mut App) -> Result<()> = run_app;
    }

    #[test]
    fn status_line_reports_published_links() {
        let mut terminal = Terminal::new(TestBackend::new(100, 10)).unwrap();
        let mut app = app_for("line\n\n[text][ref]\n");
        terminal.draw(|f| ui(f, &mut app)).unwrap();

        let rendered = rendered_text(&terminal);
        assert!(rendered.contains("1 links (1 updates)"), "{rendered}");
        assert!(rendered.contains("| ref"), "{rendered}");
    }

    #[test]
    fn cursor_moves_republish_links() {
        let mut app = app_for("[text][ref]\n\nplain\n");

        // The cursor starts on the link line, so the first pass suppresses it.
        assert!(app.registry.last_published().is_empty());
        assert_eq!(app.links.notifications, 1);

        app.move_cursor(1);
        assert_eq!(app.registry.last_published().len(), 1);
        assert_eq!(app.links.first_target.as_deref(), Some("ref"));
        assert_eq!(app.links.notifications, 2);
    }

    #[test]
    fn scroll_offset_clamps_to_u16() {
        assert_eq!(scroll_offset(0, 20), 0);
        assert_eq!(scroll_offset(30, 20), 11);
        assert_eq!(scroll_offset(200_000, 20), u16::MAX);
    }
}
