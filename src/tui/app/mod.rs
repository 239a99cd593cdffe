//! Browser application state: loaded pages, expansion, selection, scroll, status line.

mod rows;

pub use rows::{Row, Target, visible_rows};

use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::core::config::Config;
use crate::core::database::Database;
use crate::core::expansion::ExpansionState;
use crate::core::format;
use crate::core::page::Page;
use crate::core::view::PageView;

/// State of one page: its data and everything the user changed while viewing it.
pub struct PageState {
    pub page: Page,
    pub database: Database,
    pub expansion: ExpansionState,
    pub selected: Option<Target>,
    /// First visible line of the body.
    pub scroll: usize,
}

impl PageState {
    pub fn new(page: Page, database: Database) -> Self {
        let expansion = ExpansionState::for_topic_count(database.len());
        let mut state = Self {
            page,
            database,
            expansion,
            selected: None,
            scroll: 0,
        };
        state.selected = state.targets().first().copied();
        state
    }

    /// Selectable targets in display order.
    pub fn targets(&self) -> Vec<Target> {
        let view = PageView::new(&self.database);
        visible_rows(&view, &self.expansion)
            .iter()
            .filter_map(Row::target)
            .collect()
    }

    /// Move the selection by `delta` targets, clamped to the first/last target.
    pub fn move_selection(&mut self, delta: isize) {
        let targets = self.targets();
        if targets.is_empty() {
            self.selected = None;
            return;
        }
        let current = self
            .selected
            .and_then(|sel| targets.iter().position(|t| *t == sel))
            .unwrap_or(0);
        let next = current
            .saturating_add_signed(delta)
            .min(targets.len() - 1);
        self.selected = Some(targets[next]);
    }

    pub fn select_first(&mut self) {
        self.selected = self.targets().first().copied();
    }

    pub fn select_last(&mut self) {
        self.selected = self.targets().last().copied();
    }

    /// URL of the selected link target.
    pub fn selected_link(&self) -> Option<&str> {
        let Some(Target::Link {
            topic,
            subtype,
            example,
        }) = self.selected
        else {
            return None;
        };
        let topic = self.database.topic(topic)?;
        let examples = match subtype {
            Some(s) => &topic.subtypes.get(s)?.examples,
            None => &topic.examples,
        };
        examples.get(example).map(|e| format::trim_blank(e))
    }

    /// Toggle the selected topic or subtype. Returns the link URL instead when a link is selected.
    pub fn activate(&mut self) -> Option<String> {
        match self.selected? {
            Target::Topic(t) => {
                self.expansion.toggle_topic(t);
                None
            }
            Target::Subtype(t, s) => {
                self.expansion.toggle_subtype(t, s);
                None
            }
            Target::Link { .. } => self.selected_link().map(str::to_string),
        }
    }

    pub fn expand_all(&mut self) {
        let counts: Vec<usize> = self.database.topics().map(|t| t.subtypes.len()).collect();
        self.expansion.expand_all(counts);
    }

    pub fn collapse_all(&mut self) {
        self.expansion.collapse_all();
        self.reselect_visible();
    }

    /// After content was hidden, move the selection to the enclosing topic if needed.
    fn reselect_visible(&mut self) {
        let targets = self.targets();
        if let Some(sel) = self.selected
            && !targets.contains(&sel)
        {
            self.selected = Some(Target::Topic(sel.topic())).filter(|t| targets.contains(t));
        }
        if self.selected.is_none() {
            self.selected = targets.first().copied();
        }
    }
}

/// Short message in the footer, cleared after a deadline.
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub until: Instant,
}

/// How long status messages stay visible.
const STATUS_DURATION: Duration = Duration::from_secs(3);

pub struct App {
    pub(crate) config: Config,
    /// Pages loaded so far; the first is the starting page.
    pub(crate) pages: Vec<PageState>,
    pub(crate) current: usize,
    pub(crate) status: Option<StatusMessage>,
    /// Body area from last draw; used for mouse hit-testing.
    pub(crate) body_area: Option<Rect>,
    /// (target, first line, last line exclusive) from last draw.
    pub(crate) target_lines: Vec<(Target, usize, usize)>,
    /// Total body lines from last draw.
    pub(crate) total_lines: usize,
    /// Scroll to the selection on next draw.
    pub(crate) follow_selection: bool,
    /// Data file given on the command line for the starting page.
    pub(crate) data_file: Option<PathBuf>,
}

impl App {
    pub fn new(page: Page, database: Database, data_file: Option<PathBuf>, config: Config) -> Self {
        Self {
            config,
            pages: vec![PageState::new(page, database)],
            current: 0,
            status: None,
            body_area: None,
            target_lines: Vec::new(),
            total_lines: 0,
            follow_selection: true,
            data_file,
        }
    }

    pub fn page(&self) -> &PageState {
        &self.pages[self.current]
    }

    pub fn page_mut(&mut self) -> &mut PageState {
        &mut self.pages[self.current]
    }

    /// Switch to the other page, loading it on first use. Each page keeps its own state.
    pub fn switch_page(&mut self) {
        let next = self.page().page.next();
        if let Some(idx) = self.pages.iter().position(|p| p.page == next) {
            self.current = idx;
        } else {
            // The command-line data file belongs to the starting page only.
            match next.load_database(None, &self.config) {
                Ok(database) => {
                    log::info!("Loaded {} ({} topics)", next, database.len());
                    self.pages.push(PageState::new(next, database));
                    self.current = self.pages.len() - 1;
                }
                Err(e) => {
                    log::warn!("Failed to load {}: {}", next, e);
                    self.set_error(e.to_string());
                    return;
                }
            }
        }
        self.target_lines.clear();
        self.follow_selection = true;
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
            until: Instant::now() + STATUS_DURATION,
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: true,
            until: Instant::now() + STATUS_DURATION,
        });
    }

    /// Scroll the body by `delta` lines without moving the selection.
    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.max_scroll();
        let state = self.page_mut();
        state.scroll = state.scroll.saturating_add_signed(delta).min(max);
        self.follow_selection = false;
    }

    fn max_scroll(&self) -> usize {
        let height = self.body_area.map(|r| r.height as usize).unwrap_or(0);
        self.total_lines.saturating_sub(height)
    }

    /// Target drawn at body line `line` (absolute, including scroll).
    pub fn target_at_line(&self, line: usize) -> Option<Target> {
        self.target_lines
            .iter()
            .find(|(_, start, end)| (*start..*end).contains(&line))
            .map(|(t, _, _)| *t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "1": {"type": "first", "examples": ["https://a.com/x "],
              "subtypes": [{"type": "sub", "examples": ["https://b.com/y"]}]},
        "2": {"type": "second"}
    }"#;

    fn state() -> PageState {
        PageState::new(Page::Titles, Database::from_json(JSON).expect("valid"))
    }

    #[test]
    fn starts_on_first_topic() {
        let state = state();
        assert_eq!(state.selected, Some(Target::Topic(0)));
        assert!(state.expansion.is_topic_expanded(0));
    }

    #[test]
    fn move_selection_clamps() {
        let mut state = state();
        state.move_selection(-1);
        assert_eq!(state.selected, Some(Target::Topic(0)));
        state.move_selection(100);
        assert_eq!(state.selected, Some(Target::Topic(1)));
        state.move_selection(-1);
        assert_eq!(state.selected, Some(Target::Subtype(0, 0)));
    }

    #[test]
    fn activate_toggles_and_returns_links() {
        let mut state = state();
        state.move_selection(1);
        assert_eq!(state.activate().as_deref(), Some("https://a.com/x"));

        state.move_selection(1);
        assert_eq!(state.activate(), None);
        assert!(state.expansion.is_subtype_expanded(0, 0));
        state.move_selection(1);
        assert_eq!(state.activate().as_deref(), Some("https://b.com/y"));
    }

    #[test]
    fn collapse_all_moves_selection_to_topic() {
        let mut state = state();
        state.move_selection(2);
        assert_eq!(state.selected, Some(Target::Subtype(0, 0)));
        state.collapse_all();
        assert_eq!(state.selected, Some(Target::Topic(0)));
        assert!(!state.expansion.is_topic_expanded(0));
    }

    #[test]
    fn expand_all_opens_subtypes() {
        let mut state = state();
        state.expand_all();
        assert!(state.expansion.is_topic_expanded(1));
        assert!(state.expansion.is_subtype_expanded(0, 0));
    }

    #[test]
    fn switch_page_keeps_each_state() {
        let mut app = App::new(
            Page::Titles,
            Database::from_json(JSON).expect("valid"),
            None,
            Config::default(),
        );
        app.page_mut().expansion.toggle_topic(1);
        app.switch_page();
        assert_eq!(app.page().page, Page::Tricks);
        app.switch_page();
        assert_eq!(app.page().page, Page::Titles);
        assert!(app.page().expansion.is_topic_expanded(1));
        assert_eq!(app.pages.len(), 2);
    }

    #[test]
    fn target_at_line_uses_last_draw() {
        let mut app = App::new(Page::Titles, Database::default(), None, Config::default());
        app.target_lines = vec![(Target::Topic(0), 0, 2), (Target::Topic(1), 5, 6)];
        assert_eq!(app.target_at_line(1), Some(Target::Topic(0)));
        assert_eq!(app.target_at_line(3), None);
        assert_eq!(app.target_at_line(5), Some(Target::Topic(1)));
    }
}
