//! Dashboard view state and event handling.
//!
//! Two views toggled with Tab:
//! - Charts: summary tiles, period line, entity/function bars, donut, treemap
//! - Table: the seven-column catalogue with a filter popup
//!
//! Key bindings: q quit, Tab switch view, j/k navigate, f filter, r reload

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use folio_core::dashboard::DashboardModel;
use folio_core::filter::FilterSet;
use folio_core::record::{FieldKey, ProjectRecord};
use folio_core::store;
use ratatui::widgets::TableState;
use tracing::warn;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which top-level view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Charts,
    Table,
}

/// Current input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Filter popup is open.
    FilterPopup,
}

/// One filter control: a field, its option list, and the current selection.
///
/// `selected == 0` is the implicit "no filter" default; `selected - 1`
/// indexes into `options`.
#[derive(Debug, Clone)]
pub struct FilterControl {
    pub field: FieldKey,
    pub options: Vec<String>,
    pub selected: usize,
}

impl FilterControl {
    /// The currently selected value, or `None` for "no filter".
    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selected
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    fn cycle_next(&mut self) {
        self.selected = (self.selected + 1) % (self.options.len() + 1);
    }

    fn cycle_prev(&mut self) {
        self.selected = if self.selected == 0 {
            self.options.len()
        } else {
            self.selected - 1
        };
    }
}

/// Full state for the dashboard view.
pub struct DashboardApp {
    pub source: String,
    pub model: DashboardModel,
    pub view: View,
    pub input_mode: InputMode,
    pub controls: Vec<FilterControl>,
    pub focused_control: usize,
    /// Rows currently visible in the table, refreshed after every filter
    /// change.
    pub visible_rows: Vec<ProjectRecord>,
    pub table_state: TableState,
    pub status: Option<String>,
}

impl DashboardApp {
    /// Build the app state from a freshly loaded catalogue.
    #[must_use]
    pub fn new(records: &[ProjectRecord], source: String) -> Self {
        let model = DashboardModel::build(records);
        let controls = model
            .filter_options
            .iter()
            .map(|options| FilterControl {
                field: options.field,
                options: options.values.clone(),
                selected: 0,
            })
            .collect();
        let visible_rows = model.rows.clone();
        let mut table_state = TableState::default();
        if !visible_rows.is_empty() {
            table_state.select(Some(0));
        }

        Self {
            source,
            model,
            view: View::default(),
            input_mode: InputMode::default(),
            controls,
            focused_control: 0,
            visible_rows,
            table_state,
            status: None,
        }
    }

    /// The active filter set, rebuilt in full from the current control
    /// selections. Never diffed incrementally.
    #[must_use]
    pub fn active_filters(&self) -> FilterSet {
        FilterSet::from_selections(
            self.controls
                .iter()
                .map(|control| (control.field, control.selection())),
        )
    }

    /// Recompute the filter set and re-filter the table rows.
    fn refresh_filter(&mut self) {
        let filters = self.active_filters();
        self.visible_rows = filters.apply(&self.model.rows);
        self.table_state.select(if self.visible_rows.is_empty() {
            None
        } else {
            Some(0)
        });
    }

    fn clear_filters(&mut self) {
        for control in &mut self.controls {
            control.selected = 0;
        }
        self.refresh_filter();
    }

    fn select_next(&mut self) {
        if self.visible_rows.is_empty() {
            return;
        }
        let next = self
            .table_state
            .selected()
            .map_or(0, |i| (i + 1).min(self.visible_rows.len() - 1));
        self.table_state.select(Some(next));
    }

    fn select_prev(&mut self) {
        if self.visible_rows.is_empty() {
            return;
        }
        let prev = self.table_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.table_state.select(Some(prev));
    }

    /// Reload the catalogue from the source.
    ///
    /// A failed reload keeps the current data and surfaces the error in the
    /// status line; selections reset on success (fresh page-load semantics).
    fn reload(&mut self) {
        match store::load_records(&self.source) {
            Ok(records) => {
                let count = records.len();
                *self = Self::new(&records, std::mem::take(&mut self.source));
                self.status = Some(format!("reloaded {count} records"));
            }
            Err(err) => {
                warn!(code = err.error_code(), "reload failed: {err}");
                self.status = Some(format!("reload failed: {err}"));
            }
        }
    }

    /// Handle one key press. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.status = None;
        match self.input_mode {
            InputMode::Normal => self.handle_key_normal(key),
            InputMode::FilterPopup => {
                self.handle_key_filter(key);
                false
            }
        }
    }

    fn handle_key_normal(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab => {
                self.view = match self.view {
                    View::Charts => View::Table,
                    View::Table => View::Charts,
                };
            }
            KeyCode::Char('f') if self.view == View::Table => {
                self.input_mode = InputMode::FilterPopup;
            }
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_prev(),
            KeyCode::Char('r') => self.reload(),
            _ => {}
        }
        false
    }

    fn handle_key_filter(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.input_mode = InputMode::Normal,
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                self.focused_control = (self.focused_control + 1) % self.controls.len();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.focused_control = if self.focused_control == 0 {
                    self.controls.len() - 1
                } else {
                    self.focused_control - 1
                };
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.controls[self.focused_control].cycle_next();
                self.refresh_filter();
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.controls[self.focused_control].cycle_prev();
                self.refresh_filter();
            }
            KeyCode::Char('c') => self.clear_filters(),
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point and event loop
// ---------------------------------------------------------------------------

/// Run the dashboard over an already-loaded catalogue.
///
/// # Errors
///
/// Returns an error if the terminal cannot be driven.
pub fn run(records: &[ProjectRecord], source: String) -> Result<()> {
    let mut app = DashboardApp::new(records, source);
    let mut terminal = ratatui::try_init().context("initialize terminal")?;
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, app: &mut DashboardApp) -> Result<()> {
    loop {
        terminal
            .draw(|frame| super::render::draw(frame, app))
            .context("draw dashboard frame")?;

        if event::poll(Duration::from_millis(200)).context("poll terminal events")? {
            if let Event::Key(key) = event::read().context("read terminal event")? {
                if key.kind == KeyEventKind::Press && app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}
