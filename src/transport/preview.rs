//! Interactive terminal preview
//!
//! Keys: `j`/`Down` scroll down, `k`/`Up` scroll up, `r` reload the file,
//! `q`/`Esc` quit.

use crate::nav::NavTree;
use crate::transport::cli::load_tree;
use crate::tui::{NavSidebar, Theme};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// What a key press asks the preview to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewAction {
    ScrollDown,
    ScrollUp,
    Reload,
    Quit,
    None,
}

pub fn action_for(code: KeyCode) -> PreviewAction {
    match code {
        KeyCode::Char('j') | KeyCode::Down => PreviewAction::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => PreviewAction::ScrollUp,
        KeyCode::Char('r') => PreviewAction::Reload,
        KeyCode::Char('q') | KeyCode::Esc => PreviewAction::Quit,
        _ => PreviewAction::None,
    }
}

/// Preview state: the loaded tree and the scroll position
pub struct PreviewState {
    path: PathBuf,
    tree: NavTree,
    scroll: u16,
}

impl PreviewState {
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::with_tree(path.to_path_buf(), load_tree(path)?))
    }

    /// Start from an already loaded tree; `path` is used for reloads
    pub fn with_tree(path: PathBuf, tree: NavTree) -> Self {
        Self {
            path,
            tree,
            scroll: 0,
        }
    }

    /// Apply an action; returns false when the preview should exit
    pub fn apply(&mut self, action: PreviewAction) -> bool {
        match action {
            PreviewAction::ScrollDown => {
                let rows = u16::try_from(self.tree.count()).unwrap_or(u16::MAX);
                if self.scroll + 1 < rows {
                    self.scroll += 1;
                }
            }
            PreviewAction::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            PreviewAction::Reload => match load_tree(&self.path) {
                Ok(tree) => {
                    tracing::debug!("Reloaded {:?}", self.path);
                    self.tree = tree;
                    self.scroll = 0;
                }
                Err(e) => tracing::warn!("Reload failed, keeping previous tree: {:#}", e),
            },
            PreviewAction::Quit => return false,
            PreviewAction::None => {}
        }
        true
    }

    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }
}

pub fn run_preview(path: &Path, theme: Theme) -> Result<()> {
    let mut state = PreviewState::load(path)?;

    if !crossterm::tty::IsTty::is_tty(&stdout()) {
        anyhow::bail!("Preview requires a real terminal (TTY).");
    }

    enable_raw_mode().context("Failed to enable terminal raw mode")?;
    let mut out = stdout();
    restore_on_err(execute!(out, EnterAlternateScreen))
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(out);
    let mut terminal =
        restore_on_err(Terminal::new(backend)).context("Failed to create terminal backend")?;

    let result = event_loop(&mut terminal, &mut state, &theme);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Leave raw mode before passing a setup failure up
fn restore_on_err<T>(result: std::io::Result<T>) -> std::io::Result<T> {
    if result.is_err() {
        disable_raw_mode().ok();
        execute!(stdout(), LeaveAlternateScreen).ok();
    }
    result
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut PreviewState,
    theme: &Theme,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            let sidebar = NavSidebar::new(state.tree(), theme).scroll(state.scroll());
            frame.render_widget(sidebar, frame.area());
        })?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if !state.apply(action_for(key.code)) {
                    break;
                }
            }
        }
    }
    Ok(())
}
