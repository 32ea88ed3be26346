//! CLI transport for one-shot commands

use crate::config::Config;
use crate::nav::{self, NavError, NavTree};
use crate::render::{self, Link, PlainLink, RoutedLink};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Pick the link policy for this run
pub fn link_policy(routed: bool) -> &'static dyn Link {
    if routed {
        &RoutedLink
    } else {
        &PlainLink
    }
}

/// Resolve which sidebar file to use
pub fn resolve_sidebar(config: &Config, explicit: Option<PathBuf>) -> Result<PathBuf> {
    config
        .sidebar_path(explicit)
        .ok_or(NavError::MissingSidebar)
        .map_err(Into::into)
}

pub fn load_tree(path: &Path) -> Result<NavTree> {
    nav::load_file(path).with_context(|| format!("Failed to load sidebar {}", path.display()))
}

/// Render the sidebar as HTML to `out`
pub fn run_render(
    config: &Config,
    file: Option<PathBuf>,
    as_page: bool,
    routed: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let path = resolve_sidebar(config, file)?;
    let tree = load_tree(&path)?;
    let link = link_policy(routed || config.render.routed_links);

    let fragment = render::sidebar_html(&tree, link);
    let html = if as_page {
        render::page(&config.site.title, &fragment)
    } else {
        fragment + "\n"
    };
    out.write_all(html.as_bytes())?;
    Ok(())
}

/// Print lint findings; returns how many were found
pub fn run_check(config: &Config, file: Option<PathBuf>, out: &mut dyn Write) -> Result<usize> {
    let path = resolve_sidebar(config, file)?;
    let tree = load_tree(&path)?;
    let findings = nav::lint(&tree);

    if findings.is_empty() {
        writeln!(
            out,
            "{}: {} entries, depth {}, no issues",
            path.display(),
            tree.count(),
            tree.depth()
        )?;
    } else {
        for finding in &findings {
            writeln!(out, "{}", finding)?;
        }
        tracing::warn!("{} issue(s) in {}", findings.len(), path.display());
    }
    Ok(findings.len())
}
