//! Server-side HTML rendering.
//!
//! Templates are embedded at compile time so the binary is self-contained and
//! the page renders the same no matter which directory the server starts in.

use anyhow::{Context as _, Result};
use chrono::{Datelike, Utc};
use tera::{Context, Tera};

use crate::errors::AppError;
use crate::models::profile::Profile;

const TPL_BASE: &str = include_str!("templates/base.html");
const TPL_INDEX: &str = include_str!("templates/index.html");
const TPL_NOT_FOUND: &str = include_str!("templates/not_found.html");

/// Stylesheet served at `/static/site.css`.
pub const SITE_CSS: &str = include_str!("static/site.css");

pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", TPL_BASE),
            ("index.html", TPL_INDEX),
            ("not_found.html", TPL_NOT_FOUND),
        ])
        .context("Failed to load embedded templates")?;

        Ok(Self { tera })
    }

    pub fn template_names(&self) -> Vec<&str> {
        self.tera.get_template_names().collect()
    }

    pub fn render_index(&self, profile: &Profile) -> Result<String, AppError> {
        let context = base_context(profile);
        Ok(self.tera.render("index.html", &context)?)
    }

    pub fn render_not_found(&self, profile: &Profile, path: &str) -> Result<String, AppError> {
        let mut context = base_context(profile);
        context.insert("path", path);
        Ok(self.tera.render("not_found.html", &context)?)
    }
}

fn base_context(profile: &Profile) -> Context {
    let mut context = Context::new();
    context.insert("profile", profile);
    context.insert("year", &Utc::now().year());
    context
}
