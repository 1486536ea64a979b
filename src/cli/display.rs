// src/cli/display.rs

use derive_builder::Builder;
use itertools::Itertools;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::domain::bookmark::Bookmark;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct DisplayBookmark {
    #[builder(default = "0")]
    pub id: i32,

    #[builder(default)]
    pub url: String,

    #[builder(default)]
    pub title: String,

    #[builder(default)]
    pub description: String,

    #[builder(default)]
    pub tags: String,
}

impl DisplayBookmark {
    pub fn from_domain(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id.unwrap_or(0),
            url: bookmark.url.clone(),
            title: bookmark.title.clone(),
            description: bookmark.description.clone(),
            tags: bookmark.tags.iter().map(|t| t.value().to_string()).join(","),
        }
    }
}

/// Print bookmarks to stdout, one block per bookmark.
pub fn print_bookmarks(bookmarks: &[DisplayBookmark]) {
    for bm in bookmarks {
        println!("{}. {}", bm.id, bm.title);
        println!("   {}", bm.url);
        if !bm.description.is_empty() {
            println!("   {}", bm.description);
        }
        if !bm.tags.is_empty() {
            println!("   [{}]", bm.tags);
        }
    }
    println!("Total: {}", bookmarks.len());
}

/// Presentational error element.
///
/// Visibility is purely a function of the message: an empty message renders
/// nothing at all, a non-empty one renders the literal text. No state, no
/// side effects beyond the write it is asked to perform.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBanner {
    message: String,
}

impl ErrorBanner {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn visible(&self) -> bool {
        !self.message.is_empty()
    }

    /// The rendered text: the literal message when visible, nothing otherwise.
    pub fn render(&self) -> &str {
        if self.visible() {
            &self.message
        } else {
            ""
        }
    }

    /// Write the banner to `stderr`, red when the stream supports color.
    pub fn write(&self, stderr: &mut StandardStream) -> io::Result<()> {
        if !self.visible() {
            return Ok(());
        }

        stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        writeln!(stderr, "{}", self.message)?;
        stderr.reset()
    }
}
