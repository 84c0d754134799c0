//! Terminal page adapter
//!
//! In-memory page elements for running the controller outside a browser.
//! The input box height is measured in rows. Panes keep what was rendered
//! into them and can echo it to stdout as it changes.

use std::cell::{Cell, RefCell};

use colored::Colorize;

use crate::core::models::SUCCESS_TOKEN;
use crate::core::ports::{BoxHeight, InputField, PageError, ResultArea, ValidationIndicator};

/// Text input held in memory
#[derive(Debug, Default)]
pub struct TerminalInput {
    text: RefCell<String>,
    height: Cell<BoxHeight>,
}

impl TerminalInput {
    /// Create an input pre-populated with `text`
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(text.into()),
            height: Cell::new(BoxHeight::Auto),
        }
    }

    /// Replace the text, as typing or pasting would
    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.borrow_mut() = text.into();
    }

    /// Current text
    #[must_use]
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    /// Current box height
    #[must_use]
    pub fn height(&self) -> BoxHeight {
        self.height.get()
    }
}

impl InputField for TerminalInput {
    fn value(&self) -> Result<String, PageError> {
        Ok(self.text.borrow().clone())
    }

    fn set_height(&self, height: BoxHeight) -> Result<(), PageError> {
        self.height.set(height);
        Ok(())
    }

    fn scroll_height(&self) -> Result<u32, PageError> {
        let rows = self.text.borrow().split('\n').count();
        u32::try_from(rows).map_err(|e| PageError::Update {
            element: "input".to_string(),
            message: e.to_string(),
        })
    }
}

/// How a pane prints its content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneStyle {
    /// Status token, green when valid and red otherwise
    Status,
    /// Plain text
    Plain,
}

/// Output area that remembers its content
#[derive(Debug)]
pub struct TerminalPane {
    content: RefCell<String>,
    style: PaneStyle,
    echo: bool,
}

impl TerminalPane {
    /// Pane that only records content
    #[must_use]
    pub const fn silent(style: PaneStyle) -> Self {
        Self {
            content: RefCell::new(String::new()),
            style,
            echo: false,
        }
    }

    /// Pane that also prints every update
    #[must_use]
    pub const fn echoing(style: PaneStyle) -> Self {
        Self {
            content: RefCell::new(String::new()),
            style,
            echo: true,
        }
    }

    /// Last rendered content
    #[must_use]
    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }

    fn replace(&self, markup: &str) {
        *self.content.borrow_mut() = markup.to_string();
        if !self.echo {
            return;
        }
        match self.style {
            PaneStyle::Status if markup == SUCCESS_TOKEN => println!("{}", markup.green()),
            PaneStyle::Status => println!("{}", markup.red()),
            PaneStyle::Plain => println!("{markup}"),
        }
    }
}

impl ValidationIndicator for TerminalPane {
    fn show_status(&self, markup: &str) -> Result<(), PageError> {
        self.replace(markup);
        Ok(())
    }
}

impl ResultArea for TerminalPane {
    fn show(&self, markup: &str) -> Result<(), PageError> {
        self.replace(markup);
        Ok(())
    }
}
