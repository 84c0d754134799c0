//! Markup rendering for the indicator and result areas
//!
//! Solver output uses `\n` for line breaks. Hosts want their own line-break
//! representation (`<br>` in a page, a newline in a terminal), and HTML hosts
//! need user text escaped before it reaches `innerHTML`.

use serde::{Deserialize, Serialize};

/// How text is turned into host markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Replacement for every line break
    pub line_break: String,
    /// Escape `&`, `<`, `>` and `"` first
    pub escape_html: bool,
}

impl RenderOptions {
    /// Options for an HTML page: `<br>` line breaks, escaped text
    #[must_use]
    pub fn html() -> Self {
        Self {
            line_break: "<br>".to_string(),
            escape_html: true,
        }
    }

    /// Options for plain text output
    #[must_use]
    pub fn plain() -> Self {
        Self {
            line_break: "\n".to_string(),
            escape_html: false,
        }
    }

    /// Render text with these options
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        if self.escape_html {
            translate_line_breaks(&escape_html(text), &self.line_break)
        } else {
            translate_line_breaks(text, &self.line_break)
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::html()
    }
}

/// Escape the characters HTML treats specially
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Replace `\r\n`, `\n` and `\r` with `line_break`
#[must_use]
pub fn translate_line_breaks(text: &str, line_break: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n").replace('\n', line_break)
}
