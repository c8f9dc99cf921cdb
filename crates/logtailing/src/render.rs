//! Output rendering for accepted request-log events
//!
//! Two formats: wire-exact JSON (one colorized document per line, for
//! piping) and a human summary line plus expanded error fields. Rendering is
//! split into pure line building (`render_lines`) and printing so the output
//! contract stays testable.

use owo_colors::{OwoColorize, Style};

use crate::payload::EventPayload;

/// Placeholder shown when the server does not disclose the request path
const URL_PLACEHOLDER: &str = "[View path in dashboard]";

/// Base URL for dashboard deep links
const DASHBOARD_BASE: &str = "https://dashboard.stripe.com";

/// Output format for request logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One summary line per event plus error detail lines
    #[default]
    Human,
    /// Wire-exact payload JSON, one document per line
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" | "j" => OutputFormat::Json,
            _ => OutputFormat::Human,
        }
    }
}

/// Renders accepted events to stdout
pub struct Renderer {
    format: OutputFormat,
    use_color: bool,
}

impl Renderer {
    /// Create a new renderer
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            use_color: true, // Default on, caller sets based on TTY
        }
    }

    /// Enable or disable color output
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Print an accepted event to stdout
    pub fn print(&self, payload: &EventPayload, raw_payload: &str) {
        for line in self.render_lines(payload, raw_payload) {
            println!("{line}");
        }
    }

    /// Build the output lines for an accepted event
    ///
    /// JSON format emits the raw payload verbatim (colorization only); human
    /// format emits the summary line followed by the non-empty error fields
    /// in declaration order.
    pub fn render_lines(&self, payload: &EventPayload, raw_payload: &str) -> Vec<String> {
        match self.format {
            OutputFormat::Json => vec![colorize_json(raw_payload, self.use_color)],
            OutputFormat::Human => self.render_human(payload),
        }
    }

    fn render_human(&self, payload: &EventPayload) -> Vec<String> {
        let faint = if self.use_color {
            Style::new().dimmed()
        } else {
            Style::new()
        };

        let local_time = format_local_time(payload.created_at);
        let status = status_style(payload.status, self.use_color);

        let request_link = linkify(
            &payload.request_id,
            &dashboard_url(payload),
            self.use_color,
        );

        let url = if payload.url.is_empty() {
            URL_PLACEHOLDER
        } else {
            payload.url.as_str()
        };

        let mut lines = vec![format!(
            "{} [{}] {} {} [{}]",
            local_time.style(faint),
            payload.status.style(status),
            payload.method,
            url,
            request_link
        )];

        for (label, value) in payload.error.fields() {
            if !value.is_empty() {
                lines.push(format!("{label}: {value}"));
            }
        }

        lines
    }
}

/// Dashboard deep link for a request: `/test` prefix iff sandbox traffic
pub fn dashboard_url(payload: &EventPayload) -> String {
    let maybe_test = if payload.livemode { "" } else { "/test" };
    format!("{DASHBOARD_BASE}{maybe_test}/logs/{}", payload.request_id)
}

/// Style for an HTTP status by class
fn status_style(status: u16, enabled: bool) -> Style {
    if !enabled {
        return Style::new();
    }
    match status {
        200..=299 => Style::new().green(),
        300..=399 => Style::new().cyan(),
        400..=499 => Style::new().yellow(),
        500..=599 => Style::new().red(),
        _ => Style::new(),
    }
}

/// Format epoch seconds as local wall-clock time (`YYYY-MM-DD HH:MM:SS`)
fn format_local_time(epoch_secs: i64) -> String {
    use chrono::{Local, TimeZone};

    Local
        .timestamp_opt(epoch_secs, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| epoch_secs.to_string())
}

/// Wrap text in an OSC 8 terminal hyperlink; plain text when color is off
fn linkify(text: &str, url: &str, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    format!("\x1b]8;;{url}\x1b\\{text}\x1b]8;;\x1b\\")
}

/// Color styles for JSON tokens
struct JsonStyles {
    key: Style,
    string: Style,
    number: Style,
    literal: Style,
}

impl JsonStyles {
    fn new() -> Self {
        Self {
            key: Style::new().blue(),
            string: Style::new().green(),
            number: Style::new().cyan(),
            literal: Style::new().yellow(),
        }
    }
}

/// Colorize a raw JSON document without altering its content
///
/// Token-level ANSI styling only: every input character appears in the
/// output unchanged and in order. With color disabled the input is returned
/// verbatim, which is what keeps JSON output byte-for-byte the wire payload.
pub fn colorize_json(raw: &str, enabled: bool) -> String {
    if !enabled {
        return raw.to_string();
    }

    let styles = JsonStyles::new();
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '"' => {
                let end = scan_string(&chars, i);
                let token: String = chars[i..end].iter().collect();

                // A string directly followed by ':' is an object key.
                let mut next = end;
                while next < chars.len() && chars[next].is_whitespace() {
                    next += 1;
                }
                let style = if next < chars.len() && chars[next] == ':' {
                    styles.key
                } else {
                    styles.string
                };

                out.push_str(&token.style(style).to_string());
                i = end;
            }
            c if c.is_ascii_digit() || (c == '-' && has_digit_at(&chars, i + 1)) => {
                let end = scan_number(&chars, i);
                let token: String = chars[i..end].iter().collect();
                out.push_str(&token.style(styles.number).to_string());
                i = end;
            }
            't' | 'f' | 'n' => {
                let end = scan_word(&chars, i);
                let token: String = chars[i..end].iter().collect();
                if token == "true" || token == "false" || token == "null" {
                    out.push_str(&token.style(styles.literal).to_string());
                } else {
                    out.push_str(&token);
                }
                i = end;
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

/// End index (exclusive) of a string token starting at `start`
fn scan_string(chars: &[char], start: usize) -> usize {
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '"' => return i + 1,
            _ => i += 1,
        }
    }
    chars.len()
}

/// End index (exclusive) of a number token starting at `start`
fn scan_number(chars: &[char], start: usize) -> usize {
    let mut i = start;
    while i < chars.len()
        && matches!(chars[i], '0'..='9' | '-' | '+' | '.' | 'e' | 'E')
    {
        i += 1;
    }
    i
}

/// End index (exclusive) of an alphabetic run starting at `start`
fn scan_word(chars: &[char], start: usize) -> usize {
    let mut i = start;
    while i < chars.len() && chars[i].is_ascii_alphabetic() {
        i += 1;
    }
    i
}

fn has_digit_at(chars: &[char], i: usize) -> bool {
    i < chars.len() && chars[i].is_ascii_digit()
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
