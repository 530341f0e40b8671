//! Line template rendering
//!
//! Rendering follows Python `str.format` conventions: `{name}` substitutes a
//! named placeholder, `{{` and `}}` escape literal braces. The three
//! recognized placeholders are `{datetime_string}`, `{level_string}` and
//! `{message}`. Templates are never validated at construction time; a
//! malformed template surfaces here, on the first write.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

/// Default message template: `[<timestamp>] [<LEVELNAME>] <message>`
pub const DEFAULT_TEMPLATE: &str = "[{datetime_string}] [{level_string}] {message}";

/// Default strftime timestamp format
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a message template, substituting the three named placeholders.
pub fn render(
    template: &str,
    datetime_string: &str,
    level_string: &str,
    message: &str,
) -> Result<String> {
    let mut out = String::with_capacity(template.len() + message.len() + 32);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if !closed {
                    return Err(LoggerError::template(template, "unclosed placeholder"));
                }
                match name.as_str() {
                    "datetime_string" => out.push_str(datetime_string),
                    "level_string" => out.push_str(level_string),
                    "message" => out.push_str(message),
                    other => {
                        return Err(LoggerError::template(
                            template,
                            format!("unknown placeholder '{}'", other),
                        ))
                    }
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(LoggerError::template(template, "unmatched '}'"));
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

/// Format a timestamp with a strftime format string.
///
/// An invalid format specifier is reported as a [`LoggerError::Timestamp`]
/// rather than the panic chrono's `format()` would produce on display.
pub fn format_timestamp(format: &str, datetime: &DateTime<Local>) -> Result<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.contains(&Item::Error) {
        return Err(LoggerError::timestamp(format));
    }
    Ok(datetime.format_with_items(items.into_iter()).to_string())
}
