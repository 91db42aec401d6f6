//! Key scripts: a compact text form of a key event sequence.
//!
//! Every character is a `KeyEvent::Char` except brace-delimited names:
//! `{bs}`, `{shift}`, `{mode}` and `{cursor}`. `{{` and `}}` are literal
//! braces.

use anyhow::{anyhow, bail, Result};
use libkorean_core::KeyEvent;

/// Parse a key script into events.
pub fn parse(script: &str) -> Result<Vec<KeyEvent>> {
    let mut events = Vec::with_capacity(script.len());
    let mut chars = script.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' if chars.peek().map(|&(_, c)| c) == Some('{') => {
                chars.next();
                events.push(KeyEvent::Char('{'));
            }
            '}' if chars.peek().map(|&(_, c)| c) == Some('}') => {
                chars.next();
                events.push(KeyEvent::Char('}'));
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => name.push(c),
                        None => bail!("unterminated key name at offset {}", pos),
                    }
                }
                events.push(named_key(&name).ok_or_else(|| anyhow!("unknown key {{{}}}", name))?);
            }
            '}' => bail!("unmatched '}}' at offset {}", pos),
            _ => events.push(KeyEvent::Char(ch)),
        }
    }

    Ok(events)
}

fn named_key(name: &str) -> Option<KeyEvent> {
    match name.to_ascii_lowercase().as_str() {
        "bs" | "backspace" => Some(KeyEvent::Backspace),
        "shift" => Some(KeyEvent::Shift),
        "mode" => Some(KeyEvent::ModeSwitch),
        "cursor" => Some(KeyEvent::CursorMoved),
        _ => None,
    }
}
