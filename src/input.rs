//! Key-sequence parsing.
//!
//! A key sequence is a string where every character is one key and braced
//! names stand for buttons: `12+3{=}{sqrt}`. Single characters go through
//! the button-label mapping, so `=` and `C` also work unbraced.

use anyhow::{Result, bail};
use lazy_static::lazy_static;
use regex::Regex;

use crate::session::Key;

lazy_static! {
    /// A braced button name, or one non-whitespace character.
    static ref KEY_TOKEN: Regex = Regex::new(r"\{([^{}]*)\}|(\S)").unwrap();
}

/// Parse a key sequence into keys.
pub fn parse_keys(sequence: &str) -> Result<Vec<Key>> {
    let mut keys = Vec::new();

    for caps in KEY_TOKEN.captures_iter(sequence) {
        if let Some(name) = caps.get(1) {
            keys.push(named_key(name.as_str())?);
        } else if let Some(single) = caps.get(2) {
            let text = single.as_str();
            if text == "{" || text == "}" {
                bail!("Unbalanced brace in key sequence '{}'", sequence);
            }
            match Key::from_label(text) {
                Some(key) => keys.push(key),
                None => bail!("Unknown key '{}'", text),
            }
        }
    }

    Ok(keys)
}

fn named_key(name: &str) -> Result<Key> {
    let key = match name.to_ascii_lowercase().as_str() {
        "=" | "enter" => Key::Evaluate,
        "c" => Key::Clear,
        "ce" => Key::ClearEntry,
        "bs" | "⌫" => Key::Delete,
        "sqrt" | "√" => Key::SquareRoot,
        "log" => Key::Log,
        _ => bail!("Unknown button '{{{}}}'", name),
    };
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_characters() {
        assert_eq!(
            parse_keys("1 + 2.5").unwrap(),
            vec![
                Key::Char('1'),
                Key::Char('+'),
                Key::Char('2'),
                Key::Char('.'),
                Key::Char('5'),
            ]
        );
    }

    #[test]
    fn test_buttons() {
        assert_eq!(
            parse_keys("16{sqrt}{CE}{bs}{log}{C}{enter}").unwrap(),
            vec![
                Key::Char('1'),
                Key::Char('6'),
                Key::SquareRoot,
                Key::ClearEntry,
                Key::Delete,
                Key::Log,
                Key::Clear,
                Key::Evaluate,
            ]
        );
    }

    #[test]
    fn test_unbraced_labels() {
        assert_eq!(
            parse_keys("2=C").unwrap(),
            vec![Key::Char('2'), Key::Evaluate, Key::Clear]
        );
        assert_eq!(parse_keys("√").unwrap(), vec![Key::SquareRoot]);
    }

    #[test]
    fn test_errors() {
        assert!(parse_keys("{nope}").is_err());
        assert!(parse_keys("2{+").is_err());
        assert!(parse_keys("2}").is_err());
    }

    #[test]
    fn test_empty_sequence() {
        assert!(parse_keys("").unwrap().is_empty());
        assert!(parse_keys("   ").unwrap().is_empty());
    }
}
