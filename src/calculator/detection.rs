//! Tokenizer and auto-evaluation detection.
//!
//! Splits the display buffer into numeric runs and operators, and decides
//! whether the buffer holds a completed left-hand sub-expression that should
//! be reduced before typing continues.

/// One of the four binary operators the calculator understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Map a character to an operator, if it is one.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// The character this operator is typed as.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

/// Check if a character is one of `+ - * /`.
pub fn is_operator(c: char) -> bool {
    Operator::from_char(c).is_some()
}

/// A piece of the display buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Everything between two operators (or a boundary).
    Number(&'a str),
    Operator(Operator),
}

impl Token<'_> {
    /// True for a run made only of digits and decimal points, with at least
    /// one digit. Marker text such as `Error` is a `Number` token but never
    /// numeric.
    fn is_numeric(&self) -> bool {
        match self {
            Token::Number(run) => {
                run.chars().any(|c| c.is_ascii_digit())
                    && run.chars().all(|c| c.is_ascii_digit() || c == '.')
            }
            Token::Operator(_) => false,
        }
    }
}

/// Split a buffer into numeric runs and operators.
///
/// Runs are never empty: two adjacent operators produce two adjacent
/// `Operator` tokens.
pub fn tokenize(buffer: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut run_start = 0;

    for (i, c) in buffer.char_indices() {
        if let Some(op) = Operator::from_char(c) {
            if run_start < i {
                tokens.push(Token::Number(&buffer[run_start..i]));
            }
            tokens.push(Token::Operator(op));
            run_start = i + c.len_utf8();
        }
    }

    if run_start < buffer.len() {
        tokens.push(Token::Number(&buffer[run_start..]));
    }

    tokens
}

/// The numeric run currently being typed: everything after the last operator.
pub fn current_run(buffer: &str) -> &str {
    match buffer.rfind(is_operator) {
        Some(pos) => &buffer[pos + 1..],
        None => buffer,
    }
}

/// Check if the buffer holds a completed sub-expression ready to reduce.
///
/// Returns `true` when the tokens contain the window
/// `Number Operator Number Operator` starting at an anchoring number.
/// A number anchors unless it directly follows `Number Operator`, which
/// would make it the right operand of an earlier pair rather than a left
/// operand. This keeps an already reduced prefix from matching again.
pub fn should_reduce(buffer: &str) -> bool {
    let tokens = tokenize(buffer);

    tokens.windows(4).enumerate().any(|(start, window)| {
        let complete = window[0].is_numeric()
            && matches!(window[1], Token::Operator(_))
            && window[2].is_numeric()
            && matches!(window[3], Token::Operator(_));

        complete && anchors(&tokens, start)
    })
}

fn anchors(tokens: &[Token<'_>], index: usize) -> bool {
    if index < 2 {
        return true;
    }
    !(tokens[index - 2].is_numeric() && matches!(tokens[index - 1], Token::Operator(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_runs_and_operators() {
        assert_eq!(
            tokenize("12.5*3-"),
            vec![
                Token::Number("12.5"),
                Token::Operator(Operator::Multiply),
                Token::Number("3"),
                Token::Operator(Operator::Subtract),
            ]
        );
        assert_eq!(
            tokenize("-4"),
            vec![Token::Operator(Operator::Subtract), Token::Number("4")]
        );
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_current_run() {
        assert_eq!(current_run("2+3.5"), "3.5");
        assert_eq!(current_run("2.5"), "2.5");
        assert_eq!(current_run("2+"), "");
        assert_eq!(current_run(""), "");
    }

    #[test]
    fn test_second_operator_triggers() {
        assert!(should_reduce("2+3+"));
        assert!(should_reduce("10*4-"));
        assert!(should_reduce("2.5/0.5*"));
        assert!(should_reduce("-3+2+"));
    }

    #[test]
    fn test_incomplete_expressions_do_not_trigger() {
        assert!(!should_reduce(""));
        assert!(!should_reduce("2"));
        assert!(!should_reduce("2+"));
        assert!(!should_reduce("2+3"));
        assert!(!should_reduce("-+3+"));
    }

    #[test]
    fn test_anchor_on_first_operand() {
        assert!(should_reduce("2*4+1-"));
        // marker text is not numeric, so "3" is a fresh left operand
        assert!(should_reduce("Error+3+4+"));
        assert!(!anchors(&tokenize("1+2+3+"), 2));
        assert!(anchors(&tokenize("1+2+3+"), 0));
    }

    #[test]
    fn test_marker_text_never_triggers_alone() {
        assert!(!should_reduce("Error+"));
        assert!(!should_reduce("Invalid Input*"));
    }
}
