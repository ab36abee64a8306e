use crate::variables::Variables;

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    operand, operator, punctuation
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub content: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(content: impl Into<String>, kind: TokenKind) -> Self {
        Self{content: content.into(), kind}
    }

    pub fn operand(content: impl Into<String>) -> Self {
        Self::new(content, TokenKind::operand)
    }

    pub fn operator(content: impl Into<String>) -> Self {
        Self::new(content, TokenKind::operator)
    }

    pub fn is_left_paren(&self) -> bool {
        matches!(self.kind, TokenKind::punctuation) && self.content == "("
    }

    pub fn is_right_paren(&self) -> bool {
        matches!(self.kind, TokenKind::punctuation) && self.content == ")"
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Joins tokens with single spaces, e.g. `2 3 +`.
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(Token::to_string).collect::<Vec<_>>().join(" ")
}

fn is_operator(character: char) -> bool {
    matches!(character, '+' | '-' | '*' | '/' | '^')
}

fn is_punctuation(character: char) -> bool {
    matches!(character, '(' | ')')
}

// '.' keeps a substituted fractional value such as 2.5 in one operand
fn is_operand(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '.'
}

fn is_recognized(character: char) -> bool {
    is_operand(character) || is_operator(character) || is_punctuation(character)
}

pub struct StringScanner {
    string: String,
    index: usize,
}

impl StringScanner {
    pub fn new(string: String) -> Self {
        Self{string, index: 0}
    }

    /// Byte length of the run at the cursor matching `predicate`.
    fn count_while<P: Fn(char) -> bool>(&self, predicate: P) -> usize {
        self.view()
            .chars()
            .take_while(|&c| predicate(c))
            .map(char::len_utf8)
            .sum()
    }

    fn view(&self) -> &str {
        &self.string[self.index..]
    }

    fn get_operand(&self) -> Token {
        let count = self.count_while(is_operand);
        Token::operand(&self.string[self.index..(self.index + count)])
    }

    fn get_single(&self, kind: TokenKind) -> Token {
        Token::new(&self.string[self.index..(self.index + 1)], kind)
    }

    fn skip_unrecognized(&mut self) {
        let count = self.count_while(|c| !is_recognized(c));
        self.index += count;
    }
}

impl Iterator for StringScanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.skip_unrecognized();
        if self.view().is_empty() {
            return None;
        }
        let token = if self.view().starts_with(is_operand) {
            self.get_operand()
        } else if self.view().starts_with(is_operator) {
            self.get_single(TokenKind::operator)
        } else {
            self.get_single(TokenKind::punctuation)
        };
        self.index += token.content.len();
        Some(token)
    }
}

pub fn strip_whitespace(formula: &str) -> String {
    formula.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Splits `formula` into operand runs and single operator characters.
/// Whitespace and characters outside the alphabet are dropped.
pub fn normalize(formula: &str) -> Vec<Token> {
    StringScanner::new(strip_whitespace(formula)).collect()
}

static DIGIT_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d)([a-zA-Z])").unwrap());
static LETTER_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-zA-Z])([a-zA-Z])").unwrap());
static LETTER_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-zA-Z])\*([a-zA-Z])([a-zA-Z])").unwrap());

/// Rewrites `2x`, `xy` and `2xyz` into `2*x`, `x*y` and `2*x*y*z`.
///
/// Digit-letter boundaries are handled before letter pairs, then letter runs
/// are split until no adjacent letters remain.
pub fn insert_implicit_multiplication(formula: &str) -> String {
    let expression = DIGIT_LETTER.replace_all(formula, "$1*$2");
    let mut expression = LETTER_LETTER.replace_all(&expression, "$1*$2").into_owned();
    loop {
        let next = LETTER_RUN.replace_all(&expression, "$1*$2*$3").into_owned();
        if next == expression {
            return expression;
        }
        expression = next;
    }
}

/// Replaces every occurrence of each variable name with its value, in map
/// order. This is a plain text replacement.
pub fn substitute(expression: &str, variables: &Variables) -> String {
    let mut expression = expression.to_owned();
    for (name, value) in variables {
        expression = expression.replace(*name, &value.to_string());
    }
    expression
}

/// Keeps digits, letters, operators and parentheses of typed text.
pub fn keep_recognized(formula: &str) -> String {
    formula
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || is_operator(c) || is_punctuation(c))
        .collect()
}

/// Typed characters outside the alphabet (including '.') are dropped before
/// substitution, so only substituted values carry a decimal point.
pub fn normalize_and_substitute(formula: &str, variables: &Variables) -> String {
    let expression = insert_implicit_multiplication(&keep_recognized(formula));
    substitute(&expression, variables)
}
