use crate::error_handling::*;

use indexmap::IndexMap;

/// Variable values keyed by their single-letter name, in substitution order.
pub type Variables = IndexMap<char, f64>;

pub fn is_allowed(character: char) -> bool {
    character.is_ascii_alphanumeric()
        || character.is_whitespace()
        || matches!(character, '+' | '-' | '*' | '^' | '/' | '(' | ')')
}

/// Rejects formula text containing characters outside the calculator alphabet.
pub fn check_input(input: &str) -> Result<()> {
    match input.chars().find(|&c| !is_allowed(c)) {
        Some(character) => Err(CalcError::invalid_character(character)),
        None => Ok(()),
    }
}

/// Letters of `formula` in order of first appearance. Names already in
/// `previous` keep their value, new ones start at zero.
pub fn detect_variables(formula: &str, previous: &Variables) -> Variables {
    let mut detected = Variables::new();
    for name in formula.chars().filter(char::is_ascii_alphabetic) {
        detected
            .entry(name)
            .or_insert_with(|| previous.get(&name).copied().unwrap_or(0.0));
    }
    detected
}

/// Parses `name=value`, e.g. `a = 5`. Values must be finite and not
/// negative, since a substituted negative number reads as unary minus.
pub fn parse_assignment(text: &str) -> Result<(char, f64)> {
    let invalid = || CalcError::invalid_assignment(text.to_owned());
    let (name, value) = text.split_once('=').ok_or_else(invalid)?;

    let mut name_chars = name.trim().chars();
    let name = match (name_chars.next(), name_chars.next()) {
        (Some(name), None) if name.is_ascii_alphabetic() => name,
        _ => return Err(invalid()),
    };
    let value: f64 = value.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok((name, value))
}

/// Range and granularity of a variable's value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slider {
    min: f64,
    max: f64,
    step: f64,
}

impl Default for Slider {
    fn default() -> Self {
        Self{min: 0.0, max: 100.0, step: 1.0}
    }
}

impl Slider {
    /// Bounds must be finite with `0 <= min <= max`; a zero step snaps
    /// nothing.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        let invalid = |reason: &str| Err(CalcError::invalid_slider(reason.to_owned()));
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return invalid("bounds and step must be finite");
        }
        if min < 0.0 {
            return invalid("minimum must not be negative");
        }
        if min > max {
            return invalid("minimum must not exceed maximum");
        }
        if step < 0.0 {
            return invalid("step must not be negative");
        }
        Ok(Self{min, max, step})
    }

    /// Clamps `value` into range and rounds it to the nearest step above `min`.
    pub fn snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let value = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return value;
        }
        let steps = ((value - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    pub fn snap_all(&self, variables: impl IntoIterator<Item = (char, f64)>) -> Variables {
        variables
            .into_iter()
            .map(|(name, value)| (name, self.snap(value)))
            .collect()
    }
}
