use crate::error_handling::*;
use crate::evaluating::*;
use crate::parsing::*;
use crate::scanning::*;
use crate::variables::Variables;

/// Evaluates `formula` after substituting `variables`.
///
/// Fails fast with `empty_formula` on blank input; otherwise the first failing
/// stage's error is returned unchanged.
pub fn calculate(formula: &str, variables: &Variables) -> Result<f64> {
    if formula.trim().is_empty() {
        return Err(CalcError::empty_formula);
    }

    let expression = normalize_and_substitute(formula, variables);
    tracing::debug!(%formula, %expression, "substituted variables");

    let postfix = to_postfix(&normalize(&expression))?;
    let result = evaluate(&postfix);
    tracing::debug!(?result, "evaluated");
    result
}
