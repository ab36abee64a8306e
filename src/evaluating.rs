use crate::error_handling::*;
use crate::parsing::*;
use crate::scanning::*;

// An operand that is not a number (an unsubstituted variable) becomes NaN and
// is rejected by the final check.
fn operand_value(token: &Token) -> f64 {
    token.content.parse().unwrap_or(f64::NAN)
}

/// Reduces a postfix token sequence to a single finite number.
pub fn evaluate(expression: &[Token]) -> Result<f64> {
    let mut slots = Vec::<f64>::new();
    for token in expression {
        match token.kind {
            TokenKind::operand => slots.push(operand_value(token)),

            _ => {
                let right = slots.pop().ok_or(CalcError::invalid_expression)?;
                let left = slots.pop().ok_or(CalcError::invalid_expression)?;
                let operator: BinaryOperator = token
                    .content
                    .parse()
                    .map_err(|_| CalcError::invalid_operator(token.content.clone()))?;
                slots.push(operator.call(left, right)?);
            },
        }
    }

    match slots.as_slice() {
        [value] if value.is_finite() => Ok(*value),
        [_] => Err(CalcError::invalid_result),
        _ => Err(CalcError::invalid_expression),
    }
}
