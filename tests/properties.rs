#![allow(nonstandard_style)]

use formula_calc::scanning::render;
use formula_calc::{calculate, evaluate, normalize, to_postfix, CalcError, Variables};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Expr {
    literal(u32),
    binary(Box<Expr>, char, Box<Expr>),
}

impl Expr {
    fn source(&self) -> String {
        match self {
            Expr::literal(value) => value.to_string(),
            Expr::binary(left, operator, right) => {
                format!("({} {} {})", left.source(), operator, right.source())
            },
        }
    }

    /// `None` when some division has a zero divisor.
    fn value(&self) -> Option<f64> {
        match self {
            Expr::literal(value) => Some(f64::from(*value)),
            Expr::binary(left, operator, right) => {
                let (left, right) = (left.value()?, right.value()?);
                match operator {
                    '+' => Some(left + right),
                    '-' => Some(left - right),
                    '*' => Some(left * right),
                    _ if right == 0.0 => None,
                    _ => Some(left / right),
                }
            },
        }
    }
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    let leaf = (0u32..100).prop_map(Expr::literal);
    leaf.prop_recursive(4, 32, 2, |inner| {
        (inner.clone(), prop::sample::select(vec!['+', '-', '*', '/']), inner)
            .prop_map(|(left, operator, right)| Expr::binary(Box::new(left), operator, Box::new(right)))
    })
}

/// Operands joined by operators without parentheses, e.g. `3 + 4 * 2 - 8 / 5`.
#[derive(Debug, Clone)]
struct Chain {
    first: u32,
    rest: Vec<(char, u32)>,
}

impl Chain {
    fn source(&self) -> String {
        let mut source = self.first.to_string();
        for (operator, operand) in &self.rest {
            source.push_str(&format!(" {operator} {operand}"));
        }
        source
    }

    /// Folds `*` and `/` into terms first, then `+` and `-` left to right.
    /// `None` when some divisor is zero.
    fn value(&self) -> Option<f64> {
        let mut terms = vec![f64::from(self.first)];
        let mut additive = Vec::new();
        for (operator, operand) in &self.rest {
            let operand = f64::from(*operand);
            match operator {
                '*' => *terms.last_mut()? *= operand,
                '/' if operand == 0.0 => return None,
                '/' => *terms.last_mut()? /= operand,
                _ => {
                    additive.push(*operator);
                    terms.push(operand);
                },
            }
        }

        let mut total = terms[0];
        for (operator, term) in additive.iter().zip(&terms[1..]) {
            match operator {
                '+' => total += term,
                _ => total -= term,
            }
        }
        Some(total)
    }
}

fn chain_strategy() -> impl Strategy<Value = Chain> {
    let arithmetic = prop::sample::select(vec!['+', '-', '*', '/']);
    (0u32..100, prop::collection::vec((arithmetic, 0u32..20), 0..8))
        .prop_map(|(first, rest)| Chain{first, rest})
}

fn operator_strategy() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['+', '-', '*', '/', '^'])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn matches_native_evaluation(expr in expr_strategy()) {
        let result = calculate(&expr.source(), &Variables::new());
        match expr.value() {
            Some(expected) => prop_assert_eq!(result, Ok(expected)),
            None => prop_assert_eq!(result, Err(CalcError::division_by_zero)),
        }
    }

    #[test]
    fn chains_respect_precedence(chain in chain_strategy()) {
        let result = calculate(&chain.source(), &Variables::new());
        match chain.value() {
            Some(expected) => prop_assert_eq!(result, Ok(expected)),
            None => prop_assert_eq!(result, Err(CalcError::division_by_zero)),
        }
    }

    #[test]
    fn conversion_is_deterministic(
        operands in prop::collection::vec(0u32..50, 1..8),
        operators in prop::collection::vec(operator_strategy(), 7),
    ) {
        let mut formula = operands[0].to_string();
        for (operand, operator) in operands[1..].iter().zip(&operators) {
            formula.push(*operator);
            formula.push_str(&operand.to_string());
        }
        let tokens = normalize(&formula);
        let first = to_postfix(&tokens).unwrap();
        prop_assert_eq!(render(&first), render(&to_postfix(&tokens).unwrap()));
        prop_assert!(first.iter().all(|token| token.content != "(" && token.content != ")"));
        prop_assert_eq!(first.len(), tokens.len());
    }

    #[test]
    fn division_by_zero_is_never_a_number(numerator in 0u32..1000, prefix in 0u32..10) {
        let formula = format!("{prefix} + {numerator} / ({prefix} - {prefix})");
        let result = calculate(&formula, &Variables::new());
        prop_assert_eq!(result, Err(CalcError::division_by_zero));
    }

    #[test]
    fn implicit_multiplication_with_literals(factor in 0u32..100, value in 0u32..100) {
        let variables = Variables::from([('v', f64::from(value))]);
        let implicit = calculate(&format!("{factor}v"), &variables);
        prop_assert_eq!(implicit.clone(), calculate(&format!("{factor}*v"), &variables));
        prop_assert_eq!(implicit, Ok(f64::from(factor) * f64::from(value)));
    }
}

#[test]
fn chain_reference_follows_precedence() {
    let chain = Chain{first: 2, rest: vec![('+', 3), ('*', 4), ('-', 5)]};
    assert_eq!(chain.value(), Some(9.0));
    assert_eq!(calculate(&chain.source(), &Variables::new()), Ok(9.0));
}

#[test]
fn evaluate_after_conversion() {
    let postfix = to_postfix(&normalize("2 * (3 + 4) - (5-1) * 4")).unwrap();
    assert_eq!(render(&postfix), "2 3 4 + * 5 1 - 4 * -");
    assert_eq!(evaluate(&postfix), Ok(-2.0));
}
