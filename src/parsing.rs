use crate::error_handling::*;
use crate::scanning::*;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    addition,
    subtraction,
    multiplication,
    division,
    exponentiation,
}

impl BinaryOperator {
    pub fn call(&self, left: f64, right: f64) -> Result<f64> {
        use BinaryOperator::*;

        match self {
            addition => Ok(left + right),
            subtraction => Ok(left - right),
            multiplication => Ok(left * right),
            division if right == 0.0 => Err(CalcError::division_by_zero),
            division => Ok(left / right),
            exponentiation => Ok(left.powf(right)),
        }
    }

    pub fn precedence(&self) -> u8 {
        use BinaryOperator::*;
        match self {
            addition | subtraction => 1,
            multiplication | division => 2,
            exponentiation => 3,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidOperator;

impl FromStr for BinaryOperator {
    type Err = InvalidOperator;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        use BinaryOperator::*;
        match s {
            "+" => Ok(addition),
            "-" => Ok(subtraction),
            "*" => Ok(multiplication),
            "/" => Ok(division),
            "^" => Ok(exponentiation),
            _ => Err(InvalidOperator),
        }
    }
}

// Parentheses and unknown operators have no precedence and never compare
// as higher or lower than anything.
fn precedence(token: &Token) -> Option<u8> {
    token.content.parse::<BinaryOperator>().ok().map(|operator| operator.precedence())
}

pub struct Yard {
    expression: Vec<Token>,
    stack: Vec<Token>,
}

impl Yard {
    pub fn new() -> Self {
        Self{expression: Vec::new(), stack: Vec::new()}
    }

    fn add_operand(&mut self, token: Token) {
        self.expression.push(token);
    }

    // Equal precedence pops, so every operator (including '^') is
    // left-associative.
    fn pop_higher_operator(&mut self, precedence_of_incoming: Option<u8>) -> Option<Token> {
        let top = self.stack.last()?;
        if top.is_left_paren() {
            return None;
        }
        match (precedence_of_incoming, precedence(top)) {
            (Some(incoming), Some(top)) if top >= incoming => self.stack.pop(),
            _ => None,
        }
    }

    fn add_operator(&mut self, token: Token) {
        let incoming = precedence(&token);
        let outranks_top = match self.stack.last() {
            None => true,
            Some(top) => matches!((incoming, precedence(top)), (Some(i), Some(t)) if i > t),
        };

        if !outranks_top {
            while let Some(operator) = self.pop_higher_operator(incoming) {
                self.expression.push(operator);
            }
        }
        self.stack.push(token);
    }

    fn add_right_paren(&mut self) -> Result<()> {
        while let Some(stack_node) = self.stack.pop() {
            if stack_node.is_left_paren() {
                return Ok(());
            }
            self.expression.push(stack_node);
        }
        Err(CalcError::malformed_expression)
    }

    pub fn add(&mut self, token: Token) -> Result<()> {
        match token.kind {
            TokenKind::operand => self.add_operand(token),
            _ if token.is_right_paren() => self.add_right_paren()?,
            _ => self.add_operator(token),
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<Vec<Token>> {
        while let Some(stack_node) = self.stack.pop() {
            if stack_node.is_left_paren() {
                return Err(CalcError::malformed_expression);
            }
            self.expression.push(stack_node);
        }
        Ok(self.expression)
    }
}

impl Default for Yard {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts infix tokens to postfix order with the shunting-yard algorithm.
///
/// Fails with `malformed_expression` when the parentheses do not balance.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>> {
    let mut yard = Yard::new();
    for token in tokens {
        yard.add(token.clone())?;
    }
    let postfix = yard.finish()?;
    tracing::debug!(postfix = %render(&postfix), "converted to postfix");
    Ok(postfix)
}
