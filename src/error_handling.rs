use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("formula is required")]
    empty_formula,

    #[error("parentheses are not balanced")]
    malformed_expression,

    #[error("division by zero")]
    division_by_zero,

    #[error("'{0}' is not a valid operator")]
    invalid_operator(String),

    #[error("expression does not reduce to a single value")]
    invalid_expression,

    #[error("result is not a finite number")]
    invalid_result,

    #[error("invalid character, '{0}', encountered")]
    invalid_character(char),

    #[error("'{0}' is not a valid assignment")]
    invalid_assignment(String),

    #[error("invalid slider: {0}")]
    invalid_slider(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;
