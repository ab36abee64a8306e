use crate::calculating::calculate;
use crate::error_handling::*;
use crate::variables::*;

/// Formula, variable values and the latest result of one calculator.
///
/// Every change recalculates from scratch; a failed calculation leaves no
/// result.
#[derive(Debug, Default)]
pub struct Session {
    formula: String,
    variables: Variables,
    slider: Slider,
    result: Option<f64>,
}

impl Session {
    pub fn new(slider: Slider) -> Self {
        Self{slider, ..Self::default()}
    }

    /// Starts with preset values, kept for the names the first formula uses.
    pub fn with_variables(slider: Slider, variables: Variables) -> Self {
        Self{slider, variables: slider.snap_all(variables), ..Self::default()}
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn result(&self) -> Option<f64> {
        self.result
    }

    /// Replaces the formula. Text with characters outside the calculator
    /// alphabet is rejected and the session is left unchanged.
    pub fn set_formula(&mut self, formula: &str) -> Result<Result<f64>> {
        if let Err(error) = check_input(formula) {
            tracing::warn!(%formula, %error, "rejected formula");
            return Err(error);
        }
        self.formula = formula.to_owned();
        self.variables = detect_variables(formula, &self.variables);
        Ok(self.recalculate())
    }

    /// Moves the slider of `name`. Names absent from the formula are ignored.
    pub fn set_variable(&mut self, name: char, value: f64) -> Result<f64> {
        let snapped = self.slider.snap(value);
        match self.variables.get_mut(&name) {
            Some(slot) => *slot = snapped,
            None => tracing::debug!(%name, "ignoring unknown variable"),
        }
        self.recalculate()
    }

    fn recalculate(&mut self) -> Result<f64> {
        let outcome = calculate(&self.formula, &self.variables);
        self.result = outcome.as_ref().ok().copied();
        outcome
    }
}
