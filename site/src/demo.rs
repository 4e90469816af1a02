//! State behind the "Try the Predictor" form.
//!
//! The form holds the formula text and whether the results panel is shown.
//! Submitting never fails and never looks at the formula: the panel always
//! shows the fixed values from [`crate::data::PREDICTION_RESULTS`].

use serde::Serialize;
use tracing::debug;

use crate::data::DEFAULT_FORMULA;

/// Visibility of the results panel. Only moves from `Hidden` to `Shown`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum ResultsPanel {
    #[default]
    Hidden,
    Shown,
}

/// Demo form controller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DemoForm {
    formula: String,
    results: ResultsPanel,
}

impl Default for DemoForm {
    fn default() -> Self {
        Self {
            formula: DEFAULT_FORMULA.to_string(),
            results: ResultsPanel::Hidden,
        }
    }
}

impl DemoForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current formula field value.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// Replace the formula text verbatim. Any string is accepted.
    pub fn set_formula(&mut self, text: impl Into<String>) {
        self.formula = text.into();
    }

    /// Reveal the results panel.
    pub fn submit(&mut self) {
        if self.results == ResultsPanel::Hidden {
            debug!(formula = %self.formula, "revealing prediction results");
        }
        self.results = ResultsPanel::Shown;
    }

    pub fn results(&self) -> ResultsPanel {
        self.results
    }

    pub fn results_visible(&self) -> bool {
        self.results == ResultsPanel::Shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_hidden_with_sample_formula() {
        let form = DemoForm::new();
        assert_eq!(form.formula(), "Fe2O3");
        assert_eq!(form.results(), ResultsPanel::Hidden);
        assert!(!form.results_visible());
    }

    #[test]
    fn set_formula_keeps_text_verbatim() {
        let long = "X".repeat(10_000);
        let mut form = DemoForm::new();
        for text in ["TiO2", "", "  banana  ", "Ca₂SiO₄", long.as_str()] {
            form.set_formula(text);
            assert_eq!(form.formula(), text);
        }
    }

    #[test]
    fn set_formula_does_not_touch_visibility() {
        let mut form = DemoForm::new();
        form.set_formula("MgO");
        assert!(!form.results_visible());

        form.submit();
        form.set_formula("SiO2");
        assert!(form.results_visible());
    }

    #[test]
    fn submit_shows_results_for_any_input() {
        for text in ["Fe2O3", "", "banana", "!!!"] {
            let mut form = DemoForm::new();
            form.set_formula(text);
            form.submit();
            assert_eq!(form.results(), ResultsPanel::Shown);
        }
    }

    #[test]
    fn submit_is_idempotent() {
        let mut form = DemoForm::new();
        form.submit();
        let once = form.clone();
        form.submit();
        assert_eq!(form, once);
    }
}
