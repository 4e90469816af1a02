//! Data types for the page content and chart datasets.
//!
//! Everything the page shows is a compile-time constant (see [`crate::data`]).
//! The types here are therefore built around `&'static str` and plain
//! numbers, and derive `Serialize` so the datasets can be exported as JSON:
//!
//! ```rust
//! use matdiscover_site::data::ACCURACY;
//!
//! let json = serde_json::to_string(ACCURACY).unwrap();
//! assert!(json.contains("\"metric\":\"Top-1\""));
//! ```

use serde::Serialize;

/// Space group accuracy at a given top-k cutoff (Model-1).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AccuracyPoint {
    /// Cutoff label, e.g. `"Top-3"`
    pub metric: &'static str,
    /// Accuracy in percent
    pub value: f64,
}

/// Predicted vs. reference formation energy for one material (Model-2).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EnergyPoint {
    /// Chemical formula
    pub material: &'static str,
    /// Predicted formation energy (eV/atom)
    pub predicted: f64,
    /// Reference DFT formation energy (eV/atom)
    pub actual: f64,
}

/// Volume prediction error for one model (Model-3).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VolumeError {
    /// Model name
    pub model: &'static str,
    /// Mean absolute error (%)
    pub mae: f64,
    /// Root mean squared error (%)
    pub rmse: f64,
}

/// One segment of the phase stability distribution (Model-4).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PhaseShare {
    /// Phase class name
    pub name: &'static str,
    /// Share in percent
    pub value: f64,
    /// Segment fill color (CSS hex)
    pub color: &'static str,
}

/// All four chart datasets, in the order the results section shows them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ChartDatasets {
    /// Model-1 space group accuracy
    pub accuracy: &'static [AccuracyPoint],
    /// Model-2 formation energy
    pub energy: &'static [EnergyPoint],
    /// Model-3 volume error
    pub volume: &'static [VolumeError],
    /// Model-4 phase distribution
    pub phase: &'static [PhaseShare],
}

/// A single `label: value` line in the prediction results panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub label: &'static str,
    pub value: &'static str,
    /// Render the value in the accent color instead of the heading color
    pub highlight: bool,
}

/// Results of one pipeline stage as shown after "Predict".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ResultGroup {
    /// Pipeline stage number (1-4)
    pub stage: u8,
    pub title: &'static str,
    /// Accent color for the stage badge and left border
    pub accent: &'static str,
    pub rows: &'static [ResultRow],
}

/// A pipeline stage card in the "How It Works" section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineStage {
    pub number: u8,
    pub title: &'static str,
    pub summary: &'static str,
    pub input: &'static str,
    pub output: &'static str,
    pub method: &'static str,
    pub purpose: &'static str,
    pub accent: &'static str,
    /// Text color used on top of `accent`
    pub on_accent: &'static str,
}

/// A headline metric tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kpi {
    pub value: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

/// An in-page navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Section element id (without `#`)
    pub target: &'static str,
    pub label: &'static str,
}

impl NavLink {
    /// The `href` value for this link.
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_link_href_prefixes_hash() {
        let link = NavLink {
            target: "demo",
            label: "Try It",
        };
        assert_eq!(link.href(), "#demo");
    }

    #[test]
    fn result_group_serializes_rows() {
        const ROWS: &[ResultRow] = &[ResultRow {
            label: "Volume",
            value: "1 Å³",
            highlight: false,
        }];
        let group = ResultGroup {
            stage: 3,
            title: "Lattice",
            accent: "#000",
            rows: ROWS,
        };
        let json = serde_json::to_value(group).unwrap();
        assert_eq!(json["rows"][0]["label"], "Volume");
        assert_eq!(json["stage"], 3);
    }
}
