//! Fixed page data: chart datasets, the mock prediction results and the
//! section content.
//!
//! Nothing here is computed. The prediction results in particular are the
//! same literals for every formula the visitor types in.

use crate::chart::{CategoricalData, Series};
use crate::types::{
    AccuracyPoint, ChartDatasets, EnergyPoint, Kpi, NavLink, PhaseShare, PipelineStage,
    ResultGroup, ResultRow, VolumeError,
};

/// Value the formula field starts with.
pub const DEFAULT_FORMULA: &str = "Fe2O3";

// Brand palette
pub const NAVY: &str = "#1e3a5f";
pub const CYAN: &str = "#00d9ff";
pub const VIOLET: &str = "#7c3aed";
pub const SKY: &str = "#0ea5e9";
pub const TEAL: &str = "#06b6d4";
pub const RED: &str = "#dc2626";

// =============================================================================
// Chart datasets
// =============================================================================

pub const ACCURACY: &[AccuracyPoint] = &[
    AccuracyPoint { metric: "Top-1", value: 78.0 },
    AccuracyPoint { metric: "Top-3", value: 92.0 },
    AccuracyPoint { metric: "Top-5", value: 96.0 },
];

pub const ENERGY: &[EnergyPoint] = &[
    EnergyPoint { material: "Fe2O3", predicted: -5.2, actual: -5.1 },
    EnergyPoint { material: "TiO2", predicted: -7.8, actual: -7.9 },
    EnergyPoint { material: "Al2O3", predicted: -9.1, actual: -9.0 },
    EnergyPoint { material: "MgO", predicted: -6.0, actual: -6.1 },
    EnergyPoint { material: "SiO2", predicted: -8.5, actual: -8.4 },
];

pub const VOLUME: &[VolumeError] = &[
    VolumeError { model: "Model-3", mae: 2.3, rmse: 3.1 },
    VolumeError { model: "Baseline", mae: 5.8, rmse: 7.2 },
];

pub const PHASES: &[PhaseShare] = &[
    PhaseShare { name: "Stable", value: 65.0, color: CYAN },
    PhaseShare { name: "Metastable", value: 25.0, color: VIOLET },
    PhaseShare { name: "Unstable", value: 10.0, color: RED },
];

/// All chart datasets bundled together (used for the JSON export).
pub const DATASETS: ChartDatasets = ChartDatasets {
    accuracy: ACCURACY,
    energy: ENERGY,
    volume: VOLUME,
    phase: PHASES,
};

/// Model-1 accuracy as a single-series bar chart.
pub fn accuracy_chart() -> CategoricalData {
    CategoricalData {
        categories: ACCURACY.iter().map(|p| p.metric).collect(),
        series: vec![Series {
            label: "value",
            color: CYAN,
            values: ACCURACY.iter().map(|p| p.value).collect(),
        }],
    }
}

/// Model-2 predicted vs. actual energies as two line series.
pub fn energy_chart() -> CategoricalData {
    CategoricalData {
        categories: ENERGY.iter().map(|p| p.material).collect(),
        series: vec![
            Series {
                label: "predicted",
                color: VIOLET,
                values: ENERGY.iter().map(|p| p.predicted).collect(),
            },
            Series {
                label: "actual",
                color: CYAN,
                values: ENERGY.iter().map(|p| p.actual).collect(),
            },
        ],
    }
}

/// Model-3 errors as a grouped bar chart (one group per model).
pub fn volume_chart() -> CategoricalData {
    CategoricalData {
        categories: VOLUME.iter().map(|v| v.model).collect(),
        series: vec![
            Series {
                label: "mae",
                color: SKY,
                values: VOLUME.iter().map(|v| v.mae).collect(),
            },
            Series {
                label: "rmse",
                color: TEAL,
                values: VOLUME.iter().map(|v| v.rmse).collect(),
            },
        ],
    }
}

// =============================================================================
// Mock prediction results
// =============================================================================

const fn row(label: &'static str, value: &'static str) -> ResultRow {
    ResultRow { label, value, highlight: false }
}

pub const PREDICTION_RESULTS: &[ResultGroup] = &[
    ResultGroup {
        stage: 1,
        title: "Space Group Predictions",
        accent: CYAN,
        rows: &[
            row("Pm-3m (Top-1)", "42.3%"),
            row("Pnma (Top-2)", "28.7%"),
            row("P63/mmc (Top-3)", "15.2%"),
        ],
    },
    ResultGroup {
        stage: 2,
        title: "Formation Energy & Stability",
        accent: VIOLET,
        rows: &[
            row("Formation Energy", "-5.23 eV/atom"),
            ResultRow { label: "Stability Score", value: "Stable", highlight: true },
            row("Confidence", "94.2%"),
        ],
    },
    ResultGroup {
        stage: 3,
        title: "Lattice Parameters",
        accent: SKY,
        rows: &[
            row("Lattice a", "5.03 Å"),
            row("Lattice b", "5.03 Å"),
            row("Lattice c", "13.75 Å"),
            row("Volume", "348.2 Å³"),
        ],
    },
    ResultGroup {
        stage: 4,
        title: "Phase Behavior",
        accent: TEAL,
        rows: &[
            row("Primary Phase", "Cubic"),
            row("Transition Temp", "1247 K"),
            row("Secondary Phase", "Rhombohedral"),
        ],
    },
];

// =============================================================================
// Section content
// =============================================================================

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { target: "about", label: "About" },
    NavLink { target: "pipeline", label: "How It Works" },
    NavLink { target: "models", label: "Models" },
    NavLink { target: "demo", label: "Try It" },
    NavLink { target: "results", label: "Results" },
];

pub const PIPELINE: &[PipelineStage] = &[
    PipelineStage {
        number: 1,
        title: "Space Group Predictor (Model-1)",
        summary: "Multi-class classification across 230 crystallographic space groups. \
                  Takes chemical composition as input and outputs probability distributions over space groups.",
        input: "Chemical composition",
        output: "Top-k space groups (probabilities)",
        method: "Gradient boosting + neural networks",
        purpose: "Reduce structure search space",
        accent: CYAN,
        on_accent: NAVY,
    },
    PipelineStage {
        number: 2,
        title: "Formation Energy & Stability Predictor (Model-2)",
        summary: "Regression model predicting formation energy and thermodynamic stability. \
                  Combines composition and predicted space group information.",
        input: "Composition + space group",
        output: "Formation energy (eV/atom)",
        method: "Ensemble regression",
        purpose: "Screen unstable materials",
        accent: VIOLET,
        on_accent: "#ffffff",
    },
    PipelineStage {
        number: 3,
        title: "Lattice / Volume Predictor (Model-3)",
        summary: "Predicts lattice parameters and unit cell volume from composition and space group. \
                  Provides excellent initial guesses for DFT.",
        input: "Composition + space group",
        output: "Lattice constants (Å)",
        method: "Geometric ML",
        purpose: "Accelerate DFT convergence",
        accent: SKY,
        on_accent: "#ffffff",
    },
    PipelineStage {
        number: 4,
        title: "Phase Stability & Transition Predictor (Model-4)",
        summary: "Predicts phase stability regions and transition temperatures under various \
                  environmental conditions. Designed for extensibility.",
        input: "Material properties + conditions",
        output: "Stability regions, transitions",
        method: "Phase diagram learning",
        purpose: "Predict real-world behavior",
        accent: TEAL,
        on_accent: "#ffffff",
    },
];

pub const KPIS: &[Kpi] = &[
    Kpi { value: "96%", label: "Top-5 Accuracy (Space Groups)", color: CYAN },
    Kpi { value: "0.23 eV", label: "Formation Energy MAE", color: VIOLET },
    Kpi { value: "2.3%", label: "Volume Prediction Error", color: SKY },
    Kpi { value: "94.2%", label: "Stability Classification F1", color: TEAL },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_lengths_match_charts() {
        assert_eq!(ACCURACY.len(), 3);
        assert_eq!(ENERGY.len(), 5);
        assert_eq!(VOLUME.len(), 2);
        assert_eq!(PHASES.len(), 3);
    }

    #[test]
    fn phase_shares_sum_to_hundred() {
        let total: f64 = PHASES.iter().map(|p| p.value).sum();
        assert!((total - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn results_cover_all_pipeline_stages() {
        let stages: Vec<u8> = PREDICTION_RESULTS.iter().map(|g| g.stage).collect();
        let pipeline: Vec<u8> = PIPELINE.iter().map(|s| s.number).collect();
        assert_eq!(stages, pipeline);
    }

    #[test]
    fn chart_builders_keep_dataset_order() {
        let energy = energy_chart();
        assert_eq!(energy.categories, vec!["Fe2O3", "TiO2", "Al2O3", "MgO", "SiO2"]);
        assert_eq!(energy.series[1].values[2], -9.0);

        let volume = volume_chart();
        assert_eq!(volume.series.len(), 2);
        assert_eq!(volume.series[0].values, vec![2.3, 5.8]);

        assert_eq!(accuracy_chart().series[0].values, vec![78.0, 92.0, 96.0]);
    }

    #[test]
    fn datasets_export_as_json() {
        let json = serde_json::to_value(DATASETS).unwrap();
        assert_eq!(json["energy"][1]["material"], "TiO2");
        assert_eq!(json["phase"][2]["color"], RED);
        assert_eq!(json["volume"].as_array().map(Vec::len), Some(2));
    }
}
