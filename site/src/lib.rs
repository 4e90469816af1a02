//! # matdiscover-site
//!
//! Leptos components for the MatDiscover landing page: a marketing page for
//! hierarchical machine learning in materials discovery.
//!
//! The same component tree renders two ways:
//!
//! - **Static HTML** (`ssr` feature, default) via [`render_page`]: a
//!   complete document with inlined CSS, no JavaScript needed.
//! - **In the browser** (`csr` feature) by mounting [`components::App`];
//!   see the `landing` crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use matdiscover_site::{render_page, config::SiteConfig};
//!
//! let html = render_page(&SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`data`] - fixed datasets, mock results and section content
//! - [`demo`] - the demo form state (formula text, results visibility)
//! - [`chart`] - scale and layout math for the SVG charts
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//! - [`config`] - branding and asset settings
//!
//! The "Predict" button never runs a model. It reveals a fixed block of
//! literal values whatever the formula field holds.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod chart;
pub mod components;
pub mod config;
pub mod data;
pub mod demo;
pub mod error;
pub mod styles;
pub mod types;

pub use config::SiteConfig;
pub use demo::{DemoForm, ResultsPanel};
pub use error::SiteError;

#[cfg(feature = "ssr")]
use components::PageDocument;
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Render the complete page with the demo form in its initial state.
///
/// ```rust
/// use matdiscover_site::{render_page, SiteConfig};
///
/// let html = render_page(&SiteConfig::default());
/// assert!(html.contains(r#"id="demo""#));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(config: &SiteConfig) -> String {
    render_page_with(config, DemoForm::default())
}

/// Render the complete page starting from the given demo form state.
///
/// Used to prerender a page with the results panel already open.
#[cfg(feature = "ssr")]
pub fn render_page_with(config: &SiteConfig, form: DemoForm) -> String {
    let results_shown = form.results_visible();
    let doc = view! { <PageDocument config=config.clone() form=form /> };
    let html = format!("<!DOCTYPE html>\n{}", doc.to_html());

    tracing::debug!(bytes = html.len(), results_shown, "rendered page");
    html
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::data::{NAV_LINKS, PREDICTION_RESULTS};

    #[test]
    fn renders_full_document() {
        let html = render_page(&SiteConfig::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("MatDiscover"));
        assert!(html.contains("scroll-behavior: smooth"));
    }

    #[test]
    fn initial_page_has_default_formula_and_no_results() {
        let html = render_page(&SiteConfig::default());
        assert!(html.contains(r#"value="Fe2O3""#));
        assert!(!html.contains(r#"data-role="results-panel""#));
        assert!(!html.contains(PREDICTION_RESULTS[1].rows[0].value));
    }

    #[test]
    fn every_nav_link_has_a_target_section() {
        let html = render_page(&SiteConfig::default());
        for link in NAV_LINKS {
            assert!(html.contains(&format!(r##"href="{}""##, link.href())));
            assert!(
                html.contains(&format!(r#"id="{}""#, link.target)),
                "no section for #{}",
                link.target
            );
        }
    }

    #[test]
    fn prerendered_results_match_live_submit() {
        let mut form = DemoForm::new();
        form.set_formula("banana");
        form.submit();
        let html = render_page_with(&SiteConfig::default(), form);
        assert!(html.contains(r#"data-role="results-panel""#));
        assert!(html.contains("-5.23 eV/atom"));
        assert!(html.contains(r#"value="banana""#));
    }

    #[test]
    fn config_branding_is_applied() {
        let config = SiteConfig {
            brand: "CrystalScope".into(),
            page_title: "CrystalScope demo".into(),
            asset_base: "https://cdn.example.org/img".into(),
            copyright: "(c) CrystalScope".into(),
        };
        let html = render_page(&config);
        assert!(html.contains("<title>CrystalScope demo</title>"));
        assert!(html.contains("https://cdn.example.org/img/hero-bg.png"));
        assert!(html.contains("(c) CrystalScope"));
    }

    #[test]
    fn page_contains_all_four_charts() {
        let html = render_page(&SiteConfig::default());
        for class in ["bar-chart", "line-chart", "pie-chart"] {
            assert!(html.contains(class), "missing {}", class);
        }
        assert_eq!(html.matches(r#"class="chart bar-chart""#).count(), 2);
    }
}
