//! Leptos UI components for the landing page.
//!
//! Each section is a `#[component]` function; [`App`] composes them in page
//! order and [`PageDocument`] wraps `App` in a full HTML document for static
//! rendering.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument (ssr only)
//! └── App
//!     ├── Nav
//!     ├── Hero
//!     ├── About
//!     ├── Pipeline
//!     ├── Models
//!     ├── DemoSection
//!     │   └── PredictionResults (after Predict)
//!     ├── ResultsSection
//!     │   ├── BarChart (accuracy, volume)
//!     │   ├── LineChart (energy)
//!     │   └── PieChart (phase)
//!     ├── Methodology
//!     ├── Team
//!     ├── FutureScope
//!     └── Footer
//! ```

mod about;
mod app;
pub mod charts;
mod demo;
#[cfg(feature = "ssr")]
mod document;
mod footer;
mod hero;
mod icons;
mod methodology;
mod models;
mod nav;
mod pipeline;
mod results;
mod team;

pub use about::About;
pub use app::App;
pub use charts::{BarChart, LineChart, PieChart};
pub use demo::{DemoSection, PredictionResults};
#[cfg(feature = "ssr")]
pub use document::PageDocument;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
pub use methodology::Methodology;
pub use models::Models;
pub use nav::Nav;
pub use pipeline::Pipeline;
pub use results::ResultsSection;
pub use team::{FutureScope, Team};
