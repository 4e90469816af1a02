use leptos::prelude::*;

use super::{ICON_ARROW_RIGHT, Icon};

/// Hero banner. Both calls to action are anchors into the page.
#[component]
pub fn Hero(
    /// URL of the faded background image
    background: String,
    /// URL of the pipeline illustration on the right
    illustration: String,
) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-bg">
                <img src=background alt="Computational background" />
            </div>
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">"AI-Driven Materials Discovery"</div>
                        <h1 class="hero-title">
                            "Hierarchical Machine Learning for Accelerated Materials Discovery"
                        </h1>
                        <p class="hero-description">
                            "Predict crystal structure, stability, and phase behavior directly from chemical composition. "
                            "Accelerate materials discovery by reducing computational cost and time."
                        </p>
                        <div class="hero-actions">
                            <a href="#demo" class="btn btn-primary">
                                "Try the Predictor"
                                <Icon path=ICON_ARROW_RIGHT size=16 />
                            </a>
                            <a href="#pipeline" class="btn btn-outline">
                                "How It Works"
                            </a>
                        </div>
                    </div>
                    <div class="hero-visual">
                        <img src=illustration alt="Pipeline visualization" />
                    </div>
                </div>
            </div>
        </section>
    }
}
