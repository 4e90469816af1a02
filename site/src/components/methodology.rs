use leptos::prelude::*;

use super::models::BulletList;
use super::{ICON_DATABASE, ICON_LIGHTBULB, Icon};
use crate::data::{CYAN, VIOLET};

const DATASETS: &[(&str, &str)] = &[
    ("Materials Project:", "150,000+ computed structures with DFT properties"),
    ("OQMD:", "Open Quantum Materials Database with diverse materials"),
    ("ICSD:", "Inorganic Crystal Structure Database reference structures"),
];

const TECHNIQUES: &[(&str, &str)] = &[
    ("Feature Engineering:", "Magpie, CBFV, and custom composition descriptors"),
    ("Algorithms:", "XGBoost, LightGBM, neural networks, ensemble methods"),
    ("Validation:", "K-fold cross-validation with stratified splits"),
];

/// Dataset & methodology section.
#[component]
pub fn Methodology() -> impl IntoView {
    view! {
        <section id="methodology" class="section tinted">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Dataset & Methodology"</h2>
                    <p class="section-description">
                        "Built on publicly available materials databases and state-of-the-art machine learning techniques."
                    </p>
                </div>
                <div class="grid-2">
                    <article class="card">
                        <h3 class="card-title">
                            <Icon path=ICON_DATABASE size=20 color=CYAN />
                            "Datasets"
                        </h3>
                        <BulletList items=DATASETS color=CYAN />
                    </article>
                    <article class="card">
                        <h3 class="card-title">
                            <Icon path=ICON_LIGHTBULB size=20 color=VIOLET />
                            "ML Techniques"
                        </h3>
                        <BulletList items=TECHNIQUES color=VIOLET />
                    </article>
                </div>
            </div>
        </section>
    }
}
