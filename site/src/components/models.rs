use leptos::prelude::*;

use crate::data::{CYAN, VIOLET};

const DESCRIPTORS: &[(&str, &str)] = &[
    ("", "Elemental properties (electronegativity, atomic radius, valence)"),
    ("", "Stoichiometric ratios and diversity metrics"),
    ("", "Magpie and CBFV feature sets"),
    ("", "Composition-based entropies"),
];

const METHODS: &[(&str, &str)] = &[
    ("", "XGBoost and LightGBM for structured data"),
    ("", "Deep neural networks for complex patterns"),
    ("", "Ensemble methods for robustness"),
    ("", "Uncertainty quantification via dropout"),
];

#[component]
pub fn Models() -> impl IntoView {
    view! {
        <section id="models" class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Model Architecture & Training"</h2>
                    <p class="section-description">
                        "Each model is optimized for its specific prediction task using carefully engineered "
                        "features and validation strategies."
                    </p>
                </div>
                <div class="grid-2">
                    <article class="card bg-blue">
                        <h3 class="card-title">"Composition-Based Descriptors"</h3>
                        <BulletList items=DESCRIPTORS color=CYAN />
                    </article>
                    <article class="card bg-purple">
                        <h3 class="card-title">"Machine Learning Methods"</h3>
                        <BulletList items=METHODS color=VIOLET />
                    </article>
                </div>
            </div>
        </section>
    }
}

/// Bulleted list of `(lead, text)` pairs; a non-empty lead is shown in bold.
#[component]
pub(crate) fn BulletList(
    items: &'static [(&'static str, &'static str)],
    color: &'static str,
) -> impl IntoView {
    view! {
        <ul class="bullets">
            {items
                .iter()
                .map(|&(lead, text)| {
                    view! {
                        <li>
                            <span class="bullet" style=format!("color: {}", color)>"•"</span>
                            <span>
                                {(!lead.is_empty()).then(|| view! { <strong>{lead}</strong> " " })}
                                {text}
                            </span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
