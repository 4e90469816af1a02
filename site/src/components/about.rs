use leptos::prelude::*;

use super::{ICON_MICROSCOPE, ICON_TRENDING_UP, ICON_ZAP, Icon};
use crate::data::{CYAN, NAVY, SKY, VIOLET};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Why Hierarchical Machine Learning?"</h2>
                    <p class="section-description">
                        "Traditional density functional theory (DFT) calculations are computationally expensive "
                        "and time-consuming. Our hierarchical approach dramatically reduces the search space."
                    </p>
                </div>
                <div class="grid-3">
                    <InfoCard
                        icon=ICON_ZAP
                        accent=CYAN
                        icon_color=NAVY
                        tint="bg-blue"
                        title="Composition-Only Input"
                        text="Start with just the chemical formula. No need for initial structure guesses or complex pre-processing."
                    />
                    <InfoCard
                        icon=ICON_TRENDING_UP
                        accent=VIOLET
                        icon_color="#ffffff"
                        tint="bg-purple"
                        title="Hierarchical Filtering"
                        text="Each model feeds into the next, progressively narrowing the search space and eliminating unfeasible materials."
                    />
                    <InfoCard
                        icon=ICON_MICROSCOPE
                        accent=SKY
                        icon_color="#ffffff"
                        tint="bg-cyan"
                        title="DFT Acceleration"
                        text="Predicted lattice parameters and stability estimates provide excellent initial guesses for DFT calculations."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoCard(
    icon: &'static str,
    accent: &'static str,
    icon_color: &'static str,
    tint: &'static str,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    view! {
        <article
            class=format!("card accent-left info-card {}", tint)
            style=format!("--accent: {}", accent)
        >
            <div class="info-icon" style=format!("background: {}", accent)>
                <Icon path=icon size=24 color=icon_color />
            </div>
            <div>
                <h3 class="info-title">{title}</h3>
                <p class="info-text">{text}</p>
            </div>
        </article>
    }
}
