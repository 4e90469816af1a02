use leptos::prelude::*;

use super::{ICON_BOOK_OPEN, ICON_MICROSCOPE, ICON_TRENDING_UP, ICON_USERS, ICON_ZAP, Icon};
use crate::data::{CYAN, NAVY, SKY, VIOLET};

#[component]
pub fn Team() -> impl IntoView {
    view! {
        <section id="team" class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Team & Credits"</h2>
                    <p class="section-description">
                        "This project is built on the contributions of the materials science and machine learning communities."
                    </p>
                </div>
                <div class="grid-3">
                    <CreditCard
                        icon=ICON_USERS
                        accent=CYAN
                        icon_color=NAVY
                        tint="bg-blue"
                        title="Research Team"
                        text="Materials scientists and ML engineers dedicated to accelerating materials discovery."
                    />
                    <CreditCard
                        icon=ICON_BOOK_OPEN
                        accent=VIOLET
                        icon_color="#ffffff"
                        tint="bg-purple"
                        title="Data Sources"
                        text="Materials Project, OQMD, and ICSD for comprehensive materials data."
                    />
                    <CreditCard
                        icon=ICON_MICROSCOPE
                        accent=SKY
                        icon_color="#ffffff"
                        tint="bg-cyan"
                        title="Collaborators"
                        text="Academic institutions and industry partners advancing materials science."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn CreditCard(
    icon: &'static str,
    accent: &'static str,
    icon_color: &'static str,
    tint: &'static str,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    view! {
        <article class=format!("card centered {}", tint)>
            <div class="team-icon" style=format!("background: {}", accent)>
                <Icon path=icon size=32 color=icon_color />
            </div>
            <h3 class="info-title">{title}</h3>
            <p class="info-text">{text}</p>
        </article>
    }
}

/// Future research directions.
#[component]
pub fn FutureScope() -> impl IntoView {
    view! {
        <section id="future" class="section tinted">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Future Scope"</h2>
                    <p class="section-description">
                        "Ongoing research directions to expand capabilities and impact."
                    </p>
                </div>
                <div class="grid-3">
                    <ScopeCard
                        icon=ICON_TRENDING_UP
                        accent=CYAN
                        title="Phase Diagrams"
                        text="Extend Model-4 to predict full phase diagrams across composition and temperature ranges."
                    />
                    <ScopeCard
                        icon=ICON_ZAP
                        accent=VIOLET
                        title="Active Learning with DFT"
                        text="Integrate with DFT workflows for iterative refinement and uncertainty-guided sampling."
                    />
                    <ScopeCard
                        icon=ICON_MICROSCOPE
                        accent=SKY
                        title="Experimental Synthesis Guidance"
                        text="Provide recommendations for experimental synthesis pathways based on predictions."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ScopeCard(
    icon: &'static str,
    accent: &'static str,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    view! {
        <article class="card accent-left" style=format!("--accent: {}", accent)>
            <h3 class="card-title">
                <Icon path=icon size=20 color=accent />
                {title}
            </h3>
            <p class="info-text">{text}</p>
        </article>
    }
}
