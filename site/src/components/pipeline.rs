//! "How It Works" section: the four model stages.

use leptos::prelude::*;

use crate::data::PIPELINE;
use crate::types::PipelineStage;

#[component]
pub fn Pipeline() -> impl IntoView {
    view! {
        <section id="pipeline" class="section tinted">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"How It Works: The 4-Stage Pipeline"</h2>
                    <p class="section-description">
                        "Each model is trained on materials from the Materials Project and OQMD databases, "
                        "using composition-based descriptors and advanced ML techniques."
                    </p>
                </div>
                <div class="stages">
                    {PIPELINE.iter().map(|stage| view! { <StageCard stage=*stage /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StageCard(stage: PipelineStage) -> impl IntoView {
    view! {
        <div class="stage">
            <div
                class="stage-number"
                style=format!("background: {}; color: {}", stage.accent, stage.on_accent)
            >
                {stage.number.to_string()}
            </div>
            <article class="card stage-card">
                <h3 class="stage-title">{stage.title}</h3>
                <p class="stage-summary">{stage.summary}</p>
                <div class="stage-facts">
                    <Fact label="Input:" value=stage.input />
                    <Fact label="Output:" value=stage.output />
                    <Fact label="Method:" value=stage.method />
                    <Fact label="Purpose:" value=stage.purpose />
                </div>
            </article>
        </div>
    }
}

#[component]
fn Fact(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div>
            <span class="fact-key">{label}</span>
            " "
            {value}
        </div>
    }
}
