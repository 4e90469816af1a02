use leptos::prelude::*;

use super::charts::{BarChart, LineChart, PieChart};
use crate::data::{KPIS, PHASES, accuracy_chart, energy_chart, volume_chart};

/// Results & benchmarks: the four chart cards and the KPI strip.
#[component]
pub fn ResultsSection() -> impl IntoView {
    view! {
        <section id="results" class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Results & Benchmarks"</h2>
                    <p class="section-description">
                        "Our models achieve strong performance across diverse materials datasets. "
                        "Here are key metrics from validation sets."
                    </p>
                </div>
                <div class="grid-2">
                    <article class="card chart-card bg-blue">
                        <h3 class="card-title">"Model-1: Space Group Accuracy"</h3>
                        <BarChart data=accuracy_chart() />
                    </article>
                    <article class="card chart-card bg-purple">
                        <h3 class="card-title">"Model-2: Formation Energy MAE"</h3>
                        <LineChart data=energy_chart() />
                    </article>
                    <article class="card chart-card bg-cyan">
                        <h3 class="card-title">"Model-3: Volume Prediction Error"</h3>
                        <BarChart data=volume_chart() />
                    </article>
                    <article class="card chart-card bg-teal">
                        <h3 class="card-title">"Model-4: Phase Stability Distribution"</h3>
                        <PieChart shares=PHASES outer_radius=80.0 />
                    </article>
                </div>
                <div class="card kpi-strip">
                    <h3>"Key Performance Indicators"</h3>
                    <div class="grid-4">
                        {KPIS
                            .iter()
                            .map(|kpi| {
                                view! {
                                    <div class="kpi">
                                        <div class="kpi-value" style=format!("color: {}", kpi.color)>
                                            {kpi.value}
                                        </div>
                                        <p class="kpi-label">{kpi.label}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
