//! "Try the Predictor" section.

use leptos::prelude::*;

use crate::data::{NAVY, PREDICTION_RESULTS};
use crate::demo::DemoForm;
use crate::types::ResultGroup;

/// Formula input, Predict button and the (initially hidden) results panel.
///
/// The form state lives in a signal owned by this component. `form` only
/// sets the starting state, which lets the static renderer prerender a
/// submitted form.
#[component]
pub fn DemoSection(#[prop(optional)] form: DemoForm) -> impl IntoView {
    let form = RwSignal::new(form);
    let formula = move || form.with(|f| f.formula().to_string());

    view! {
        <section id="demo" class="section tinted">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Try the Predictor"</h2>
                    <p class="section-description">
                        "Enter a chemical formula to see predictions across all four models. "
                        "Results are based on our trained models."
                    </p>
                </div>
                <div class="card demo-card">
                    <label class="demo-label" for="formula-input">"Chemical Formula"</label>
                    <div class="demo-row">
                        <input
                            id="formula-input"
                            class="demo-input"
                            type="text"
                            placeholder="e.g., Fe2O3, TiO2, Al2O3"
                            value=formula
                            prop:value=formula
                            on:input=move |ev| form.update(|f| f.set_formula(event_target_value(&ev)))
                        />
                        <button
                            class="btn btn-primary"
                            type="button"
                            on:click=move |_| form.update(DemoForm::submit)
                        >
                            "Predict"
                        </button>
                    </div>
                    {move || {
                        form.with(DemoForm::results_visible).then(|| view! { <PredictionResults /> })
                    }}
                </div>
            </div>
        </section>
    }
}

/// The fixed results block. Takes no input: the values never depend on the
/// formula.
#[component]
pub fn PredictionResults() -> impl IntoView {
    view! {
        <div class="results-panel" data-role="results-panel">
            {PREDICTION_RESULTS
                .iter()
                .map(|group| view! { <ResultCard group=*group /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ResultCard(group: ResultGroup) -> impl IntoView {
    // The first stage badge uses dark text on the light cyan accent
    let badge_text = if group.stage == 1 { NAVY } else { "#ffffff" };
    let tint = match group.stage {
        1 => "bg-blue",
        2 => "bg-purple",
        3 => "bg-cyan",
        _ => "bg-teal",
    };

    view! {
        <div class=format!("card result-group {}", tint) style=format!("--accent: {}", group.accent)>
            <h4 class="result-title">
                <span
                    class="result-badge"
                    style=format!("background: {}; color: {}", group.accent, badge_text)
                >
                    {group.stage.to_string()}
                </span>
                {group.title}
            </h4>
            <div class="result-rows">
                {group
                    .rows
                    .iter()
                    .map(|row| {
                        let class = if row.highlight { "result-value highlight" } else { "result-value" };
                        view! {
                            <div class="result-row">
                                <span>{row.label}</span>
                                <span class=class>{row.value}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(form: DemoForm) -> String {
        view! { <DemoSection form=form /> }.to_html()
    }

    fn submitted(formula: &str) -> DemoForm {
        let mut form = DemoForm::new();
        form.set_formula(formula);
        form.submit();
        form
    }

    /// The results panel markup, from its opening tag to the end of the document.
    fn results_panel(html: &str) -> &str {
        let start = html
            .find(r#"data-role="results-panel""#)
            .expect("results panel rendered");
        &html[start..]
    }

    #[test]
    fn initial_render_hides_results() {
        let html = render(DemoForm::default());
        assert!(!html.contains("results-panel"));
        assert!(!html.contains("-5.23 eV/atom"));
        assert!(html.contains(r#"value="Fe2O3""#));
    }

    #[test]
    fn input_reflects_current_formula() {
        let mut form = DemoForm::new();
        form.set_formula("TiO2");
        let html = render(form);
        assert!(html.contains(r#"value="TiO2""#));
        assert!(!html.contains("results-panel"));
    }

    #[test]
    fn submitted_form_shows_all_stages() {
        let html = render(submitted("Fe2O3"));
        let panel = results_panel(&html);
        for group in PREDICTION_RESULTS {
            assert!(panel.contains(group.rows[0].value), "missing {}", group.title);
        }
        assert!(panel.contains("1247 K"));
    }

    #[test]
    fn empty_formula_still_shows_results() {
        let html = render(submitted(""));
        assert!(html.contains("results-panel"));
        assert!(html.contains(r#"value="""#));
    }

    #[test]
    fn results_do_not_depend_on_formula() {
        let tio2 = render(submitted("TiO2"));
        let banana = render(submitted("banana"));
        assert!(tio2.contains("-5.23 eV/atom"));
        assert!(banana.contains("-5.23 eV/atom"));
        assert_eq!(results_panel(&tio2), results_panel(&banana));
    }
}
