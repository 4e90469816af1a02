//! Page body shared by the static renderer and the browser app.

use leptos::prelude::*;

use super::{
    About, DemoSection, Footer, FutureScope, Hero, Methodology, Models, Nav, Pipeline,
    ResultsSection, Team,
};
use crate::config::SiteConfig;
use crate::demo::DemoForm;

/// The whole landing page, header to footer.
#[component]
pub fn App(
    #[prop(optional)] config: SiteConfig,
    /// Starting state of the demo form
    #[prop(optional)]
    form: DemoForm,
) -> impl IntoView {
    let background = config.asset("hero-bg.png");
    let illustration = config.asset("pipeline-illustration.png");

    view! {
        <Nav brand=config.brand />
        <main>
            <Hero background=background illustration=illustration />
            <About />
            <Pipeline />
            <Models />
            <DemoSection form=form />
            <ResultsSection />
            <Methodology />
            <Team />
            <FutureScope />
        </main>
        <Footer copyright=config.copyright />
    }
}
