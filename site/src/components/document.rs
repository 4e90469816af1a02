//! Root document component - the complete HTML page for static output.

use leptos::prelude::*;

use super::App;
use crate::config::SiteConfig;
use crate::demo::DemoForm;
use crate::styles::PAGE_CSS;

const FONTS_URL: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600&family=Sora:wght@600;700&display=swap";

/// `<html>` shell with inlined CSS around [`App`].
#[component]
pub fn PageDocument(config: SiteConfig, #[prop(optional)] form: DemoForm) -> impl IntoView {
    let title = config.page_title.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="stylesheet" href=FONTS_URL />
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <App config=config form=form />
            </body>
        </html>
    }
}
