use leptos::prelude::*;

/// (label, href, external)
type FooterLink = (&'static str, &'static str, bool);

const PLATFORM: &[FooterLink] = &[
    ("Try Predictor", "#demo", false),
    ("How It Works", "#pipeline", false),
    ("Models", "#models", false),
];

const RESOURCES: &[FooterLink] = &[
    ("Results", "#results", false),
    ("Documentation", "#", false),
    ("API Docs", "#", false),
];

const DATA_SOURCES: &[FooterLink] = &[
    ("Materials Project", "https://materialsproject.org", true),
    ("OQMD", "https://oqmd.org", true),
    ("ICSD", "https://icsd.fiz-karlsruhe.de", true),
];

#[component]
pub fn Footer(copyright: String) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="grid-4">
                    <LinkColumn title="Platform" links=PLATFORM />
                    <LinkColumn title="Resources" links=RESOURCES />
                    <LinkColumn title="Data Sources" links=DATA_SOURCES />
                    <div>
                        <h4>"Contact"</h4>
                        <p class="footer-contact">
                            "For inquiries about the platform or collaboration opportunities, please reach out to our team."
                        </p>
                    </div>
                </div>
                <p class="footer-bottom">{copyright}</p>
            </div>
        </footer>
    }
}

#[component]
fn LinkColumn(title: &'static str, links: &'static [FooterLink]) -> impl IntoView {
    view! {
        <div>
            <h4>{title}</h4>
            <ul class="footer-links">
                {links
                    .iter()
                    .map(|&(label, href, external)| {
                        if external {
                            view! {
                                <li>
                                    <a href=href target="_blank" rel="noopener noreferrer">{label}</a>
                                </li>
                            }
                                .into_any()
                        } else {
                            view! {
                                <li>
                                    <a href=href>{label}</a>
                                </li>
                            }
                                .into_any()
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
