use leptos::prelude::*;

use super::{ICON_MICROSCOPE, Icon};
use crate::data::NAV_LINKS;

/// Sticky header with brand and in-page anchor links.
///
/// Links are plain `#section` anchors: following one scrolls the page and
/// leaves every component's state alone.
#[component]
pub fn Nav(brand: String) -> impl IntoView {
    view! {
        <header class="nav">
            <div class="nav-inner">
                <a href="#" class="nav-brand">
                    <div class="nav-logo">
                        <Icon path=ICON_MICROSCOPE size=20 />
                    </div>
                    <span class="nav-title">{brand}</span>
                </a>
                <nav class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! { <a href=link.href() class="nav-link">{link.label}</a> }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
