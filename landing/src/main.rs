// MatDiscover landing page, browser build.
// The page body lives in matdiscover-site; this crate only mounts it.

use leptos::prelude::*;
use matdiscover_site::components::App;
use matdiscover_site::styles::PAGE_CSS;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| {
        view! {
            <style>{PAGE_CSS}</style>
            <App />
        }
    });
}
