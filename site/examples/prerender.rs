//! Prerender the landing page with the results panel open.
//!
//! Run with: `cargo run -p matdiscover-site --example prerender`

use matdiscover_site::{DemoForm, SiteConfig, render_page_with};

fn main() {
    let mut form = DemoForm::new();
    form.set_formula("TiO2");
    form.submit();

    let html = render_page_with(&SiteConfig::default(), form);

    let output_path = "prerendered.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
