//! CSS for the landing page.
//!
//! One stylesheet shared by both render paths: SSR inlines it in `<head>`,
//! the CSR entry point mounts it as a `<style>` element next to the app.
//!
//! # Customization
//!
//! ```rust
//! use matdiscover_site::styles::PAGE_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: -0.02em; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! assert!(combined.len() > PAGE_CSS.len());
//! ```

/// Complete stylesheet.
///
/// Palette: deep slate blue `#1e3a5f` with bright cyan `#00d9ff`, violet,
/// sky and teal accents. Sora for headings, Inter for body text.
pub const PAGE_CSS: &str = r#"
:root {
    --navy: #1e3a5f;
    --navy-dark: #152847;
    --cyan: #00d9ff;
    --violet: #7c3aed;
    --sky: #0ea5e9;
    --teal: #06b6d4;
    --gray-200: #e5e7eb;
    --gray-300: #d1d5db;
    --gray-500: #6b7280;
    --gray-600: #4b5563;
    --blue-50: #eff6ff;
    --purple-50: #faf5ff;
    --cyan-50: #ecfeff;
    --teal-50: #f0fdfa;
    --radius: 8px;
    --font-head: "Sora", system-ui, -apple-system, sans-serif;
    --font-body: "Inter", system-ui, -apple-system, sans-serif;
}

* { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    background: #fff;
    color: var(--gray-600);
    font-family: var(--font-body);
    line-height: 1.5;
}

h1, h2, h3, h4 { font-family: var(--font-head); color: var(--navy); margin: 0; }

p { margin: 0; }

a { color: inherit; text-decoration: none; }

section[id] { scroll-margin-top: 72px; }

.container { max-width: 1200px; margin: 0 auto; padding: 0 24px; }

.section { padding: 80px 0; }
.section.tinted { background: linear-gradient(135deg, var(--blue-50), #fff 50%, var(--purple-50)); }

.section-header { text-align: center; max-width: 42rem; margin: 0 auto 64px; }
.section-title { font-size: 2.25rem; font-weight: 700; margin-bottom: 16px; }
.section-description { font-size: 1.125rem; }

.grid-2, .grid-3, .grid-4 { display: grid; gap: 32px; }
@media (min-width: 768px) {
    .grid-2 { grid-template-columns: repeat(2, 1fr); }
    .grid-3 { grid-template-columns: repeat(3, 1fr); }
    .grid-4 { grid-template-columns: repeat(4, 1fr); }
}

.card {
    background: #fff;
    border-radius: 12px;
    padding: 32px;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.06);
}
.card.bg-blue { background: linear-gradient(135deg, var(--blue-50), #fff); }
.card.bg-purple { background: linear-gradient(135deg, var(--purple-50), #fff); }
.card.bg-cyan { background: linear-gradient(135deg, var(--cyan-50), #fff); }
.card.bg-teal { background: linear-gradient(135deg, var(--teal-50), #fff); }
.card.accent-left { border-left: 4px solid var(--accent, var(--cyan)); }
.card.centered { text-align: center; }
.card-title { font-size: 1.25rem; font-weight: 700; margin-bottom: 16px; display: flex; gap: 8px; align-items: center; }

.btn {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    border-radius: var(--radius);
    padding: 14px 32px;
    font-size: 1rem;
    font-weight: 600;
    border: 1px solid var(--navy);
    cursor: pointer;
    transition: background 0.2s;
}
.btn-primary { background: var(--navy); color: #fff; }
.btn-primary:hover { background: var(--navy-dark); }
.btn-outline { background: transparent; color: var(--navy); }
.btn-outline:hover { background: var(--blue-50); }

/* Header */
.nav { position: sticky; top: 0; z-index: 50; background: #fff; border-bottom: 1px solid var(--gray-200); }
.nav-inner { display: flex; align-items: center; justify-content: space-between; padding: 16px 24px; max-width: 1200px; margin: 0 auto; }
.nav-brand { display: flex; align-items: center; gap: 8px; }
.nav-logo {
    width: 32px; height: 32px; border-radius: var(--radius);
    background: linear-gradient(135deg, var(--navy), var(--cyan));
    display: flex; align-items: center; justify-content: center; color: #fff;
}
.nav-title { font-size: 1.25rem; font-weight: 700; }
.nav-links { display: none; gap: 32px; }
.nav-link { font-size: 0.875rem; transition: color 0.2s; }
.nav-link:hover { color: var(--navy); }
@media (min-width: 768px) { .nav-links { display: flex; } }

/* Hero */
.hero { position: relative; overflow: hidden; background: linear-gradient(135deg, #fff, var(--blue-50), #fff); }
.hero-bg { position: absolute; inset: 0; opacity: 0.4; }
.hero-bg img { width: 100%; height: 100%; object-fit: cover; }
.hero-grid { position: relative; z-index: 1; display: grid; gap: 48px; align-items: center; padding: 80px 0; }
@media (min-width: 768px) { .hero-grid { grid-template-columns: 1fr 1fr; padding: 128px 0; } }
.hero-badge {
    display: inline-block; padding: 8px 16px; border-radius: 999px;
    background: #dbeafe; color: var(--navy); font-size: 0.875rem; font-weight: 500;
}
.hero-title { font-size: 3rem; font-weight: 700; line-height: 1.15; margin: 24px 0; }
.hero-description { font-size: 1.125rem; line-height: 1.7; }
.hero-actions { display: flex; gap: 16px; padding-top: 32px; flex-wrap: wrap; }
.hero-visual { display: none; }
.hero-visual img { width: 100%; }
@media (min-width: 768px) { .hero-visual { display: block; } }

/* About cards */
.info-card { display: flex; gap: 16px; align-items: flex-start; padding: 24px; }
.info-icon {
    width: 48px; height: 48px; flex-shrink: 0; border-radius: var(--radius);
    display: flex; align-items: center; justify-content: center;
}
.info-title { font-size: 1rem; font-weight: 700; margin-bottom: 8px; }
.info-text { font-size: 0.875rem; }

/* Pipeline */
.stages { display: flex; flex-direction: column; gap: 24px; }
.stage { display: flex; gap: 24px; align-items: flex-start; }
.stage-number {
    width: 48px; height: 48px; flex-shrink: 0; border-radius: var(--radius);
    display: flex; align-items: center; justify-content: center; font-weight: 700;
}
.stage-card { flex: 1; transition: box-shadow 0.2s; }
.stage-card:hover { box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08); }
.stage-title { font-size: 1.5rem; font-weight: 700; margin-bottom: 12px; }
.stage-summary { margin-bottom: 16px; }
.stage-facts { display: grid; gap: 16px; font-size: 0.875rem; }
@media (min-width: 768px) { .stage-facts { grid-template-columns: 1fr 1fr; } }
.fact-key { font-weight: 600; color: var(--navy); }

/* Bullet lists */
.bullets { list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 12px; }
.bullets li { display: flex; gap: 12px; }
.bullet { font-weight: 700; }
.bullets strong { color: var(--navy); }

/* Demo */
.demo-card { max-width: 56rem; margin: 0 auto; box-shadow: 0 10px 24px rgba(0, 0, 0, 0.08); }
.demo-label { display: block; font-size: 0.875rem; font-weight: 600; color: var(--navy); margin-bottom: 12px; }
.demo-row { display: flex; gap: 12px; }
.demo-input {
    flex: 1; padding: 12px 16px; border: 1px solid var(--gray-300); border-radius: var(--radius);
    font-size: 1rem; font-family: var(--font-body);
}
.demo-input:focus { outline: none; border-color: transparent; box-shadow: 0 0 0 2px var(--cyan); }
.results-panel {
    display: flex; flex-direction: column; gap: 24px;
    margin-top: 24px; padding-top: 24px; border-top: 1px solid var(--gray-200);
    animation: fade-in 0.5s ease-out;
}
@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
.result-group { padding: 24px; border-radius: var(--radius); border-left: 4px solid var(--accent); }
.result-title { font-size: 1rem; font-weight: 700; display: flex; align-items: center; gap: 8px; margin-bottom: 12px; }
.result-badge {
    width: 32px; height: 32px; border-radius: 999px; font-size: 0.875rem; font-weight: 700;
    display: flex; align-items: center; justify-content: center;
}
.result-rows { display: flex; flex-direction: column; gap: 8px; font-size: 0.875rem; }
.result-row { display: flex; justify-content: space-between; }
.result-value { font-weight: 600; color: var(--navy); }
.result-value.highlight { color: var(--cyan); }

/* Charts */
.chart-card .card-title { margin-bottom: 24px; }
.chart { width: 100%; height: auto; display: block; font-family: var(--font-body); }
.chart-grid line { stroke: var(--gray-200); stroke-dasharray: 3 3; }
.chart-axis line { stroke: var(--gray-500); }
.chart-axis text { fill: var(--gray-500); font-size: 12px; }
.chart-bar:hover, .pie-slice:hover { opacity: 0.85; }
.chart-line { fill: none; stroke-width: 2; }
.chart-legend { display: flex; justify-content: center; gap: 16px; font-size: 0.875rem; margin-top: 8px; }
.legend-swatch { display: inline-block; width: 10px; height: 10px; border-radius: 2px; margin-right: 6px; }
.pie-label { font-size: 12px; }

/* KPIs */
.kpi-strip { margin-top: 48px; background: linear-gradient(90deg, var(--blue-50), var(--purple-50)); }
.kpi-strip h3 { font-size: 1.125rem; font-weight: 700; margin-bottom: 16px; }
.kpi-value { font-size: 1.875rem; font-weight: 700; font-family: var(--font-head); }
.kpi-label { font-size: 0.875rem; }

/* Team */
.team-icon {
    width: 64px; height: 64px; border-radius: 999px; margin: 0 auto 16px;
    display: flex; align-items: center; justify-content: center;
}

/* Footer */
.footer { background: var(--navy); color: #fff; padding: 48px 0; }
.footer h4 { color: #fff; font-weight: 700; margin-bottom: 16px; }
.footer-links { list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 8px; font-size: 0.875rem; color: #dbeafe; }
.footer-links a:hover { color: #fff; }
.footer-contact { font-size: 0.875rem; color: #dbeafe; }
.footer-bottom { border-top: 1px solid #60a5fa; margin-top: 32px; padding-top: 32px; text-align: center; font-size: 0.875rem; color: #dbeafe; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn braces_are_balanced() {
        let open = PAGE_CSS.matches('{').count();
        let close = PAGE_CSS.matches('}').count();
        assert_eq!(open, close);
    }

    #[test]
    fn smooth_scrolling_for_anchor_links() {
        assert!(PAGE_CSS.contains("scroll-behavior: smooth"));
    }
}
