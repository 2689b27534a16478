use yew::prelude::*;

use super::reveal_card::RevealCard;

// Transition delay step per card family, in seconds.
const FEATURE_STEP: f64 = 0.1;
const BLOG_STEP: f64 = 0.2;
const TESTIMONIAL_STEP: f64 = 0.15;

const FEATURES: &[(&str, &str, &str)] = &[
    ("🎯", "Accurate Measurement", "Estimate DPI from a real hand movement over a known distance."),
    ("⚡", "Instant Results", "The estimate updates live while you drag."),
    ("📏", "Any Unit", "Measure in inches, centimeters or millimeters."),
    ("🔒", "Runs Locally", "Nothing is uploaded. Every calculation happens in your browser."),
    ("🖱️", "Works With Any Mouse", "Gaming, office or travel mice all work the same way."),
    ("🆓", "Completely Free", "No sign-up and no install."),
];

const POSTS: &[(&str, &str)] = &[
    ("What DPI actually means", "Dots per inch describes how far the cursor travels for each inch of hand movement."),
    ("DPI vs. sensitivity", "Why in-game sensitivity and sensor DPI are two different knobs."),
    ("Picking a DPI for gaming", "Common ranges for shooters, MOBAs and strategy games."),
];

const TESTIMONIALS: &[(&str, &str)] = &[
    ("Finally found out my old mouse runs at 1200, not 800.", "Jordan, FPS player"),
    ("Quick to use and the repeat-and-average tip made my numbers consistent.", "Sam, designer"),
    ("I check every new mouse here before tuning my setup.", "Riley, streamer"),
];

#[function_component(FeatureGrid)]
pub fn feature_grid() -> Html {
    html! {
        <section id="features" class="features">
            <h2>{"Why Use MouseDPI Pro"}</h2>
            <div class="feature-grid">
                { for FEATURES.iter().enumerate().map(|(i, (icon, title, text))| html! {
                    <RevealCard class="feature-card" delay_secs={i as f64 * FEATURE_STEP}>
                        <div class="feature-icon">{ *icon }</div>
                        <h3>{ *title }</h3>
                        <p>{ *text }</p>
                    </RevealCard>
                }) }
            </div>
        </section>
    }
}

#[function_component(BlogSection)]
pub fn blog_section() -> Html {
    html! {
        <section id="blog" class="blog">
            <h2>{"From the Blog"}</h2>
            <div class="blog-grid">
                { for POSTS.iter().enumerate().map(|(i, (title, summary))| html! {
                    <RevealCard class="blog-card" delay_secs={i as f64 * BLOG_STEP}>
                        <h3>{ *title }</h3>
                        <p>{ *summary }</p>
                    </RevealCard>
                }) }
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="testimonials">
            <h2>{"What Users Say"}</h2>
            <div class="testimonial-grid">
                { for TESTIMONIALS.iter().enumerate().map(|(i, (quote, who))| html! {
                    <RevealCard class="testimonial-card" delay_secs={i as f64 * TESTIMONIAL_STEP}>
                        <blockquote>{ *quote }</blockquote>
                        <cite>{ *who }</cite>
                    </RevealCard>
                }) }
            </div>
        </section>
    }
}
