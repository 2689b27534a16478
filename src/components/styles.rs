// Supplemental rules rendered into the page alongside the site stylesheet.
pub const PAGE_STYLES: &str = r#"
.error {
    border: 2px solid #ef4444 !important;
    background-color: #fef2f2 !important;
}

.feature-card, .blog-card, .testimonial-card {
    will-change: opacity, transform;
}

#dpi-value {
    transition: transform 0.15s ease;
}

.test-area {
    transition: all 0.3s ease, transform 0.2s ease;
}

.test-area.testing {
    cursor: crosshair;
}

.nav-menu.active {
    display: flex;
}

.faq-answer {
    overflow: hidden;
    transition: max-height 0.3s ease;
}

.success-message, .error-message {
    position: fixed;
    right: 20px;
    bottom: 20px;
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.3s ease, transform 0.3s ease;
    z-index: 1000;
}

.success-message.show, .error-message.show {
    opacity: 1;
    transform: translateY(0);
}
"#;
