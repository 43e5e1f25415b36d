/// Rules the controllers depend on: the reveal keyframes, the page fade and
/// the three-bar toggle icon states.
pub const SITE_STYLESHEET: &str = r#"
    .showcase-card.revealed {
        animation: fadeInUp 0.6s ease forwards;
    }

    @keyframes fadeInUp {
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }

    .page-transition {
        opacity: 0;
        transition: opacity 0.5s ease;
    }

    .mobile-menu-toggle.active span:nth-child(1) {
        transform: rotate(45deg) translate(5px, 5px);
    }

    .mobile-menu-toggle.active span:nth-child(2) {
        opacity: 0;
    }

    .mobile-menu-toggle.active span:nth-child(3) {
        transform: rotate(-45deg) translate(7px, -6px);
    }
"#;

/// `id` given to the injected `<style>` so a second install is a no-op.
pub const STYLESHEET_ID: &str = "karmakazi-site-styles";
