/// Which controller owns a click on a link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// `href` starts with `#`: smooth scroll, never a page transition.
    InPage,
    SameOrigin,
    External,
}

pub fn classify_link(href: Option<&str>, link_hostname: Option<&str>, page_hostname: &str) -> LinkKind {
    let Some(href) = href else {
        return LinkKind::External;
    };
    if href.starts_with('#') {
        return LinkKind::InPage;
    }
    match link_hostname {
        Some(host) if host == page_hostname => LinkKind::SameOrigin,
        _ => LinkKind::External,
    }
}
