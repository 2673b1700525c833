use axum::http::Uri;
use serde::Serialize;

/// Informational pages rendered straight from a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    SizeGuide,
    Contact,
    About,
    Faq,
    Terms,
    Privacy,
    Cookies,
    Returns,
    Shipping,
}

impl Page {
    pub const ALL: [Page; 10] = [
        Page::Home,
        Page::SizeGuide,
        Page::Contact,
        Page::About,
        Page::Faq,
        Page::Terms,
        Page::Privacy,
        Page::Cookies,
        Page::Returns,
        Page::Shipping,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::SizeGuide => "/size-guide",
            Page::Contact => "/contact",
            Page::About => "/about",
            Page::Faq => "/faq",
            Page::Terms => "/terms",
            Page::Privacy => "/privacy",
            Page::Cookies => "/cookies",
            Page::Returns => "/returns",
            Page::Shipping => "/shipping",
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            Page::Home => "home.html",
            Page::SizeGuide => "size_guide.html",
            Page::Contact => "contact.html",
            Page::About => "about.html",
            Page::Faq => "faq.html",
            Page::Terms => "terms.html",
            Page::Privacy => "privacy.html",
            Page::Cookies => "cookies.html",
            Page::Returns => "returns.html",
            Page::Shipping => "shipping.html",
        }
    }
}

/// Legacy paths that point at pages owned by the route groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Catalog,
    AdminDashboard,
    AdminUsers,
}

impl Shortcut {
    pub const ALL: [Shortcut; 3] = [
        Shortcut::Catalog,
        Shortcut::AdminDashboard,
        Shortcut::AdminUsers,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Shortcut::Catalog => "/catalog",
            Shortcut::AdminDashboard => "/admin/dashboard",
            Shortcut::AdminUsers => "/admin/users",
        }
    }

    pub fn target(self) -> &'static str {
        match self {
            Shortcut::Catalog => "/products/",
            Shortcut::AdminDashboard => "/products/admin/dashboard",
            Shortcut::AdminUsers => "/auth/admin/users",
        }
    }
}

/// The request as seen by templates.
#[derive(Debug, Clone, Serialize)]
pub struct RequestContext {
    pub path: String,
    pub query: Option<String>,
}

impl From<&Uri> for RequestContext {
    fn from(uri: &Uri) -> Self {
        RequestContext {
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_page_paths_and_templates_are_unique() {
        let paths: HashSet<_> = Page::ALL.iter().map(|p| p.path()).collect();
        let templates: HashSet<_> = Page::ALL.iter().map(|p| p.template()).collect();
        assert_eq!(paths.len(), Page::ALL.len());
        assert_eq!(templates.len(), Page::ALL.len());
    }

    #[test]
    fn test_shortcuts_do_not_shadow_pages() {
        for shortcut in Shortcut::ALL {
            assert!(Page::ALL.iter().all(|p| p.path() != shortcut.path()));
        }
    }

    #[test]
    fn test_request_context_from_uri() {
        let uri: Uri = "/products/?category=boots".parse().unwrap();
        let ctx = RequestContext::from(&uri);
        assert_eq!(ctx.path, "/products/");
        assert_eq!(ctx.query.as_deref(), Some("category=boots"));
    }
}
