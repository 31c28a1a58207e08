// Page navigation: the fixed page enumeration and the per-session selection register.
// The renderer receives the selected PageId explicitly; nothing reads a global.

pub mod session;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

pub use session::SessionRegistry;

/// One of the six navigation targets, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Resume,
    Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a navigable page")]
pub struct InvalidPage(pub String);

impl PageId {
    pub const ALL: [PageId; 6] = [
        PageId::Home,
        PageId::About,
        PageId::Skills,
        PageId::Projects,
        PageId::Resume,
        PageId::Contact,
    ];

    /// URL path segment, e.g. `/pages/projects`.
    pub fn slug(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Skills => "skills",
            PageId::Projects => "projects",
            PageId::Resume => "resume",
            PageId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::About => "About",
            PageId::Skills => "Skills",
            PageId::Projects => "Projects",
            PageId::Resume => "Resume",
            PageId::Contact => "Contact",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PageId {
    type Err = InvalidPage;

    /// Accepts the slug or the display label, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PageId::ALL
            .into_iter()
            .find(|p| p.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InvalidPage(s.to_string()))
    }
}

/// Current-selection register. Starts on Home; only `select` mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NavigationState {
    current: PageId,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> PageId {
        self.current
    }

    /// Selects a page by slug or label. An unknown value leaves the state untouched.
    pub fn select(&mut self, page: &str) -> Result<PageId, InvalidPage> {
        let page = page.parse::<PageId>()?;
        self.select_page(page);
        Ok(page)
    }

    pub fn select_page(&mut self, page: PageId) {
        self.current = page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_page_is_home() {
        assert_eq!(NavigationState::new().current_page(), PageId::Home);
    }

    #[test]
    fn test_select_updates_current_page() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.select("projects"), Ok(PageId::Projects));
        assert_eq!(nav.current_page(), PageId::Projects);
    }

    #[test]
    fn test_select_accepts_display_label() {
        let mut nav = NavigationState::new();
        nav.select("Resume").unwrap();
        assert_eq!(nav.current_page(), PageId::Resume);
        nav.select("  CONTACT ").unwrap();
        assert_eq!(nav.current_page(), PageId::Contact);
    }

    #[test]
    fn test_home_projects_home_round_trip() {
        let mut nav = NavigationState::new();
        nav.select("home").unwrap();
        nav.select("projects").unwrap();
        nav.select("home").unwrap();
        assert_eq!(nav.current_page(), PageId::Home);
    }

    #[test]
    fn test_invalid_page_is_a_no_op() {
        let mut nav = NavigationState::new();
        nav.select("skills").unwrap();
        let err = nav.select("blog").unwrap_err();
        assert_eq!(err, InvalidPage("blog".to_string()));
        assert_eq!(nav.current_page(), PageId::Skills);
    }

    #[test]
    fn test_empty_selection_is_invalid() {
        let mut nav = NavigationState::new();
        assert!(nav.select("").is_err());
        assert_eq!(nav.current_page(), PageId::Home);
    }

    #[test]
    fn test_every_page_parses_from_its_slug() {
        for page in PageId::ALL {
            assert_eq!(page.slug().parse::<PageId>(), Ok(page));
            assert_eq!(page.label().parse::<PageId>(), Ok(page));
        }
    }
}
