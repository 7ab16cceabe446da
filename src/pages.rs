//! Client-side routes of the single-page app.
//!
//! The server answers every one of these paths with the same HTML shell; the
//! page key written into the shell tells the browser bundle which view to
//! mount. Anything else gets the not-found view.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Adopt,
    Donate,
    Newsletter,
    Shop,
    Signup,
    NotFound,
}

/// An API call a page makes when it is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Read(&'static str),
    Write(&'static str),
}

impl Page {
    pub const ROUTED: [Page; 7] = [
        Page::Home,
        Page::About,
        Page::Adopt,
        Page::Donate,
        Page::Newsletter,
        Page::Shop,
        Page::Signup,
    ];

    pub fn from_path(path: &str) -> Page {
        let trimmed = path.trim_end_matches('/');
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
        Page::ROUTED
            .into_iter()
            .find(|p| p.path() == trimmed)
            .unwrap_or(Page::NotFound)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Adopt => "/adopt",
            Page::Donate => "/donate",
            Page::Newsletter => "/newsletter",
            Page::Shop => "/shop",
            Page::Signup => "/signup",
            Page::NotFound => "",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Adopt => "adopt",
            Page::Donate => "donate",
            Page::Newsletter => "newsletter",
            Page::Shop => "shop",
            Page::Signup => "signup",
            Page::NotFound => "not-found",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "FurryHaven - Rescue, Rehabilitate, Rehome",
            Page::About => "About Us | FurryHaven",
            Page::Adopt => "Adopt a Pet | FurryHaven",
            Page::Donate => "Donate | FurryHaven",
            Page::Newsletter => "Newsletter | FurryHaven",
            Page::Shop => "Shop | FurryHaven",
            Page::Signup => "Sign Up | FurryHaven",
            Page::NotFound => "Page Not Found | FurryHaven",
        }
    }

    pub fn resources(&self) -> &'static [Resource] {
        match self {
            Page::Home => &[Resource::Read("/api/animals")],
            // The type filter swaps the full list for the per-type read.
            Page::Adopt => &[Resource::Read("/api/animals"), Resource::Read("/api/animals/type/{type}")],
            Page::Donate => &[Resource::Read("/api/donations")],
            Page::Shop => &[Resource::Read("/api/shop")],
            Page::Newsletter => &[Resource::Write("/api/newsletter/subscribe")],
            Page::Signup => &[Resource::Write("/api/users/register")],
            Page::About | Page::NotFound => &[],
        }
    }

    pub fn is_found(&self) -> bool {
        *self != Page::NotFound
    }
}

/// Used when no `index.html` is found under the static directory.
pub const DEFAULT_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{title}}</title>
  </head>
  <body>
    <div id="root" data-page="{{page}}"></div>
    <script type="module" src="/assets/app.js"></script>
  </body>
</html>
"#;

pub fn render_shell(template: &str, page: Page) -> String {
    template
        .replace("{{title}}", page.title())
        .replace("{{page}}", page.key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path("/adopt"), Page::Adopt);
        assert_eq!(Page::from_path("/shop/"), Page::Shop);
        assert_eq!(Page::from_path("/signup"), Page::Signup);
    }

    #[test]
    fn everything_else_is_not_found() {
        assert_eq!(Page::from_path("/adopt/5"), Page::NotFound);
        assert_eq!(Page::from_path("/Shop"), Page::NotFound);
        assert_eq!(Page::from_path("/contact"), Page::NotFound);
        assert!(!Page::NotFound.is_found());
    }

    #[test]
    fn every_routed_page_round_trips_its_path() {
        for page in Page::ROUTED {
            assert_eq!(Page::from_path(page.path()), page);
        }
    }

    #[test]
    fn pages_read_their_resources() {
        assert_eq!(Page::Home.resources(), &[Resource::Read("/api/animals")]);
        assert_eq!(
            Page::Adopt.resources(),
            &[Resource::Read("/api/animals"), Resource::Read("/api/animals/type/{type}")]
        );
        assert_eq!(Page::Signup.resources(), &[Resource::Write("/api/users/register")]);
        assert!(Page::About.resources().is_empty());
    }

    #[test]
    fn shell_gets_title_and_key() {
        let html = render_shell(DEFAULT_SHELL, Page::Donate);
        assert!(html.contains("<title>Donate | FurryHaven</title>"));
        assert!(html.contains(r#"data-page="donate""#));
        assert!(!html.contains("{{"));
    }
}
