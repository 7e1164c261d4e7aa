//! This file defines the page header and its navigation links.

use maud::{Markup, html};

use crate::endpoints;

/// A link in the header.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "nav-link current"
        } else {
            "nav-link"
        };

        html!( a href=(self.url) class=(style) { (self.title) } )
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Get the header.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        let links = vec![Link {
            url: endpoints::DASHBOARD_VIEW,
            title: "Dashboard",
            is_current: active_endpoint == endpoints::DASHBOARD_VIEW,
        }];

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        html! {
            header class="site-header"
            {
                nav
                {
                    a href=(endpoints::ROOT) class="brand" { "Finance Dashboard" }

                    div
                    {
                        @for link in self.links {
                            (link.into_html())
                        }
                    }
                }
            }
        }
    }
}
