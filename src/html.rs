use maud::{DOCTYPE, Markup, PreEscaped, html};

/// The stylesheet shared by every page.
const STYLESHEET: &str = include_str!("../assets/dashboard.css");

pub enum HeadElement {
    /// Ask the browser to reload the page after this many seconds.
    Refresh(u32),
}

pub fn base(title: &str, lang: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang)
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Finance Dashboard" }

                style { (PreEscaped(STYLESHEET)) }

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::Refresh(seconds) => {
                            meta http-equiv="refresh" content=(seconds);
                        }
                    }
                }
            }

            body
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class="error-page"
        {
            h1 { (header) }

            p class="description" { (description) }

            p class="fix" { (fix) }

            a href="/" { "Back to Homepage" }
        }
    );

    // The error pages are only written in English.
    base(title, "en", &[], &content)
}
