use maud::{html, Markup};

pub mod error;

pub use error::html_error_response;

/// Submit button that posts the enclosing form to `action`.
pub fn submit_button(label: &str, action: &str) -> Markup {
    html! {
        button class="btn" type="submit" formaction=(action) { (label) }
    }
}

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
