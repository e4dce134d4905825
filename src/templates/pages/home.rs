// templates/pages/home.rs

use crate::templates::{card, desktop_layout, submit_button};
use maud::{html, Markup};

/// Form field carrying the pasted export.
pub const LISTINGS_FIELD: &str = "listings";

pub fn home_page() -> Markup {
    desktop_layout(
        "Parse an MLS export",
        html! {
            h1 { "Parse an MLS export" }

            (card("Paste the export text", html! {
                p {
                    "Each listing starts at its " code { "MLS#" } " line. "
                    "Everything before the first listing is ignored."
                }
                form method="post" action="/preview" {
                    textarea name=(LISTINGS_FIELD) placeholder="MLS# 12345..." {}
                    div {
                        (submit_button("Preview", "/preview"))
                        (submit_button("Download XLSX", "/parse.xlsx"))
                        (submit_button("Download CSV", "/parse.csv"))
                        (submit_button("JSON", "/parse.json"))
                    }
                }
            }))
        },
    )
}
