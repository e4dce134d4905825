use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (LAYOUT_CSS) }
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  svg
                      xmlns="http://www.w3.org/2000/svg"
                      width="24"
                      height="24"
                      viewBox="0 0 24 24"
                      fill="none"
                      stroke="#524ed2"
                      stroke-width="2"
                      stroke-linecap="round"
                      stroke-linejoin="round"
                      class="icon icon-tabler icon-tabler-home"
                  {
                      path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                      path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                      path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                      path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                  }
                  h3 { "MLS Sales Parser" }
                  nav {
                      ul {
                          li { a href="/" { "Parse an export" } }
                      }
                  }
              }
              main class="px-6 py-4" {
                  (content)
              }
            }
        }
    }
}

const LAYOUT_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; }
header { display: flex; gap: 1rem; align-items: center; }
nav ul { list-style: none; display: flex; gap: 1rem; padding: 0; }
textarea { width: 100%; min-height: 24rem; font-family: ui-monospace, monospace; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; margin-top: 1rem; }
.btn { padding: 0.5rem 1rem; margin-right: 0.5rem; }
.table-wrap { overflow-x: auto; }
table { border-collapse: collapse; font-size: 0.8rem; }
th, td { border: 1px solid #e5e7eb; padding: 0.25rem 0.5rem; white-space: pre-wrap; vertical-align: top; }
"#;
