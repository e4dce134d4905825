use crate::domain::Record;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct PreviewVm<'a> {
    pub columns: &'a [String],
    pub records: &'a [Record],
    pub rows: usize,
}

/// Head of the parsed table, every column, first `rows` listings.
pub fn preview_page(vm: &PreviewVm<'_>) -> Markup {
    desktop_layout(
        "Parsed listings",
        html! {
            div class="flex items-center justify-between mb-3" {
                p {
                    "Found " strong { (vm.records.len()) } " listings"
                    @if vm.records.len() > vm.rows {
                        ", showing the first " (vm.rows)
                    }
                    "."
                }
            }

            div class="table-wrap" {
                table {
                    thead {
                        tr {
                            @for column in vm.columns {
                                th scope="col" { (column) }
                            }
                        }
                    }
                    tbody {
                        @for record in vm.records.iter().take(vm.rows) {
                            tr {
                                @for value in record.values_for(vm.columns) {
                                    td { (value) }
                                }
                            }
                        }
                    }
                }
            }

            p { a href="/" { "Parse another export" } }
        },
    )
}
