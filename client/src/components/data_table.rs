//! Generic table with loading, empty and populated modes.
//!
//! DESIGN
//! ======
//! Columns carry their own cell renderer, so one component serves every
//! record type. The table never sorts, filters or paginates; callers hand it
//! the rows they want shown, in order.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::icon::SvgIcon;
use crate::state::language::use_language;
use crate::util::icons::Icon;

/// Placeholder rows rendered while data loads.
pub const SKELETON_ROWS: usize = 5;

/// A record the table can render. `row_id` must be unique within a table.
pub trait TableRow {
    fn row_id(&self) -> String;
}

type CellRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// One table column: header text plus a per-row cell renderer.
pub struct Column<T> {
    pub key: &'static str,
    pub header: String,
    pub class: Option<&'static str>,
    render: CellRenderer<T>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self { key: self.key, header: self.header.clone(), class: self.class, render: Arc::clone(&self.render) }
    }
}

impl<T> Column<T> {
    pub fn new<V, F>(key: &'static str, header: impl Into<String>, render: F) -> Self
    where
        V: IntoView + 'static,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        Self { key, header: header.into(), class: None, render: Arc::new(move |row| render(row).into_any()) }
    }

    /// Style class applied to the header and every cell of this column.
    #[must_use]
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn render(&self, row: &T) -> AnyView {
        (self.render)(row)
    }
}

/// Which body the table shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyMode {
    Loading,
    Empty,
    Rows,
}

/// Loading wins over data; otherwise an empty list shows the empty state.
#[must_use]
pub fn body_mode(is_loading: bool, row_count: usize) -> BodyMode {
    if is_loading {
        BodyMode::Loading
    } else if row_count == 0 {
        BodyMode::Empty
    } else {
        BodyMode::Rows
    }
}

/// Class list for a body row.
fn row_class(interactive: bool) -> &'static str {
    if interactive { "data-table__row data-table__row--clickable" } else { "data-table__row" }
}

/// Header cell; the class attribute is left off when the column has none.
fn header_cell(key: &'static str, class: Option<&'static str>, header: String) -> AnyView {
    match class {
        Some(class) => view! { <th class=class data-key=key>{header}</th> }.into_any(),
        None => view! { <th data-key=key>{header}</th> }.into_any(),
    }
}

fn body_cell(class: Option<&'static str>, content: AnyView) -> AnyView {
    match class {
        Some(class) => view! { <td class=class>{content}</td> }.into_any(),
        None => view! { <td>{content}</td> }.into_any(),
    }
}

#[component]
pub fn DataTable<T>(
    columns: Signal<Vec<Column<T>>>,
    data: Signal<Vec<T>>,
    #[prop(optional)] is_loading: Option<Signal<bool>>,
    /// Defaults to the generic "no records" text of the active language.
    #[prop(optional)]
    empty_message: Option<Signal<String>>,
    #[prop(optional)] on_row_click: Option<Callback<T>>,
) -> impl IntoView
where
    T: TableRow + Clone + Send + Sync + 'static,
{
    let lang = use_language();
    let mode = Memo::new(move |_| body_mode(is_loading.is_some_and(|s| s.get()), data.with(Vec::len)));
    let interactive = on_row_click.is_some();

    let header = move || {
        columns
            .get()
            .into_iter()
            .map(|col| header_cell(col.key, col.class, col.header))
            .collect_view()
    };

    let body = move || {
        let cols = columns.get();
        match mode.get() {
            BodyMode::Loading => (0..SKELETON_ROWS)
                .map(|_| {
                    let cells = cols
                        .iter()
                        .map(|col| body_cell(col.class, view! { <span class="data-table__skeleton"></span> }.into_any()))
                        .collect_view();
                    view! { <tr class="data-table__row data-table__row--skeleton" aria-hidden="true">{cells}</tr> }
                })
                .collect_view()
                .into_any(),
            BodyMode::Empty => ().into_any(),
            BodyMode::Rows => data
                .get()
                .into_iter()
                .map(|row| {
                    let cells = cols.iter().map(|col| body_cell(col.class, col.render(&row))).collect_view();
                    let row_id = row.row_id();
                    let clicked = row.clone();
                    let pressed = row;
                    view! {
                        <tr
                            class=row_class(interactive)
                            data-row-id=row_id
                            role=interactive.then_some("button")
                            tabindex=interactive.then_some("0")
                            on:click=move |_| {
                                if let Some(cb) = on_row_click {
                                    cb.run(clicked.clone());
                                }
                            }
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() != "Enter" {
                                    return;
                                }
                                if let Some(cb) = on_row_click {
                                    cb.run(pressed.clone());
                                }
                            }
                        >
                            {cells}
                        </tr>
                    }
                })
                .collect_view()
                .into_any(),
        }
    };

    let empty_text = move || empty_message.map_or_else(|| lang.text().table.empty.to_owned(), |msg| msg.get());

    view! {
        <div class="data-table">
            <table class="data-table__table">
                <thead>
                    <tr>{header}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
            <Show when=move || mode.get() == BodyMode::Empty>
                <div class="data-table__empty">
                    <SvgIcon icon=Icon::Inbox class="data-table__empty-icon"/>
                    <p>{empty_text}</p>
                </div>
            </Show>
        </div>
    }
}
