use super::*;

#[derive(Clone)]
struct Row {
    id: u32,
    name: &'static str,
}

impl TableRow for Row {
    fn row_id(&self) -> String {
        format!("row-{}", self.id)
    }
}

// =============================================================
// body_mode
// =============================================================

#[test]
fn loading_wins_over_data() {
    assert_eq!(body_mode(true, 0), BodyMode::Loading);
    assert_eq!(body_mode(true, 42), BodyMode::Loading);
}

#[test]
fn empty_when_not_loading_and_no_rows() {
    assert_eq!(body_mode(false, 0), BodyMode::Empty);
}

#[test]
fn rows_when_data_present() {
    assert_eq!(body_mode(false, 1), BodyMode::Rows);
    assert_eq!(body_mode(false, 1000), BodyMode::Rows);
}

#[test]
fn skeleton_count_is_five() {
    assert_eq!(SKELETON_ROWS, 5);
}

// =============================================================
// Column
// =============================================================

#[test]
fn column_new_has_no_class_until_set() {
    let col = Column::new("name", "Name", |row: &Row| row.name);
    assert_eq!(col.key, "name");
    assert_eq!(col.header, "Name");
    assert_eq!(col.class, None);

    let styled = col.with_class("data-table__cell--mono");
    assert_eq!(styled.class, Some("data-table__cell--mono"));
}

#[test]
fn column_clone_shares_renderer() {
    let col = Column::new("id", "Id", |row: &Row| row.id.to_string()).with_class("num");
    let copy = col.clone();
    assert_eq!(copy.key, col.key);
    assert_eq!(copy.header, col.header);
    assert_eq!(copy.class, col.class);
    assert!(Arc::ptr_eq(&copy.render, &col.render));
}

#[test]
fn columns_keep_declared_order() {
    let cols = [
        Column::new("b", "B", |row: &Row| row.name),
        Column::new("a", "A", |row: &Row| row.name),
        Column::new("c", "C", |row: &Row| row.name),
    ];
    let keys: Vec<&str> = cols.iter().map(|c| c.key).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[test]
fn row_identity_comes_from_row_id() {
    let row = Row { id: 7, name: "x" };
    assert_eq!(row.row_id(), "row-7");
}

// =============================================================
// Row classes
// =============================================================

#[test]
fn interactive_rows_get_clickable_class() {
    assert!(row_class(true).contains("data-table__row--clickable"));
    assert!(!row_class(false).contains("clickable"));
}

// =============================================================
// Rendered markup
// =============================================================

#[cfg(feature = "ssr")]
mod render {
    use super::*;

    fn rows() -> Vec<Row> {
        vec![Row { id: 1, name: "alpha" }, Row { id: 2, name: "beta" }, Row { id: 3, name: "gamma" }]
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("id", "Id", |row: &Row| format!("id-{}", row.id)),
            Column::new("name", "Name", |row: &Row| row.name).with_class("data-table__cell--mono"),
        ]
    }

    fn render(data: Vec<Row>, loading: bool) -> String {
        Owner::new().with(|| {
            view! {
                <DataTable
                    columns=Signal::stored(columns())
                    data=Signal::stored(data)
                    is_loading=Signal::stored(loading)
                />
            }
            .to_html()
        })
    }

    fn count(html: &str, needle: &str) -> usize {
        html.matches(needle).count()
    }

    #[test]
    fn populated_renders_one_row_per_record_and_one_cell_per_column() {
        let html = render(rows(), false);
        assert_eq!(count(&html, "<tr"), 4);
        assert_eq!(count(&html, "<td"), 6);
        assert_eq!(count(&html, "data-table__empty"), 0);
        assert!(html.contains(r#"data-row-id="row-2""#));
    }

    #[test]
    fn populated_cells_follow_column_and_row_order() {
        let html = render(rows(), false);
        let at = |needle: &str| html.find(needle).unwrap();
        assert!(at("Id") < at("Name"));
        assert!(at("id-1") < at("alpha"));
        assert!(at("alpha") < at("id-2"));
        assert!(at("beta") < at("id-3"));
        assert!(at("id-3") < at("gamma"));
    }

    #[test]
    fn loading_renders_five_skeleton_rows_whatever_the_data() {
        for data in [Vec::new(), rows()] {
            let html = render(data, true);
            assert_eq!(count(&html, "<tr"), 1 + SKELETON_ROWS);
            assert_eq!(count(&html, "data-table__skeleton"), SKELETON_ROWS * 2);
            assert!(!html.contains("alpha"));
            assert!(!html.contains("data-table__empty"));
        }
    }

    #[test]
    fn empty_renders_no_body_rows_and_the_empty_state() {
        let html = render(Vec::new(), false);
        assert_eq!(count(&html, "<tr"), 1);
        assert_eq!(count(&html, "<td"), 0);
        assert!(html.contains("data-table__empty"));
    }

    #[test]
    fn unclassed_columns_render_without_class_attribute() {
        let html = render(rows(), false);
        assert!(!html.contains(r#"class="""#));
        assert!(html.contains(r#"<th data-key="id""#));
        assert!(html.contains(r#"<th class="data-table__cell--mono" data-key="name""#));
        assert_eq!(count(&html, r#"<td class="data-table__cell--mono""#), 3);
        assert_eq!(count(&html, "<td>"), 3);
    }

    #[test]
    fn loading_cells_keep_the_column_class() {
        let html = render(Vec::new(), true);
        assert!(!html.contains(r#"class="""#));
        assert_eq!(count(&html, r#"<td class="data-table__cell--mono""#), SKELETON_ROWS);
    }
}
