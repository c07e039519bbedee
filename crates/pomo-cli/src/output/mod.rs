use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod history;
pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Table options from the detected terminal preferences.
#[must_use]
pub fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Sessions and audit entries render one row per item with a column per
/// field; a single object renders as `field | value` pairs.
fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let (headers, rows) = match serde_json::to_value(value)? {
        Value::Array(items) if items.is_empty() => return Ok(String::from("(no rows)")),
        Value::Array(items) => item_rows(&items),
        Value::Object(map) => (
            vec![String::from("field"), String::from("value")],
            map.iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect(),
        ),
        scalar => (vec![String::from("value")], vec![vec![value_to_cell(&scalar)]]),
    };

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    Ok(table::render_entity_table(&header_refs, &rows, table_options()))
}

fn item_rows(items: &[Value]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut headers = Vec::<String>::new();
    for key in items.iter().filter_map(Value::as_object).flat_map(|map| map.keys()) {
        if !headers.contains(key) {
            headers.push(key.clone());
        }
    }

    if headers.is_empty() {
        let rows = items.iter().map(|item| vec![value_to_cell(item)]).collect();
        return (vec![String::from("value")], rows);
    }

    let rows = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|header| item.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect()
        })
        .collect();
    (headers, rows)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(v) => v.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: i64,
        goal: &'static str,
        work_log: Option<&'static str>,
    }

    const EXAMPLE: Example = Example {
        id: 7,
        goal: "write",
        work_log: None,
    };

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&EXAMPLE, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], 7);
        assert_eq!(parsed["goal"], "write");
        assert!(parsed["work_log"].is_null());
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&EXAMPLE, OutputFormat::Raw).expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], 7);
        assert!(!out.contains('\n'));
    }

    #[test]
    fn object_renders_field_value_pairs() {
        let out = render(&EXAMPLE, OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("field"));
        assert!(lines.iter().any(|line| line.starts_with("goal") && line.contains("write")));
        assert!(lines.iter().any(|line| line.starts_with("work_log") && line.contains('-')));
    }

    #[test]
    fn empty_array_renders_placeholder() {
        let out = render(&Vec::<serde_json::Value>::new(), OutputFormat::Table)
            .expect("table render should work");
        assert_eq!(out, "(no rows)");
    }

    #[test]
    fn array_of_objects_uses_union_of_keys() {
        let items = serde_json::json!([
            {"id": 1, "goal": "write"},
            {"id": 2, "reward_plan": "tea"},
        ]);
        let out = render(&items, OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("goal"));
        assert!(lines[0].contains("reward_plan"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn array_of_scalars_renders_single_column() {
        let out = render(&[1, 2, 3], OutputFormat::Table).expect("table render should work");
        assert!(out.starts_with("value"));
        assert_eq!(out.lines().count(), 5);
    }
}
