//! View descriptions.
//!
//! A run does not draw anything; it produces a [`View`], an ordered list
//! of [`ViewNode`]s describing what a renderer should show. Interactive
//! nodes carry their widget's id and resolved current value so a
//! renderer can both display them and route events back.
//!
//! [`View::render_plain`] is the one renderer shipped here: plain text,
//! used by the CLI and by tests. Anything fancier is a renderer concern,
//! not part of the page contract.

use tabular::Table;
use unicode_width::UnicodeWidthStr;

use crate::snapshot::WidgetId;

/// One displayable element of a page, in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewNode {
    /// Page title.
    Title(String),
    /// A line of static or templated text.
    Text(String),
    /// A tabular dataset rendered as a table.
    Table(Table),
    /// A tabular dataset rendered as a line chart, one series per column.
    LineChart(Table),
    /// A single-line text input.
    TextInput {
        /// Stable widget id.
        id: WidgetId,
        /// Label shown next to the field.
        label: String,
        /// Placeholder shown while the field is empty.
        placeholder: String,
        /// Current field content.
        value: String,
    },
    /// An integer slider.
    Slider {
        /// Stable widget id.
        id: WidgetId,
        /// Label shown next to the slider.
        label: String,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
        /// Current (clamped) position.
        value: i64,
    },
    /// A single-choice dropdown.
    Select {
        /// Stable widget id.
        id: WidgetId,
        /// Label shown next to the dropdown.
        label: String,
        /// The closed option set, in display order.
        options: Vec<String>,
        /// Currently selected option label.
        selected: String,
    },
    /// A file-upload control.
    FileUpload {
        /// Stable widget id.
        id: WidgetId,
        /// Label shown on the control.
        label: String,
        /// Accepted file extension (without the dot).
        accept: String,
        /// Name of the currently accepted file, if any.
        file_name: Option<String>,
        /// Name of a file that was offered but failed the extension
        /// filter, if any.
        rejected: Option<String>,
    },
}

/// An ordered view description produced by one run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct View {
    nodes: Vec<ViewNode>,
}

impl View {
    /// An empty view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append any node.
    pub fn push(&mut self, node: ViewNode) {
        self.nodes.push(node);
    }

    /// Append a title node.
    pub fn title(&mut self, text: impl Into<String>) {
        self.nodes.push(ViewNode::Title(text.into()));
    }

    /// Append a text node.
    pub fn text(&mut self, text: impl Into<String>) {
        self.nodes.push(ViewNode::Text(text.into()));
    }

    /// Append a table node.
    pub fn table(&mut self, table: Table) {
        self.nodes.push(ViewNode::Table(table));
    }

    /// Append a line-chart node.
    pub fn line_chart(&mut self, data: Table) {
        self.nodes.push(ViewNode::LineChart(data));
    }

    /// The nodes in document order.
    #[must_use]
    pub fn nodes(&self) -> &[ViewNode] {
        &self.nodes
    }

    /// Render the view as plain text, one block per node.
    #[must_use]
    pub fn render_plain(&self) -> String {
        let mut lines = Vec::new();
        for node in &self.nodes {
            match node {
                ViewNode::Title(text) => {
                    lines.push(format!("# {text}"));
                    lines.push(String::new());
                }
                ViewNode::Text(text) => lines.push(text.clone()),
                ViewNode::Table(table) => {
                    lines.extend(render_table(table));
                    lines.push(String::new());
                }
                ViewNode::LineChart(data) => {
                    let names = data.column_names().join(", ");
                    lines.push(format!(
                        "[line chart: {} rows x {} series ({names})]",
                        data.n_rows(),
                        data.n_cols(),
                    ));
                }
                ViewNode::TextInput {
                    label,
                    placeholder,
                    value,
                    ..
                } => {
                    let shown = if value.is_empty() { placeholder } else { value };
                    lines.push(format!("{label}: [{shown}]"));
                }
                ViewNode::Slider {
                    label,
                    min,
                    max,
                    value,
                    ..
                } => lines.push(format!("{label}: {value} ({min}-{max})")),
                ViewNode::Select {
                    label,
                    options,
                    selected,
                    ..
                } => {
                    let rendered: Vec<String> = options
                        .iter()
                        .map(|o| {
                            if o == selected {
                                format!("({o})")
                            } else {
                                o.clone()
                            }
                        })
                        .collect();
                    lines.push(format!("{label}: {}", rendered.join(" ")));
                }
                ViewNode::FileUpload {
                    label,
                    accept,
                    file_name,
                    rejected,
                    ..
                } => {
                    let state = match (file_name, rejected) {
                        (Some(name), _) => format!("<{name}>"),
                        (None, Some(name)) => format!("<rejected: {name}>"),
                        (None, None) => "<none>".to_string(),
                    };
                    lines.push(format!("{label} (.{accept}): {state}"));
                }
            }
        }
        lines.join("\n")
    }
}

/// Render a table as aligned plain-text rows.
fn render_table(table: &Table) -> Vec<String> {
    let headers: Vec<String> = table
        .column_names()
        .iter()
        .map(ToString::to_string)
        .collect();
    let mut cells: Vec<Vec<String>> = vec![headers];
    for row in table.rows() {
        cells.push(row.iter().map(ToString::to_string).collect());
    }

    let mut widths = vec![0usize; table.n_cols()];
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    cells
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(i, cell)| {
                    let pad = widths[i].saturating_sub(cell.width());
                    format!("{cell}{}", " ".repeat(pad))
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use tabular::Column;

    use super::*;

    #[test]
    fn plain_render_orders_nodes() {
        let mut view = View::new();
        view.title("Demo");
        view.text("Simple word");

        let out = view.render_plain();
        let title_at = out.find("# Demo").unwrap();
        let text_at = out.find("Simple word").unwrap();
        assert!(title_at < text_at);
    }

    #[test]
    fn table_render_aligns_columns() {
        let table = Table::from_columns(vec![
            Column::texts("Name", ["John", "Jo"]),
            Column::ints("Age", [25, 300]),
        ])
        .unwrap();
        let mut view = View::new();
        view.table(table);

        let out = view.render_plain();
        assert!(out.contains("Name  Age"));
        assert!(out.contains("John  25"));
        assert!(out.contains("Jo    300"));
    }

    #[test]
    fn chart_render_reports_shape() {
        let data = Table::from_columns(vec![
            Column::floats("a", [0.0, 1.0]),
            Column::floats("b", [2.0, 3.0]),
        ])
        .unwrap();
        let mut view = View::new();
        view.line_chart(data);

        assert!(
            view.render_plain()
                .contains("[line chart: 2 rows x 2 series (a, b)]")
        );
    }

    #[test]
    fn text_input_shows_placeholder_when_empty() {
        let mut view = View::new();
        view.push(ViewNode::TextInput {
            id: WidgetId::new("name"),
            label: "Enter your name".into(),
            placeholder: "Type here...".into(),
            value: String::new(),
        });
        assert!(view.render_plain().contains("[Type here...]"));
    }

    #[test]
    fn select_marks_the_selected_option() {
        let mut view = View::new();
        view.push(ViewNode::Select {
            id: WidgetId::new("color"),
            label: "Color".into(),
            options: vec!["Green".into(), "Red".into()],
            selected: "Red".into(),
        });
        assert!(view.render_plain().contains("Green (Red)"));
    }
}
