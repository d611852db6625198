//! Text renderers standing in for a real text field.

use clap::ValueEnum;
use number_input_core::{FieldRenderer, FieldView};

/// How a rendered field is written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputStyle {
    /// `id mode value`
    #[default]
    Plain,
    /// `<input type="text" ...>`
    Markup,
}

/// Renders a field into a single line of text.
#[derive(Debug)]
pub struct LineRenderer {
    style: OutputStyle,
    line: String,
}

impl LineRenderer {
    pub fn new(style: OutputStyle) -> Self {
        Self {
            style,
            line: String::new(),
        }
    }

    pub fn into_line(self) -> String {
        self.line
    }
}

impl FieldRenderer for LineRenderer {
    fn render_field(
        &mut self,
        view: &FieldView<'_>,
    ) {
        self.line = match self.style {
            OutputStyle::Plain => plain(view),
            OutputStyle::Markup => markup(view),
        };
    }
}

fn plain(view: &FieldView<'_>) -> String {
    format!("{} {} {}", view.id.unwrap_or("-"), view.mode, view.value)
}

fn markup(view: &FieldView<'_>) -> String {
    let mut out = String::from(r#"<input type="text""#);
    if let Some(id) = view.id {
        out.push_str(&format!(r#" id="{}""#, escape_attr(id)));
    }
    if let Some(class) = view.class {
        out.push_str(&format!(r#" class="{}""#, escape_attr(class)));
    }
    out.push_str(&format!(r#" value="{}">"#, escape_attr(view.value)));
    out
}

fn escape_attr(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
