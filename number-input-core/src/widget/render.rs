use super::FieldMode;

/// What the host needs to draw the text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldView<'a> {
    pub id: Option<&'a str>,
    pub class: Option<&'a str>,
    /// Lets the host style an active field differently.
    pub mode: FieldMode,
    pub value: &'a str,
}

/// The rendering side of the widget.
///
/// Implementors draw a single-line text field holding `view.value` and are
/// responsible for delivering focus, change and blur notifications back to
/// the [`NumberInput`](crate::NumberInput).
pub trait FieldRenderer {
    fn render_field(
        &mut self,
        view: &FieldView<'_>,
    );
}

impl<F> FieldRenderer for F
where
    F: FnMut(&FieldView<'_>),
{
    fn render_field(
        &mut self,
        view: &FieldView<'_>,
    ) {
        self(view)
    }
}
