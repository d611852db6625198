use tracing::{debug, trace};

use crate::numeric::{parse_optional_value, strip_separators};

use super::{Callback, ComponentState, FieldMode, FieldRenderer, FieldView, NumberInputProps};

/// A number input field with comma grouping outside of editing.
///
/// The host owns one `NumberInput` per mounted field, forwards every focus,
/// change and blur notification to it in delivery order and re-renders with
/// [`display`](Self::display) (or [`render`](Self::render)) afterwards. Each
/// handler updates the state completely before any callback runs, and fires
/// at most one callback.
///
/// # Example
///
/// ```
/// use number_input_core::{NumberInput, NumberInputProps};
///
/// let mut input = NumberInput::mount(NumberInputProps::new(900_000).id("amount"));
/// assert_eq!(input.display(), "900,000");
///
/// input.focus();
/// input.change("-1000000");
/// assert_eq!(input.display(), "-1000000");
///
/// input.blur();
/// assert_eq!(input.display(), "-1,000,000");
/// ```
#[derive(Debug)]
pub struct NumberInput {
    props: NumberInputProps,
    state: ComponentState,
}

impl NumberInput {
    /// Creates the instance in view mode, showing the grouped `props.value`.
    pub fn mount(props: NumberInputProps) -> Self {
        let state = ComponentState::viewing(props.value);
        debug!(id = ?props.id, value = props.value, "number input mounted");
        Self { props, state }
    }

    /// Enters edit mode and shows the raw text without separators.
    pub fn focus(&mut self) {
        if !self.state.is_editing() {
            self.state.raw = strip_separators(&self.state.raw);
        }
        self.enter(FieldMode::Editing);

        let value = parse_optional_value(&self.state.raw);
        emit(&mut self.props.on_focus, value, self.props.id.as_deref());
    }

    /// Takes the text produced by the user's edit verbatim.
    ///
    /// The field stays (or, if the host skipped the focus notification,
    /// becomes) editable, and the text is shown exactly as typed, including
    /// zero-only, negative or incomplete input.
    pub fn change(
        &mut self,
        raw_text: &str,
    ) {
        self.state.raw = raw_text.to_string();
        self.enter(FieldMode::Editing);

        let value = parse_optional_value(raw_text);
        emit(&mut self.props.on_change, value, self.props.id.as_deref());
    }

    /// Leaves edit mode; the field shows the grouped form of what was typed.
    pub fn blur(&mut self) {
        self.enter(FieldMode::Viewing);

        let value = parse_optional_value(&self.state.raw);
        emit(&mut self.props.on_blur, value, self.props.id.as_deref());
    }

    /// Applies new props from the host.
    ///
    /// Id, class and callbacks are always replaced. A changed `value` replaces
    /// the raw text only in view mode; while editing, the user's text wins and
    /// the external value is dropped.
    pub fn update(
        &mut self,
        props: NumberInputProps,
    ) {
        let value_changed = props.value != self.props.value;
        self.props = props;

        if !value_changed {
            return;
        }
        if self.state.is_editing() {
            debug!(
                id = ?self.props.id,
                value = self.props.value,
                "ignoring external value while editing"
            );
        } else {
            self.state = ComponentState::viewing(self.props.value);
        }
    }

    /// The string currently shown in the field.
    pub fn display(&self) -> String {
        self.state.displayed()
    }

    /// Hands the current field contents to the renderer.
    pub fn render<R: FieldRenderer + ?Sized>(
        &self,
        renderer: &mut R,
    ) {
        let value = self.display();
        renderer.render_field(&FieldView {
            id: self.props.id.as_deref(),
            class: self.props.class.as_deref(),
            mode: self.state.mode,
            value: &value,
        });
    }

    /// The parsed value of the current text, if it is an integer.
    pub fn value(&self) -> Option<i64> {
        parse_optional_value(&self.state.raw)
    }

    pub fn raw(&self) -> &str {
        &self.state.raw
    }

    pub fn mode(&self) -> FieldMode {
        self.state.mode
    }

    pub fn is_editing(&self) -> bool {
        self.state.is_editing()
    }

    pub fn id(&self) -> Option<&str> {
        self.props.id.as_deref()
    }

    pub fn class(&self) -> Option<&str> {
        self.props.class.as_deref()
    }

    fn enter(
        &mut self,
        mode: FieldMode,
    ) {
        if self.state.mode != mode {
            trace!(id = ?self.props.id, from = %self.state.mode, to = %mode, "mode change");
            self.state.mode = mode;
        }
    }
}

fn emit(
    callback: &mut Option<Callback>,
    value: Option<i64>,
    id: Option<&str>,
) {
    if let Some(callback) = callback.as_mut() {
        callback(value, id);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;

    type Call = (Option<i64>, Option<String>);
    type Calls = Rc<RefCell<Vec<Call>>>;

    fn call(
        value: Option<i64>,
        id: Option<&str>,
    ) -> Call {
        (value, id.map(str::to_string))
    }

    fn recorder() -> (Calls, impl FnMut(Option<i64>, Option<&str>) + 'static) {
        let calls: Calls = Rc::default();
        let sink = Rc::clone(&calls);
        (calls, move |value, id: Option<&str>| {
            sink.borrow_mut().push(call(value, id))
        })
    }

    // =========================================================================
    // mount tests
    // =========================================================================

    #[test]
    fn mount_starts_viewing_with_grouped_value() {
        let input = NumberInput::mount(NumberInputProps::new(900_000));

        assert_eq!(input.mode(), FieldMode::Viewing);
        assert_eq!(input.raw(), "900000");
        assert_eq!(input.display(), "900,000");
    }

    // =========================================================================
    // focus tests
    // =========================================================================

    #[test]
    fn focus_shows_raw_digits() {
        let mut input = NumberInput::mount(NumberInputProps::new(1_234_567));

        input.focus();

        assert!(input.is_editing());
        assert_eq!(input.display(), "1234567");
    }

    #[test]
    fn focus_strips_separators_typed_earlier() {
        let mut input = NumberInput::mount(NumberInputProps::new(0));
        input.change("1,500");
        input.blur();

        input.focus();

        assert_eq!(input.raw(), "1500");
        assert_eq!(input.display(), "1500");
    }

    #[test]
    fn repeated_focus_keeps_editing() {
        let (calls, on_focus) = recorder();
        let mut input = NumberInput::mount(NumberInputProps::new(7).on_focus(on_focus));

        input.focus();
        input.change("70");
        input.focus();

        assert!(input.is_editing());
        assert_eq!(input.display(), "70");
        assert_eq!(calls.borrow().len(), 2);
    }

    // =========================================================================
    // change tests
    // =========================================================================

    #[test]
    fn change_without_focus_enters_editing() {
        let mut input = NumberInput::mount(NumberInputProps::new(900_000));

        input.change("1000000");

        assert!(input.is_editing());
        assert_eq!(input.display(), "1000000");
    }

    #[test]
    fn change_keeps_incomplete_text() {
        let (calls, on_change) = recorder();
        let mut input = NumberInput::mount(NumberInputProps::new(1).on_change(on_change));

        input.change("-");

        assert_eq!(input.display(), "-");
        assert_eq!(*calls.borrow(), vec![call(None, None)]);
    }

    // =========================================================================
    // blur tests
    // =========================================================================

    #[test]
    fn blur_groups_typed_value() {
        let mut input = NumberInput::mount(NumberInputProps::new(0));
        input.change("-900000");

        input.blur();

        assert_eq!(input.mode(), FieldMode::Viewing);
        assert_eq!(input.display(), "-900,000");
    }

    #[test]
    fn blur_leaves_malformed_text_visible() {
        let (calls, on_blur) = recorder();
        let mut input = NumberInput::mount(NumberInputProps::new(0).id("x").on_blur(on_blur));
        input.change("12abc");

        input.blur();

        assert_eq!(input.display(), "12abc");
        assert_eq!(*calls.borrow(), vec![call(None, Some("x"))]);
    }

    #[test]
    fn blur_while_viewing_is_harmless() {
        let mut input = NumberInput::mount(NumberInputProps::new(42));

        input.blur();
        input.blur();

        assert_eq!(input.display(), "42");
    }

    // =========================================================================
    // update tests
    // =========================================================================

    #[test]
    fn update_while_viewing_replaces_value() {
        let mut input = NumberInput::mount(NumberInputProps::new(1));

        input.update(NumberInputProps::new(2_500_000).id("next"));

        assert_eq!(input.display(), "2,500,000");
        assert_eq!(input.id(), Some("next"));
    }

    #[test]
    fn update_while_editing_keeps_user_text() {
        let mut input = NumberInput::mount(NumberInputProps::new(1));
        input.focus();
        input.change("333");

        input.update(NumberInputProps::new(999));

        assert_eq!(input.display(), "333");
        input.blur();
        assert_eq!(input.display(), "333");
        assert_eq!(input.value(), Some(333));
    }

    #[test]
    fn update_with_same_value_keeps_committed_text() {
        let mut input = NumberInput::mount(NumberInputProps::new(5));
        input.change("000000");
        input.blur();

        input.update(NumberInputProps::new(5));

        assert_eq!(input.raw(), "000000");
        assert_eq!(input.display(), "000,000");
    }

    #[test]
    fn update_replaces_callbacks() {
        let (first, on_change_first) = recorder();
        let (second, on_change_second) = recorder();
        let mut input = NumberInput::mount(NumberInputProps::new(0).on_change(on_change_first));

        input.update(NumberInputProps::new(0).on_change(on_change_second));
        input.change("8");

        assert!(first.borrow().is_empty());
        assert_eq!(*second.borrow(), vec![call(Some(8), None)]);
    }

    // =========================================================================
    // render tests
    // =========================================================================

    #[test]
    fn render_passes_attributes_and_display() {
        let input = NumberInput::mount(NumberInputProps::new(900_000).id("amount").class("wide"));
        let mut seen = Vec::new();

        input.render(&mut |view: &FieldView<'_>| {
            seen.push((
                view.id.map(str::to_string),
                view.class.map(str::to_string),
                view.mode,
                view.value.to_string(),
            ))
        });

        assert_eq!(
            seen,
            vec![(
                Some("amount".to_string()),
                Some("wide".to_string()),
                FieldMode::Viewing,
                "900,000".to_string()
            )]
        );
    }
}
