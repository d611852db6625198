use std::fmt;

/// A consumer callback: receives the parsed value (`None` when the text is not
/// an integer) and the widget's id.
pub type Callback = Box<dyn FnMut(Option<i64>, Option<&str>)>;

/// External configuration of a [`NumberInput`](crate::NumberInput), supplied
/// on mount and again on every update from the host.
#[derive(Default)]
pub struct NumberInputProps {
    /// The externally authoritative value.
    pub value: i64,
    /// Forwarded verbatim as the second callback argument.
    pub id: Option<String>,
    /// Passed through to the renderer untouched.
    pub class: Option<String>,
    pub on_change: Option<Callback>,
    pub on_focus: Option<Callback>,
    pub on_blur: Option<Callback>,
}

impl NumberInputProps {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }

    pub fn id(
        mut self,
        id: impl Into<String>,
    ) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(
        mut self,
        class: impl Into<String>,
    ) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn on_change(
        mut self,
        f: impl FnMut(Option<i64>, Option<&str>) + 'static,
    ) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn on_focus(
        mut self,
        f: impl FnMut(Option<i64>, Option<&str>) + 'static,
    ) -> Self {
        self.on_focus = Some(Box::new(f));
        self
    }

    pub fn on_blur(
        mut self,
        f: impl FnMut(Option<i64>, Option<&str>) + 'static,
    ) -> Self {
        self.on_blur = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for NumberInputProps {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("NumberInputProps")
            .field("value", &self.value)
            .field("id", &self.id)
            .field("class", &self.class)
            .field("on_change", &self.on_change.is_some())
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .finish()
    }
}
