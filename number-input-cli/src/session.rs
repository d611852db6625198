//! Drives a mounted widget through a sequence of script events.

use std::{
    cell::RefCell,
    fmt,
    io::{self, Write},
    rc::Rc,
};

use number_input_core::{FieldMode, NumberInput, NumberInputProps};
use tracing::{debug, info};

use crate::{
    config::WidgetConfig,
    render::{LineRenderer, OutputStyle},
    script::Event,
};

/// Which consumer callback fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackKind {
    Change,
    Focus,
    Blur,
}

impl CallbackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Change => "onChange",
            Self::Focus => "onFocus",
            Self::Blur => "onBlur",
        }
    }
}

/// A single callback invocation and its two arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackRecord {
    pub kind: CallbackKind,
    pub value: Option<i64>,
    pub id: Option<String>,
}

impl fmt::Display for CallbackRecord {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}(", self.kind.as_str())?;
        match self.value {
            Some(value) => write!(f, "{value}")?,
            None => f.write_str("absent")?,
        }
        match &self.id {
            Some(id) => write!(f, ", {id:?})"),
            None => f.write_str(", absent)"),
        }
    }
}

/// The outcome of applying one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub event: Event,
    pub mode: FieldMode,
    pub rendered: String,
    pub callbacks: Vec<CallbackRecord>,
}

impl fmt::Display for Step {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.rendered)?;
        for callback in &self.callbacks {
            write!(f, "\n        -> {callback}")?;
        }
        Ok(())
    }
}

type Transcript = Rc<RefCell<Vec<CallbackRecord>>>;

/// One mounted widget plus the renderer and callback recorder around it.
#[derive(Debug)]
pub struct Session {
    config: WidgetConfig,
    style: OutputStyle,
    transcript: Transcript,
    input: NumberInput,
}

impl Session {
    pub fn new(
        config: WidgetConfig,
        style: OutputStyle,
    ) -> Self {
        let transcript = Transcript::default();
        let input = NumberInput::mount(props_for(&config, &transcript));
        Self {
            config,
            style,
            transcript,
            input,
        }
    }

    /// Renders the field as it currently stands.
    pub fn render(&self) -> String {
        let mut renderer = LineRenderer::new(self.style);
        self.input.render(&mut renderer);
        renderer.into_line()
    }

    /// Delivers `event` to the widget and re-renders it.
    pub fn apply(
        &mut self,
        event: &Event,
    ) -> Step {
        debug!(?event, "applying event");
        match event {
            Event::Focus => self.input.focus(),
            Event::Change(text) => self.input.change(text),
            Event::Blur => self.input.blur(),
            Event::Set(value) => {
                self.config.value = *value;
                self.input.update(props_for(&self.config, &self.transcript));
            }
        }

        let callbacks = self.transcript.borrow_mut().drain(..).collect();
        Step {
            event: event.clone(),
            mode: self.input.mode(),
            rendered: self.render(),
            callbacks,
        }
    }

    /// Applies every event in order.
    pub fn run<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a Event>,
    ) -> Vec<Step> {
        events.into_iter().map(|event| self.apply(event)).collect()
    }

    /// Writes the mounted field, then every step of `events`, one per line.
    pub fn write_transcript<'a, W: Write>(
        &mut self,
        events: impl IntoIterator<Item = &'a Event>,
        out: &mut W,
    ) -> io::Result<()> {
        writeln!(out, "{}", self.render())?;
        for event in events {
            let step = self.apply(event);
            writeln!(out, "{step}")?;
        }
        Ok(())
    }

    pub fn input(&self) -> &NumberInput {
        &self.input
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }
}

fn props_for(
    config: &WidgetConfig,
    transcript: &Transcript,
) -> NumberInputProps {
    let mut props = NumberInputProps::new(config.value)
        .on_change(recorder(CallbackKind::Change, transcript))
        .on_focus(recorder(CallbackKind::Focus, transcript))
        .on_blur(recorder(CallbackKind::Blur, transcript));
    props.id = config.id.clone();
    props.class = config.class.clone();
    props
}

fn recorder(
    kind: CallbackKind,
    transcript: &Transcript,
) -> impl FnMut(Option<i64>, Option<&str>) + 'static {
    let transcript = Rc::clone(transcript);
    move |value, id: Option<&str>| {
        info!(callback = kind.as_str(), ?value, ?id, "callback fired");
        transcript.borrow_mut().push(CallbackRecord {
            kind,
            value,
            id: id.map(str::to_string),
        });
    }
}
