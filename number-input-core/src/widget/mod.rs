//! The number input widget: per-instance state, consumer-facing props and
//! the controller that drives focus, change and blur transitions.

mod controller;
mod props;
mod render;
mod state;

pub use controller::NumberInput;
pub use props::{Callback, NumberInputProps};
pub use render::{FieldRenderer, FieldView};
pub use state::{ComponentState, FieldMode};
