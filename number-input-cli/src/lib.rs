pub mod config;
pub mod logging;
pub mod render;
pub mod script;
pub mod session;

pub use config::{ConfigError, WidgetConfig};
pub use render::OutputStyle;
pub use script::{Event, ScriptError, ScriptErrorKind, parse_script};
pub use session::{CallbackKind, CallbackRecord, Session, Step};
