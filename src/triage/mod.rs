//! Decision core: request building, extraction merge, and interpretation of
//! the service's verdict into display state. Everything here is pure.

pub mod call;
pub mod fence;
pub mod merge;
pub mod messages;
pub mod payload;
pub mod primary_action;
pub mod severity;
pub mod summary;
pub mod ui_state;

pub use call::*;
pub use fence::*;
pub use merge::*;
pub use messages::Language;
pub use payload::*;
pub use primary_action::*;
pub use severity::*;
pub use summary::*;
pub use ui_state::*;
