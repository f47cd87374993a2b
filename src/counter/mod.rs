pub mod message;
pub mod surface;
pub mod widget;

pub use message::Message;
pub use surface::{DisplaySurface, TextSurface};
pub use widget::CounterWidget;
