//! Extension surface: tabs, popup, background, and the page channel

pub mod background;
pub mod ipc;
pub mod popup;
pub mod tab;

pub use background::Background;
pub use ipc::{IpcChannel, IpcMessage, IpcMessageType};
pub use popup::Popup;
pub use tab::{Browser, Tab, TabId};
