//! # Boxscope - CSS box-model hover inspector
//!
//! An overlay that shows the box model and key resolved styles of whatever
//! element the user hovers while holding Ctrl (or Cmd).
//!
//! ## Architecture
//!
//! The crate is organized into the following modules:
//!
//! - **dom**: Page model the overlay reads and mutates (elements, shadow roots,
//!   resolved styles, layout boxes)
//! - **inspector**: Box-model metrics, diagram and style panel rendering,
//!   tooltip placement and dragging, interaction controller
//! - **protocol**: Commands and replies crossing the extension/page boundary
//! - **extension**: Tabs, injection, popup and background handlers
//! - **config**: Overlay geometry and class names
//! - **utils**: Shared utilities and error types

pub mod config;
pub mod dom;
pub mod extension;
pub mod inspector;
pub mod protocol;
pub mod utils;

// Re-export main types for convenience
pub use config::InspectorConfig;
pub use dom::{Document, Node, NodeId};
pub use inspector::{BoxModel, InputEvent, Inspector};
pub use protocol::{Command, Response};
pub use utils::error::{BoxscopeError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = "Boxscope";
