//! Resolved data model shared by the resolver and the renderers.

pub mod comment_style;
pub mod entry;
pub mod naming;
pub mod value;

pub use comment_style::CommentStyle;
pub use entry::{ConfigEntry, IncludeRef, RenderedFile};
pub use naming::NamingConvention;
pub use value::{decimal_string, Value, ValueKind};
