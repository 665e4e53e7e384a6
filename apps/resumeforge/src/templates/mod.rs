// Template visual resolution: catalog lookup, tone/badge/palette profiles, thumbnails.
// Tables here are process-wide constants; nothing is cached between calls.

pub mod catalog;
pub mod preview;
pub mod thumbnail;
pub mod visuals;

pub use catalog::{TemplateCatalog, TemplateDescriptor, TemplateSettings};
pub use preview::{preview, TemplatePreview};
pub use thumbnail::resolve_thumbnail;
pub use visuals::{resolve_visual, TemplateVisualProfile};
