pub mod resume;

pub use resume::{ResumeConfig, ResumeDocument, ResumeForm, ResumeProfile};
