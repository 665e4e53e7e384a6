// Line-oriented record codec for experience, education and project text fields.

pub mod codec;
pub mod kinds;

pub use codec::{
    decode_lines, decode_records, encode_lines, encode_records, join_lines, split_lines, Arity,
};
pub use kinds::{Education, Experience, LineRecord, Project, RecordKind};
