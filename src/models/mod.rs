pub mod geometry;
pub mod question;

pub use geometry::{BoundingBox, ImageRegion, PageSnapshot, PositionedWord, QuestionLabel};
pub use question::{Answer, AnswerEntry, ParsedBlock, Question, RawBlock};
