pub mod classifier;
pub mod counter;
pub mod processor_trait;

pub use classifier::{
    BLOCK_COMMENT_CLOSE, BLOCK_COMMENT_OPEN, Classification, LINE_COMMENT, LINE_CONTINUATION,
    classify,
};
pub use counter::{RealLineCounter, count_real_lines};
pub use processor_trait::LineProcessor;
