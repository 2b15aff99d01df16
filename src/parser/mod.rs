pub mod job_board;

pub use job_board::{JobBoardParser, Parser};
