/*!
# IO utilities

Line-delimited JSON reading of gold documents and writing of merged results.
!*/
pub mod reader;
pub mod writer;

pub use reader::GoldReader;
pub use writer::ResultWriter;
