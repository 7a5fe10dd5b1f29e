pub mod input_file;
pub mod progress;

pub use input_file::InputFile;
pub use progress::{ProgressEvent, ProgressSink, TaskAction};
