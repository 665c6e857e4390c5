mod file_output;

use anyhow::Result;
pub use file_output::FileOutput;
use raycast::renderer::Frame;

pub trait FinalOutput {
    fn commit(&self, frame: &Frame) -> Result<()>;
}
