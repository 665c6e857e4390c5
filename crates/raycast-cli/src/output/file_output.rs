use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use raycast::renderer::Frame;

use super::FinalOutput;

/// Writes the frame to disk, the image format follows the file extension
pub struct FileOutput {
    pub ldr_path: PathBuf,
    pub hdr_path: Option<PathBuf>,
}

impl FileOutput {
    pub fn new(ldr_path: PathBuf) -> Self {
        Self {
            ldr_path,
            hdr_path: None,
        }
    }
}

fn create_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .with_context(|| format!("Can't create directory {}", parent.display())),
        _ => Ok(()),
    }
}

impl FinalOutput for FileOutput {
    fn commit(&self, frame: &Frame) -> Result<()> {
        create_parent_dir(&self.ldr_path)?;
        log::info!("Saving LDR image to {}", self.ldr_path.display());
        frame
            .to_rgb_image()
            .save(&self.ldr_path)
            .with_context(|| format!("Can't save {}", self.ldr_path.display()))?;

        if let Some(ref hdr_path) = self.hdr_path {
            let Some(hdr) = frame.to_hdr_image() else {
                anyhow::bail!("Frame buffer does not match its dimensions");
            };
            create_parent_dir(hdr_path)?;
            log::info!("Saving HDR image to {}", hdr_path.display());
            hdr.save(hdr_path)
                .with_context(|| format!("Can't save {}", hdr_path.display()))?;
        }
        Ok(())
    }
}
