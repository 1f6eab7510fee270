use std::io::Write;
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};

use anyhow::{Context, Result};
use raylib::prelude::*;
use tracing::{error, info};

/// Encodes raw RGBA frames into a video file through an ffmpeg child process.
pub struct Ffmpeg {
    process: Child,
    stdin: Option<ChildStdin>,
}

impl Ffmpeg {
    pub fn new(width: i32, height: i32, fps: u32, output: &Path) -> Result<Ffmpeg> {
        let mut process = Command::new("ffmpeg")
            .stdin(Stdio::piped())
            .args(["-loglevel", "error"])
            .arg("-y")
            .args(["-f", "rawvideo"])
            .args(["-pixel_format", "rgba"])
            .args(["-video_size", &format!("{}x{}", width, height)])
            .args(["-framerate", &format!("{}", fps)])
            .args(["-i", "-"])
            .args(["-c:v", "libx264"])
            .args(["-pix_fmt", "yuv420p"])
            .arg(output)
            .spawn()
            .context("failed to start ffmpeg")?;
        let stdin = process.stdin.take().context("ffmpeg stdin unavailable")?;
        info!(output = %output.display(), "recording started");
        Ok(Ffmpeg { process, stdin: Some(stdin) })
    }

    pub fn write(&mut self, image: &Image) -> Result<()> {
        let stdin = self.stdin.as_mut().context("ffmpeg stdin already closed")?;
        let row_len = (image.width() * 4) as usize; // 4 bytes per pixel (RGBA)
        let rows = image.height() as usize;

        // SAFETY: a loaded RGBA image owns width * height * 4 bytes
        let pixels = unsafe { std::slice::from_raw_parts(image.data() as *const u8, row_len * rows) };

        // Render textures are stored bottom-up, ffmpeg wants top-down
        for y in (0..rows).rev() {
            stdin
                .write_all(&pixels[y * row_len..(y + 1) * row_len])
                .context("failed to write frame to ffmpeg")?;
        }
        Ok(())
    }
}

impl Drop for Ffmpeg {
    fn drop(&mut self) {
        // Closing stdin lets ffmpeg finish the file
        self.stdin = None;
        match self.process.wait() {
            Ok(status) => info!(%status, "recording finished"),
            Err(e) => error!(error = %e, "failed to wait for ffmpeg"),
        }
    }
}
