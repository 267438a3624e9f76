use anyhow::{Context, Result};
use opencv::{
    core::Mat,
    prelude::*,
    videoio::{self, VideoCapture, VideoCaptureAPIs, VideoCaptureTrait},
};
use tracing::info;

/// OpenCVを使用したカメラキャプチャ
pub struct OpenCvCamera {
    capture: VideoCapture,
    width: u32,
    height: u32,
}

impl OpenCvCamera {
    /// 解像度を指定してカメラを開く
    ///
    /// 指定はあくまで要求で、実際の解像度は `resolution()` で確認する。
    pub fn open_with_resolution(index: i32, width: Option<u32>, height: Option<u32>) -> Result<Self> {
        let mut capture =
            VideoCapture::new(index, VideoCaptureAPIs::CAP_ANY as i32).context("Failed to open camera")?;

        if !capture.is_opened()? {
            anyhow::bail!("Camera {} is not available", index);
        }

        if let Some(w) = width {
            capture.set(videoio::CAP_PROP_FRAME_WIDTH, w as f64)?;
        }
        if let Some(h) = height {
            capture.set(videoio::CAP_PROP_FRAME_HEIGHT, h as f64)?;
        }
        capture.set(videoio::CAP_PROP_BUFFERSIZE, 1.0)?;

        let actual_width = capture.get(videoio::CAP_PROP_FRAME_WIDTH)? as u32;
        let actual_height = capture.get(videoio::CAP_PROP_FRAME_HEIGHT)? as u32;
        let actual_fps = capture.get(videoio::CAP_PROP_FPS)?;
        info!(
            "Camera {}: requested {:?}x{:?}, got {}x{} @ {} fps",
            index, width, height, actual_width, actual_height, actual_fps
        );

        Ok(Self {
            capture,
            width: actual_width,
            height: actual_height,
        })
    }

    /// 解像度を取得
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// フレームを読み込む（BGR形式）
    ///
    /// 報告値と実フレームのサイズが違う場合は実フレームに合わせる。
    pub fn read_frame(&mut self) -> Result<Mat> {
        let mut frame = Mat::default();
        let ok = self
            .capture
            .read(&mut frame)
            .context("Failed to read frame")?;

        if !ok || frame.empty() {
            anyhow::bail!("Empty frame received");
        }

        self.width = frame.cols() as u32;
        self.height = frame.rows() as u32;
        Ok(frame)
    }
}
