use anyhow::{Context, Result};
use opencv::{
    core::{Mat, Rect},
    prelude::*,
};
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Tensor;
use tracing::{debug, info};

use super::preprocess::preprocess_for_hand;
use super::roi::{bbox_from_snapshot, remap_to_frame, tracking_roi, BBox, CropRegion, ROI_EXPAND};
use crate::config::DetectorConfig;
use crate::hand::{LandmarkId, LandmarkSnapshot};

/// 1回の推論結果（入力画像内の正規化座標）
struct Inference {
    presence: f32,
    points: Vec<(f32, f32)>,
}

/// ONNX手ランドマークモデルによる単一の手の検出器
///
/// 前フレームで手を捉えていればその周辺だけを推論し（追跡）、
/// 見失ったらフレーム全体から検出し直す。
pub struct HandDetector {
    session: Session,
    config: DetectorConfig,
    roi: Option<BBox>,
}

impl HandDetector {
    /// ONNXモデルを読み込んで初期化
    pub fn new(config: &DetectorConfig) -> Result<Self> {
        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .commit_from_file(&config.model_path)
            .with_context(|| format!("Failed to load hand landmark model {}", config.model_path))?;
        info!("Hand landmark model loaded: {}", config.model_path);

        Ok(Self {
            session,
            config: config.clone(),
            roi: None,
        })
    }

    pub fn is_tracking(&self) -> bool {
        self.roi.is_some()
    }

    /// フレームから手を検出。見つからなければ空のスナップショット
    pub fn detect(&mut self, frame: &Mat) -> Result<LandmarkSnapshot> {
        let frame_w = frame.cols() as u32;
        let frame_h = frame.rows() as u32;

        if let Some(roi) = self.roi.take() {
            let rect = Rect::new(roi.x as i32, roi.y as i32, roi.width as i32, roi.height as i32);
            let cropped = Mat::roi(frame, rect)?.try_clone()?;
            let crop = CropRegion::from_bbox(&roi, frame_w, frame_h);
            let result = self.infer(&cropped)?;
            if result.presence >= self.config.tracking_confidence {
                let points = remap_to_frame(&result.points, &crop);
                return Ok(self.accept(&points, frame_w, frame_h));
            }
            debug!("Lost hand in tracking region (presence {:.2})", result.presence);
        }

        let result = self.infer(frame)?;
        if result.presence >= self.config.detection_confidence {
            return Ok(self.accept(&result.points, frame_w, frame_h));
        }

        Ok(LandmarkSnapshot::empty())
    }

    fn accept(&mut self, points: &[(f32, f32)], frame_w: u32, frame_h: u32) -> LandmarkSnapshot {
        let snapshot = LandmarkSnapshot::from_normalized(points, frame_w, frame_h);
        self.roi = bbox_from_snapshot(&snapshot)
            .and_then(|bbox| tracking_roi(&bbox, frame_w, frame_h, ROI_EXPAND));
        snapshot
    }

    fn infer(&mut self, image: &Mat) -> Result<Inference> {
        let size = self.config.input_size as i32;
        let input = preprocess_for_hand(image, size)?;
        let input_tensor = Tensor::from_array(input)?;
        let outputs = self
            .session
            .run(ort::inputs![self.config.input_name.as_str() => input_tensor])
            .context("Hand landmark inference failed")?;

        // 出力: [1, 63] (x, y, z) x 21, 入力画像のピクセル単位
        let landmarks: ndarray::ArrayViewD<f32> = outputs[self.config.landmarks_output.as_str()]
            .try_extract_array()
            .context("Failed to extract landmark tensor")?;
        let presence: ndarray::ArrayViewD<f32> = outputs[self.config.presence_output.as_str()]
            .try_extract_array()
            .context("Failed to extract presence tensor")?;

        let values: Vec<f32> = landmarks.iter().copied().collect();
        if values.len() < LandmarkId::COUNT * 3 {
            anyhow::bail!(
                "Unexpected landmark output size {} (expected {})",
                values.len(),
                LandmarkId::COUNT * 3
            );
        }

        let scale = size as f32;
        let points = values
            .chunks_exact(3)
            .take(LandmarkId::COUNT)
            .map(|c| (c[0] / scale, c[1] / scale))
            .collect();

        Ok(Inference {
            presence: presence.iter().next().copied().unwrap_or(0.0),
            points,
        })
    }
}
