use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub detector: DetectorConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CameraConfig {
    /// カメラデバイス番号
    #[serde(default = "default_camera_index")]
    pub index: i32,
    /// 要求解像度（実際の解像度はデバイス次第）
    #[serde(default = "default_camera_width")]
    pub width: u32,
    #[serde(default = "default_camera_height")]
    pub height: u32,
    /// 連続読み取り失敗がこの回数に達したら終了
    #[serde(default = "default_max_read_failures")]
    pub max_read_failures: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DetectorConfig {
    /// 手ランドマークONNXモデルのパス
    #[serde(default = "default_model_path")]
    pub model_path: String,
    /// モデル入力の一辺（ピクセル）
    #[serde(default = "default_input_size")]
    pub input_size: u32,
    #[serde(default = "default_input_name")]
    pub input_name: String,
    /// 21x3 ランドマーク出力のテンソル名
    #[serde(default = "default_landmarks_output")]
    pub landmarks_output: String,
    /// 手の存在スコア出力のテンソル名
    #[serde(default = "default_presence_output")]
    pub presence_output: String,
    /// 全フレーム検出時の存在スコア閾値
    #[serde(default = "default_confidence")]
    pub detection_confidence: f32,
    /// 前フレームの領域で追跡を続ける存在スコア閾値
    #[serde(default = "default_confidence")]
    pub tracking_confidence: f32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    /// カメラ映像ウィンドウを表示するか
    #[serde(default = "default_debug_view")]
    pub view: bool,
}

fn default_camera_index() -> i32 { 0 }
fn default_camera_width() -> u32 { 640 }
fn default_camera_height() -> u32 { 480 }
fn default_max_read_failures() -> u32 { 30 }
fn default_model_path() -> String { "models/hand_landmark.onnx".to_string() }
fn default_input_size() -> u32 { 224 }
fn default_input_name() -> String { "input_1".to_string() }
fn default_landmarks_output() -> String { "Identity".to_string() }
fn default_presence_output() -> String { "Identity_1".to_string() }
fn default_confidence() -> f32 { 0.5 }
fn default_debug_view() -> bool { true }

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            index: default_camera_index(),
            width: default_camera_width(),
            height: default_camera_height(),
            max_read_failures: default_max_read_failures(),
        }
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            input_size: default_input_size(),
            input_name: default_input_name(),
            landmarks_output: default_landmarks_output(),
            presence_output: default_presence_output(),
            detection_confidence: default_confidence(),
            tracking_confidence: default_confidence(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            view: default_debug_view(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config")?;
        Ok(config)
    }

    /// 読み込みに失敗したらデフォルト設定を使う
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }
}
