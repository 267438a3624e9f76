use anyhow::{Context, Result};
use minifb::{Key, Window, WindowOptions};
use opencv::core::{Mat, Vec3b};
use opencv::prelude::*;

use crate::hand::{LandmarkId, LandmarkSnapshot, Point};
use crate::render::skeleton::{
    finger_chain, ACTIVE_TIP_COLOR, CONNECTION_COLOR, HAND_CONNECTIONS, LANDMARK_COLOR,
};

/// 終了キー
pub const QUIT_KEY: Key = Key::Q;

/// 操作中の指の骨格線の太さ（半径ピクセル）
const ACTIVE_STROKE: i32 = 2;

/// minifbを使用したデバッグ表示
///
/// カメラフレームを背景に、手の骨格と操作中の指を重ねて描く。
pub struct MinifbRenderer {
    window: Window,
    buffer: Vec<u32>,
    width: usize,
    height: usize,
}

impl MinifbRenderer {
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let options = WindowOptions {
            resize: false,
            ..WindowOptions::default()
        };
        let window = Window::new(title, width, height, options)
            .with_context(|| format!("Failed to open {}x{} window", width, height))?;

        Ok(Self {
            window,
            buffer: vec![0u32; width * height],
            width,
            height,
        })
    }

    /// ウィンドウが開いていて、終了キーが押されていないか
    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(QUIT_KEY)
    }

    /// BGR Mat をバッファにコピー（サイズが異なる場合は左上基準でクロップ/黒で埋める）
    pub fn draw_frame(&mut self, frame: &Mat) -> Result<()> {
        let rows = self.height.min(frame.rows() as usize);
        let cols = self.width.min(frame.cols() as usize);

        self.buffer.fill(0);
        for y in 0..rows {
            let line = &mut self.buffer[y * self.width..y * self.width + cols];
            for (x, out) in line.iter_mut().enumerate() {
                let bgr = frame.at_2d::<Vec3b>(y as i32, x as i32)?;
                *out = u32::from_be_bytes([0, bgr[2], bgr[1], bgr[0]]);
            }
        }

        Ok(())
    }

    /// 手の骨格とランドマークを描画。欠けている点・NaN の点は飛ばす
    pub fn draw_hand(&mut self, snapshot: &LandmarkSnapshot) {
        for (from, to) in HAND_CONNECTIONS {
            if let (Ok(a), Ok(b)) = (snapshot.get(from), snapshot.get(to)) {
                self.stroke(&a, &b, 0, CONNECTION_COLOR);
            }
        }

        for p in snapshot.points().iter().filter(|p| p.is_finite()) {
            self.dot(p.x as i32, p.y as i32, 3, LANDMARK_COLOR);
        }
    }

    /// 操作中の指を、骨格線を太くして先端を縁取りで強調
    pub fn highlight(&mut self, snapshot: &LandmarkSnapshot, tips: &[LandmarkId]) {
        for &tip in tips {
            for (from, to) in finger_chain(tip) {
                if let (Ok(a), Ok(b)) = (snapshot.get(from), snapshot.get(to)) {
                    self.stroke(&a, &b, ACTIVE_STROKE, ACTIVE_TIP_COLOR);
                }
            }
            if let Ok(p) = snapshot.get(tip) {
                self.dot(p.x as i32, p.y as i32, 10, 0x000000);
                self.dot(p.x as i32, p.y as i32, 8, ACTIVE_TIP_COLOR);
            }
        }
    }

    /// バッファをウィンドウに表示
    pub fn update(&mut self) -> Result<()> {
        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)
            .context("Failed to update window")
    }

    /// 2点間の線（Bresenham）。radius > 0 なら各画素に円を置いて太くする
    fn stroke(&mut self, from: &Point, to: &Point, radius: i32, color: u32) {
        let (mut x, mut y) = (from.x as i32, from.y as i32);
        let (x1, y1) = (to.x as i32, to.y as i32);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let step_x = if x < x1 { 1 } else { -1 };
        let step_y = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.dot(x, y, radius, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += step_x;
            }
            if e2 <= dx {
                err += dx;
                y += step_y;
            }
        }
    }

    /// 塗りつぶし円。radius 0 は1画素
    fn dot(&mut self, cx: i32, cy: i32, radius: i32, color: u32) {
        let r2 = radius * radius;
        for y in (cy - radius).max(0)..=(cy + radius).min(self.height as i32 - 1) {
            for x in (cx - radius).max(0)..=(cx + radius).min(self.width as i32 - 1) {
                let (ox, oy) = (x - cx, y - cy);
                if ox * ox + oy * oy <= r2 {
                    self.buffer[y as usize * self.width + x as usize] = color;
                }
            }
        }
    }
}
