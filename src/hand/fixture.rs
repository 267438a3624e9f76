//! テスト用の合成ハンド
//!
//! 640x480 フレームのトラッキング領域内に、正面を向いて立てた手を生成する。

use super::landmark::{LandmarkId, LandmarkSnapshot, Point};

const MIRROR_AXIS_X: f32 = 600.0;

pub struct HandBuilder {
    left: bool,
    fingers: [bool; 5],
    overrides: Vec<(LandmarkId, Point)>,
}

impl HandBuilder {
    pub fn right() -> Self {
        Self {
            left: false,
            fingers: [true; 5],
            overrides: Vec::new(),
        }
    }

    pub fn left() -> Self {
        Self {
            left: true,
            ..Self::right()
        }
    }

    pub fn fingers(mut self, fingers: [bool; 5]) -> Self {
        self.fingers = fingers;
        self
    }

    /// 生成後に特定のランドマークを上書き（座標はそのまま、ミラーしない）
    pub fn at(mut self, id: LandmarkId, point: Point) -> Self {
        self.overrides.push((id, point));
        self
    }

    pub fn build(&self) -> LandmarkSnapshot {
        let mut points = [Point::default(); LandmarkId::COUNT];

        points[LandmarkId::Wrist.index()] = Point::new(300.0, 420.0);

        // 右手基準: 親指は画像右側
        points[LandmarkId::ThumbCmc.index()] = Point::new(340.0, 400.0);
        points[LandmarkId::ThumbMcp.index()] = Point::new(365.0, 370.0);
        points[LandmarkId::ThumbIp.index()] = Point::new(380.0, 340.0);
        points[LandmarkId::ThumbTip.index()] = if self.fingers[0] {
            Point::new(420.0, 320.0)
        } else {
            Point::new(360.0, 330.0)
        };

        let columns = [340.0, 320.0, 300.0, 280.0];
        for (i, x) in columns.iter().enumerate() {
            let mcp = LandmarkId::IndexMcp.index() + i * 4;
            points[mcp] = Point::new(*x, 300.0);
            points[mcp + 1] = Point::new(*x, 260.0);
            points[mcp + 2] = Point::new(*x, 230.0);
            points[mcp + 3] = if self.fingers[i + 1] {
                Point::new(*x, 200.0)
            } else {
                Point::new(*x, 280.0)
            };
        }

        if self.left {
            for p in &mut points {
                p.x = MIRROR_AXIS_X - p.x;
            }
        }

        for (id, point) in &self.overrides {
            points[id.index()] = *point;
        }

        LandmarkSnapshot::from_points(points.to_vec())
    }
}
