use thiserror::Error;

/// MediaPipe Hands の 21 ランドマークインデックス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum LandmarkId {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl LandmarkId {
    pub const COUNT: usize = 21;

    pub const ALL: [LandmarkId; Self::COUNT] = [
        Self::Wrist,
        Self::ThumbCmc,
        Self::ThumbMcp,
        Self::ThumbIp,
        Self::ThumbTip,
        Self::IndexMcp,
        Self::IndexPip,
        Self::IndexDip,
        Self::IndexTip,
        Self::MiddleMcp,
        Self::MiddlePip,
        Self::MiddleDip,
        Self::MiddleTip,
        Self::RingMcp,
        Self::RingPip,
        Self::RingDip,
        Self::RingTip,
        Self::PinkyMcp,
        Self::PinkyPip,
        Self::PinkyDip,
        Self::PinkyTip,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// ランドマーク取得の失敗
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LandmarkError {
    /// 検出器の出力にこのランドマークが含まれていない
    #[error("landmark not present: {0:?}")]
    Missing(LandmarkId),
    /// 座標が NaN または無限大
    #[error("landmark is not a finite point: {0:?}")]
    NonFinite(LandmarkId),
}

/// フレームのピクセル座標
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// ユークリッド距離
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// 1フレーム分の単一の手のランドマーク（ピクセル座標）
///
/// 検出器の出力をそのまま保持する。21点に満たない部分出力も受け付け、
/// 欠けている点は `get` が `LandmarkError::Missing`、NaN などの点は
/// `LandmarkError::NonFinite` を返す。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandmarkSnapshot {
    points: Vec<Point>,
}

impl LandmarkSnapshot {
    /// 手が見つからなかったフレーム
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// ピクセル座標列から作成（インデックス = LandmarkId）
    pub fn from_points(mut points: Vec<Point>) -> Self {
        points.truncate(LandmarkId::COUNT);
        Self { points }
    }

    /// 正規化座標 (0.0〜1.0) をフレームの実サイズでピクセル座標に変換して作成
    pub fn from_normalized(normalized: &[(f32, f32)], frame_width: u32, frame_height: u32) -> Self {
        let w = frame_width as f32;
        let h = frame_height as f32;
        let points = normalized
            .iter()
            .map(|&(x, y)| Point::new(x * w, y * h))
            .collect();
        Self::from_points(points)
    }

    /// 手が検出されたか
    pub fn is_found(&self) -> bool {
        !self.points.is_empty()
    }

    /// IDでランドマークを取得
    pub fn get(&self, id: LandmarkId) -> Result<Point, LandmarkError> {
        let p = self
            .points
            .get(id.index())
            .copied()
            .ok_or(LandmarkError::Missing(id))?;
        if !p.is_finite() {
            return Err(LandmarkError::NonFinite(id));
        }
        Ok(p)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}
