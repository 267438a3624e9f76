use crate::hand::Point;

/// カーソル平滑化係数（1より大きいほど滑らかだが遅れる）
pub const SMOOTHING_FACTOR: f32 = 2.75;

/// トラッキング領域のフレーム端からのマージン（ピクセル）
pub const TRACKING_MARGINS: TrackingMargins = TrackingMargins {
    left: 50.0,
    top: 10.0,
    right: 50.0,
    bottom: 150.0,
};

/// 画面サイズ（ピクセル）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingMargins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// カーソル入力として有効なフレーム内の矩形（ピクセル座標）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingArea {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl TrackingArea {
    /// 実フレームサイズとマージンから矩形を作る。面積が残らない場合は None
    pub fn from_margins(frame_width: u32, frame_height: u32, margins: &TrackingMargins) -> Option<Self> {
        let area = Self {
            left: margins.left,
            top: margins.top,
            right: frame_width as f32 - margins.right,
            bottom: frame_height as f32 - margins.bottom,
        };
        if area.right > area.left && area.bottom > area.top {
            Some(area)
        } else {
            None
        }
    }

    /// フレーム座標を画面座標に線形変換（左右反転前）
    pub fn map_to_screen(&self, p: &Point, screen: &ScreenSize, clamp: bool) -> (f32, f32) {
        (
            interp(p.x, (self.left, self.right), (0.0, screen.width), clamp),
            interp(p.y, (self.top, self.bottom), (0.0, screen.height), clamp),
        )
    }
}

/// 区間 `from` から区間 `to` への線形補間。clamp=false なら区間外は外挿
pub fn interp(value: f32, from: (f32, f32), to: (f32, f32), clamp: bool) -> f32 {
    let span = from.1 - from.0;
    if span == 0.0 {
        return to.0;
    }
    let mut t = (value - from.0) / span;
    if clamp {
        t = t.clamp(0.0, 1.0);
    }
    to.0 + t * (to.1 - to.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorSettings {
    pub smoothing: f32,
    pub clamp_to_screen: bool,
}

impl Default for CursorSettings {
    fn default() -> Self {
        Self {
            smoothing: SMOOTHING_FACTOR,
            clamp_to_screen: true,
        }
    }
}

/// 人差し指先端のフレーム座標を平滑化した画面座標に変換する
///
/// 平滑化状態は (0, 0) から始まり、このマッパーだけが更新する。
pub struct CursorMapper {
    area: TrackingArea,
    screen: ScreenSize,
    settings: CursorSettings,
    prev: (f32, f32),
}

impl CursorMapper {
    pub fn new(area: TrackingArea, screen: ScreenSize, settings: CursorSettings) -> Self {
        Self {
            area,
            screen,
            settings,
            prev: (0.0, 0.0),
        }
    }

    pub fn area(&self) -> &TrackingArea {
        &self.area
    }

    /// トラッキング領域だけを差し替える（平滑化状態は保持）
    pub fn set_area(&mut self, area: TrackingArea) {
        self.area = area;
    }

    /// 平滑化のみ（EMA）: prev + (target - prev) / smoothing
    pub fn smooth_toward(&mut self, target: (f32, f32)) -> (f32, f32) {
        let s = self.settings.smoothing;
        let x = self.prev.0 + (target.0 - self.prev.0) / s;
        let y = self.prev.1 + (target.1 - self.prev.1) / s;
        self.prev = (x, y);
        self.prev
    }

    /// 1フレーム分の更新。戻り値は鏡像カメラを補正した送信用の画面座標
    pub fn update(&mut self, tip: &Point) -> (f32, f32) {
        let target = self
            .area
            .map_to_screen(tip, &self.screen, self.settings.clamp_to_screen);
        let (x, y) = self.smooth_toward(target);
        (self.screen.width - x, y)
    }
}
