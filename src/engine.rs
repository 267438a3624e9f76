use anyhow::Result;
use tracing::{debug, warn};

use crate::action::{Action, ActionDispatcher};
use crate::gesture::click::ClickKind;
use crate::gesture::cursor::TRACKING_MARGINS;
use crate::gesture::{
    match_gesture, ClickDetector, ClickTrigger, CursorMapper, CursorSettings, Gesture, Pinch,
    ScreenSize, TrackingArea, TrackingMargins, WindowToggle,
};
use crate::hand::{FingerExtension, LandmarkError, LandmarkId, LandmarkSnapshot};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    pub margins: TrackingMargins,
    pub cursor: CursorSettings,
    pub click_trigger: ClickTrigger,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            margins: TRACKING_MARGINS,
            cursor: CursorSettings::default(),
            click_trigger: ClickTrigger::default(),
        }
    }
}

/// 1フレームの判定結果
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameOutcome {
    pub fingers: Option<FingerExtension>,
    pub gesture: Option<Gesture>,
    pub action: Option<Action>,
    /// クリック候補時の指先間計測（表示用）
    pub pinch: Option<Pinch>,
}

/// ランドマークからジェスチャーを解釈し、操作を送るエンジン
///
/// カーソル平滑化・クリック保持・ウィンドウ状態を所有し、フレームループから
/// `&mut` で呼ばれる。
pub struct GestureEngine {
    margins: TrackingMargins,
    cursor: CursorMapper,
    click: ClickDetector,
    window: WindowToggle,
}

impl GestureEngine {
    /// 実フレームサイズと画面サイズから作成
    pub fn new(frame_width: u32, frame_height: u32, screen: ScreenSize, settings: EngineSettings) -> Result<Self> {
        let smoothing = settings.cursor.smoothing;
        if !smoothing.is_finite() || smoothing <= 1.0 {
            anyhow::bail!("Cursor smoothing factor must be a finite value above 1 (got {})", smoothing);
        }
        let area = Self::area_for(frame_width, frame_height, &settings.margins)?;
        Ok(Self {
            margins: settings.margins,
            cursor: CursorMapper::new(area, screen, settings.cursor),
            click: ClickDetector::new(settings.click_trigger),
            window: WindowToggle::new(),
        })
    }

    pub fn tracking_area(&self) -> &TrackingArea {
        self.cursor.area()
    }

    pub fn window_state(&self) -> &WindowToggle {
        &self.window
    }

    /// 実フレームサイズが変わったときにトラッキング領域だけを作り直す
    ///
    /// カーソルの平滑化状態・クリック保持・ウィンドウ状態はそのまま。
    /// 領域が取れないサイズならエラーで、現在の領域を維持する。
    pub fn set_frame_size(&mut self, frame_width: u32, frame_height: u32) -> Result<()> {
        let area = Self::area_for(frame_width, frame_height, &self.margins)?;
        self.cursor.set_area(area);
        Ok(())
    }

    fn area_for(frame_width: u32, frame_height: u32, margins: &TrackingMargins) -> Result<TrackingArea> {
        match TrackingArea::from_margins(frame_width, frame_height, margins) {
            Some(area) => Ok(area),
            None => anyhow::bail!(
                "Frame {}x{} is too small for the tracking area margins",
                frame_width,
                frame_height
            ),
        }
    }

    /// 1フレーム分の処理。決まった操作があれば dispatcher に送る
    ///
    /// 手が無いフレームや、ランドマークが欠けたフレームでは何も送らない。
    pub fn process_frame<D: ActionDispatcher + ?Sized>(
        &mut self,
        snapshot: &LandmarkSnapshot,
        dispatcher: &mut D,
    ) -> Result<FrameOutcome> {
        let outcome = match self.interpret(snapshot) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Skipping frame: {}", e);
                self.click.release();
                return Ok(FrameOutcome::default());
            }
        };

        if let Some(action) = outcome.action {
            if !matches!(action, Action::MoveCursor { .. }) {
                debug!("{:?} -> {:?}", outcome.gesture, action);
            }
            action.dispatch(dispatcher)?;
        }

        Ok(outcome)
    }

    fn interpret(&mut self, snapshot: &LandmarkSnapshot) -> Result<FrameOutcome, LandmarkError> {
        let fingers = match FingerExtension::classify(snapshot)? {
            Some(fingers) => fingers,
            None => {
                self.click.release();
                return Ok(FrameOutcome::default());
            }
        };
        let gesture = match_gesture(&fingers);

        let click = self.click.update(gesture, snapshot)?;
        let window = self.window.update(gesture);

        let action = match gesture {
            Gesture::CursorMove => {
                let tip = snapshot.get(LandmarkId::IndexTip)?;
                let (x, y) = self.cursor.update(&tip);
                Some(Action::MoveCursor { x, y })
            }
            Gesture::LeftClickCandidate | Gesture::RightClick => click.click.map(|kind| match kind {
                ClickKind::Left => Action::LeftClick,
                ClickKind::Right => Action::RightClick,
            }),
            Gesture::Maximize | Gesture::Minimize => window.map(Action::Window),
            Gesture::None => None,
        };

        Ok(FrameOutcome {
            fingers: Some(fingers),
            gesture: Some(gesture),
            action,
            pinch: click.pinch,
        })
    }
}
