use super::matcher::Gesture;
use crate::hand::{LandmarkError, LandmarkId, LandmarkSnapshot, Point};

/// 人差し指先端と中指先端の距離がこれ未満ならクリック（ピクセル）
pub const CLICK_DISTANCE_THRESHOLD: f32 = 45.0;

/// クリックの発火方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickTrigger {
    /// 条件が成立した最初のフレームだけ発火し、条件が外れると再度有効になる
    #[default]
    Edge,
    /// 条件が成立している間は毎フレーム発火
    Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    Left,
    Right,
}

/// 人差し指と中指の先端の計測結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pinch {
    pub distance: f32,
    /// 表示用
    pub midpoint: Point,
}

impl Pinch {
    pub fn measure(snapshot: &LandmarkSnapshot) -> Result<Self, LandmarkError> {
        let index = snapshot.get(LandmarkId::IndexTip)?;
        let middle = snapshot.get(LandmarkId::MiddleTip)?;
        Ok(Self {
            distance: index.distance(&middle),
            midpoint: index.midpoint(&middle),
        })
    }
}

/// 1フレーム分のクリック判定
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClickDecision {
    pub click: Option<ClickKind>,
    pub pinch: Option<Pinch>,
}

pub struct ClickDetector {
    threshold: f32,
    trigger: ClickTrigger,
    left_held: bool,
    right_held: bool,
}

impl ClickDetector {
    pub fn new(trigger: ClickTrigger) -> Self {
        Self {
            threshold: CLICK_DISTANCE_THRESHOLD,
            trigger,
            left_held: false,
            right_held: false,
        }
    }

    /// 距離がしきい値未満か（しきい値ちょうどは押下とみなさない）
    pub fn is_pressed(&self, pinch: &Pinch) -> bool {
        pinch.distance < self.threshold
    }

    /// 手が検出されたフレームごとに呼ぶ
    pub fn update(
        &mut self,
        gesture: Gesture,
        snapshot: &LandmarkSnapshot,
    ) -> Result<ClickDecision, LandmarkError> {
        match gesture {
            Gesture::LeftClickCandidate => {
                let pinch = Pinch::measure(snapshot)?;
                let pressed = self.is_pressed(&pinch);
                let fire = pressed && self.should_fire(self.left_held);
                self.left_held = pressed;
                self.right_held = false;
                Ok(ClickDecision {
                    click: fire.then_some(ClickKind::Left),
                    pinch: Some(pinch),
                })
            }
            Gesture::RightClick => {
                let fire = self.should_fire(self.right_held);
                self.right_held = true;
                self.left_held = false;
                Ok(ClickDecision {
                    click: fire.then_some(ClickKind::Right),
                    pinch: None,
                })
            }
            _ => {
                self.release();
                Ok(ClickDecision::default())
            }
        }
    }

    /// 手を見失ったときなど、押下状態を解除する
    pub fn release(&mut self) {
        self.left_held = false;
        self.right_held = false;
    }

    fn should_fire(&self, held: bool) -> bool {
        match self.trigger {
            ClickTrigger::Edge => !held,
            ClickTrigger::Level => true,
        }
    }
}
