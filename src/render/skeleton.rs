use crate::gesture::Gesture;
use crate::hand::LandmarkId;

/// 手の骨格の接続定義 (開始ランドマーク, 終了ランドマーク)
pub const HAND_CONNECTIONS: [(LandmarkId, LandmarkId); 21] = [
    // 親指
    (LandmarkId::Wrist, LandmarkId::ThumbCmc),
    (LandmarkId::ThumbCmc, LandmarkId::ThumbMcp),
    (LandmarkId::ThumbMcp, LandmarkId::ThumbIp),
    (LandmarkId::ThumbIp, LandmarkId::ThumbTip),
    // 人差し指
    (LandmarkId::Wrist, LandmarkId::IndexMcp),
    (LandmarkId::IndexMcp, LandmarkId::IndexPip),
    (LandmarkId::IndexPip, LandmarkId::IndexDip),
    (LandmarkId::IndexDip, LandmarkId::IndexTip),
    // 中指
    (LandmarkId::MiddleMcp, LandmarkId::MiddlePip),
    (LandmarkId::MiddlePip, LandmarkId::MiddleDip),
    (LandmarkId::MiddleDip, LandmarkId::MiddleTip),
    // 薬指
    (LandmarkId::RingMcp, LandmarkId::RingPip),
    (LandmarkId::RingPip, LandmarkId::RingDip),
    (LandmarkId::RingDip, LandmarkId::RingTip),
    // 小指
    (LandmarkId::Wrist, LandmarkId::PinkyMcp),
    (LandmarkId::PinkyMcp, LandmarkId::PinkyPip),
    (LandmarkId::PinkyPip, LandmarkId::PinkyDip),
    (LandmarkId::PinkyDip, LandmarkId::PinkyTip),
    // 手のひら
    (LandmarkId::IndexMcp, LandmarkId::MiddleMcp),
    (LandmarkId::MiddleMcp, LandmarkId::RingMcp),
    (LandmarkId::RingMcp, LandmarkId::PinkyMcp),
];

/// ランドマークの色 (RGB)
pub const LANDMARK_COLOR: u32 = 0x0000FF; // 青

/// 骨格線の色 (RGB)
pub const CONNECTION_COLOR: u32 = 0xFFFFFF; // 白

/// 操作に使っている指先の色 (RGB)
pub const ACTIVE_TIP_COLOR: u32 = 0xE6E6FA; // ラベンダー

/// ジェスチャーごとに強調する指先
pub fn active_tips(gesture: Gesture) -> &'static [LandmarkId] {
    match gesture {
        Gesture::CursorMove => &[LandmarkId::IndexTip],
        Gesture::LeftClickCandidate => &[LandmarkId::IndexTip, LandmarkId::MiddleTip],
        Gesture::RightClick => &[LandmarkId::PinkyTip],
        Gesture::Maximize | Gesture::Minimize | Gesture::None => &[],
    }
}

/// 指先と同じ指に属する骨格線（手首からの線を含む）
pub fn finger_chain(tip: LandmarkId) -> impl Iterator<Item = (LandmarkId, LandmarkId)> {
    let end = tip.index();
    let start = end.saturating_sub(3);
    let in_chain = move |id: LandmarkId| (start..=end).contains(&id.index());
    HAND_CONNECTIONS
        .iter()
        .copied()
        .filter(move |&(a, b)| in_chain(b) && (in_chain(a) || a == LandmarkId::Wrist))
}
