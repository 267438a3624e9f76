use super::landmark::{LandmarkError, LandmarkId, LandmarkSnapshot};

/// 左右の手の判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chirality {
    Left,
    Right,
}

impl Chirality {
    /// 親指先端が小指先端より左なら左手、それ以外は右手
    ///
    /// 手が正面を向いて立っている前提の2Dヒューリスティック。
    pub fn detect(snapshot: &LandmarkSnapshot) -> Result<Self, LandmarkError> {
        let thumb = snapshot.get(LandmarkId::ThumbTip)?;
        let pinky = snapshot.get(LandmarkId::PinkyTip)?;
        if thumb.x < pinky.x {
            Ok(Self::Left)
        } else {
            Ok(Self::Right)
        }
    }
}

/// 指の識別子（ベクトル内の並び順）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finger {
    Thumb = 0,
    Index = 1,
    Middle = 2,
    Ring = 3,
    Pinky = 4,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    pub fn tip(self) -> LandmarkId {
        match self {
            Finger::Thumb => LandmarkId::ThumbTip,
            Finger::Index => LandmarkId::IndexTip,
            Finger::Middle => LandmarkId::MiddleTip,
            Finger::Ring => LandmarkId::RingTip,
            Finger::Pinky => LandmarkId::PinkyTip,
        }
    }

    /// 伸展判定で先端と比較する関節（同じ指の2つ手前）
    pub fn reference_joint(self) -> LandmarkId {
        match self {
            Finger::Thumb => LandmarkId::ThumbIp,
            Finger::Index => LandmarkId::IndexPip,
            Finger::Middle => LandmarkId::MiddlePip,
            Finger::Ring => LandmarkId::RingPip,
            Finger::Pinky => LandmarkId::PinkyPip,
        }
    }
}

/// 指ごとの伸展状態 [親指, 人差し指, 中指, 薬指, 小指]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FingerExtension(pub [bool; 5]);

impl FingerExtension {
    pub fn as_array(&self) -> [bool; 5] {
        self.0
    }

    /// スナップショットから伸展ベクトルを計算する
    ///
    /// 手が見つかっていないフレームでは `Ok(None)`。
    /// 親指は左右でx比較が反転し、他の4本は先端のyがPIP関節より小さい（上）なら伸展。
    pub fn classify(snapshot: &LandmarkSnapshot) -> Result<Option<Self>, LandmarkError> {
        if !snapshot.is_found() {
            return Ok(None);
        }

        let chirality = Chirality::detect(snapshot)?;
        let mut fingers = [false; 5];

        let thumb_tip = snapshot.get(Finger::Thumb.tip())?;
        let thumb_ip = snapshot.get(Finger::Thumb.reference_joint())?;
        fingers[Finger::Thumb as usize] = match chirality {
            Chirality::Right => thumb_tip.x > thumb_ip.x,
            Chirality::Left => thumb_tip.x < thumb_ip.x,
        };

        for finger in &Finger::ALL[1..] {
            let tip = snapshot.get(finger.tip())?;
            let joint = snapshot.get(finger.reference_joint())?;
            fingers[*finger as usize] = tip.y < joint.y;
        }

        Ok(Some(Self(fingers)))
    }
}
