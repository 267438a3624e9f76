use crate::hand::FingerExtension;

/// 1フレームにつき1つ決まるジェスチャー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    CursorMove,
    LeftClickCandidate,
    RightClick,
    Maximize,
    Minimize,
    None,
}

impl Gesture {
    pub fn name(self) -> &'static str {
        match self {
            Gesture::CursorMove => "cursor_move",
            Gesture::LeftClickCandidate => "left_click_candidate",
            Gesture::RightClick => "right_click",
            Gesture::Maximize => "maximize",
            Gesture::Minimize => "minimize",
            Gesture::None => "none",
        }
    }
}

/// 伸展パターン表 [親指, 人差し指, 中指, 薬指, 小指]
pub const GESTURE_TABLE: [([bool; 5], Gesture); 5] = [
    ([false, true, false, false, false], Gesture::CursorMove),
    ([false, true, true, false, false], Gesture::LeftClickCandidate),
    ([false, true, false, false, true], Gesture::RightClick),
    ([true, true, true, true, true], Gesture::Maximize),
    ([true, true, false, false, false], Gesture::Minimize),
];

/// 完全一致でジェスチャーを決定する。表にないパターンは `Gesture::None`
pub fn match_gesture(fingers: &FingerExtension) -> Gesture {
    GESTURE_TABLE
        .iter()
        .find(|(pattern, _)| *pattern == fingers.as_array())
        .map(|(_, gesture)| *gesture)
        .unwrap_or(Gesture::None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_vectors() -> impl Iterator<Item = [bool; 5]> {
        (0u8..32).map(|bits| std::array::from_fn(|i| bits & (1 << i) != 0))
    }

    #[test]
    fn test_table_patterns_distinct() {
        for (i, (a, _)) in GESTURE_TABLE.iter().enumerate() {
            for (b, _) in &GESTURE_TABLE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_table_entries() {
        let cases = [
            ([false, true, false, false, false], Gesture::CursorMove),
            ([false, true, true, false, false], Gesture::LeftClickCandidate),
            ([false, true, false, false, true], Gesture::RightClick),
            ([true, true, true, true, true], Gesture::Maximize),
            ([true, true, false, false, false], Gesture::Minimize),
        ];
        for (pattern, expected) in cases {
            assert_eq!(match_gesture(&FingerExtension(pattern)), expected);
        }
    }

    #[test]
    fn test_cursor_move_only_for_index_up() {
        let mut matched = 0;
        for v in all_vectors() {
            if match_gesture(&FingerExtension(v)) == Gesture::CursorMove {
                assert_eq!(v, [false, true, false, false, false]);
                matched += 1;
            }
        }
        assert_eq!(matched, 1);
    }

    #[test]
    fn test_unlisted_vectors_are_none() {
        let listed: Vec<[bool; 5]> = GESTURE_TABLE.iter().map(|(p, _)| *p).collect();
        let mut none_count = 0;
        for v in all_vectors() {
            if !listed.contains(&v) {
                assert_eq!(match_gesture(&FingerExtension(v)), Gesture::None);
                none_count += 1;
            }
        }
        assert_eq!(none_count, 32 - GESTURE_TABLE.len());
    }
}
