//! OS への入力送信の境界
//!
//! エンジンはこのトレイトだけを呼び出し、ポインタやキーボードに直接触れない。

#[cfg(feature = "desktop")]
pub mod system;

use anyhow::Result;

use crate::gesture::WindowCommand;

/// ホットキーを構成するキー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyKey {
    /// Windows キー / Super / Command
    Super,
    Up,
    Down,
}

/// 最大化: Super+Up
pub const MAXIMIZE_HOTKEY: [HotkeyKey; 2] = [HotkeyKey::Super, HotkeyKey::Up];
/// 最小化: Super+Down
pub const MINIMIZE_HOTKEY: [HotkeyKey; 2] = [HotkeyKey::Super, HotkeyKey::Down];

impl WindowCommand {
    pub fn hotkey(self) -> &'static [HotkeyKey] {
        match self {
            WindowCommand::Maximize => &MAXIMIZE_HOTKEY,
            WindowCommand::Minimize => &MINIMIZE_HOTKEY,
        }
    }
}

pub trait ActionDispatcher {
    /// 画面座標の絶対位置へカーソルを移動
    fn move_cursor_to(&mut self, x: f32, y: f32) -> Result<()>;
    fn left_click(&mut self) -> Result<()>;
    fn right_click(&mut self) -> Result<()>;
    /// 先頭から順に押下し、逆順に離す
    fn send_hotkey(&mut self, keys: &[HotkeyKey]) -> Result<()>;
}

/// 1フレームで送った操作
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    MoveCursor { x: f32, y: f32 },
    LeftClick,
    RightClick,
    Window(WindowCommand),
}

impl Action {
    pub fn dispatch<D: ActionDispatcher + ?Sized>(&self, dispatcher: &mut D) -> Result<()> {
        match *self {
            Action::MoveCursor { x, y } => dispatcher.move_cursor_to(x, y),
            Action::LeftClick => dispatcher.left_click(),
            Action::RightClick => dispatcher.right_click(),
            Action::Window(cmd) => dispatcher.send_hotkey(cmd.hotkey()),
        }
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Move(f32, f32),
        LeftClick,
        RightClick,
        Hotkey(Vec<HotkeyKey>),
    }

    /// 呼び出しを記録するだけのディスパッチャ
    #[derive(Debug, Default)]
    pub struct RecordingDispatcher {
        pub calls: Vec<Call>,
    }

    impl RecordingDispatcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn moves(&self) -> Vec<(f32, f32)> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Move(x, y) => Some((*x, *y)),
                    _ => None,
                })
                .collect()
        }

        pub fn count(&self, call: &Call) -> usize {
            self.calls.iter().filter(|c| *c == call).count()
        }
    }

    impl ActionDispatcher for RecordingDispatcher {
        fn move_cursor_to(&mut self, x: f32, y: f32) -> Result<()> {
            self.calls.push(Call::Move(x, y));
            Ok(())
        }

        fn left_click(&mut self) -> Result<()> {
            self.calls.push(Call::LeftClick);
            Ok(())
        }

        fn right_click(&mut self) -> Result<()> {
            self.calls.push(Call::RightClick);
            Ok(())
        }

        fn send_hotkey(&mut self, keys: &[HotkeyKey]) -> Result<()> {
            self.calls.push(Call::Hotkey(keys.to_vec()));
            Ok(())
        }
    }
}
