use super::matcher::Gesture;

/// ウィンドウ操作コマンド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCommand {
    Maximize,
    Minimize,
}

/// 最大化/最小化のラッチ
///
/// 同じジェスチャーを保持し続けてもホットキーは状態遷移時に1回だけ送る。
/// maximized と minimized が同時に true になることはない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowToggle {
    maximized: bool,
    minimized: bool,
}

impl WindowToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    /// ジェスチャーを与え、遷移した場合のみ送るべきコマンドを返す
    pub fn update(&mut self, gesture: Gesture) -> Option<WindowCommand> {
        match gesture {
            Gesture::Maximize if !self.maximized => {
                self.maximized = true;
                self.minimized = false;
                Some(WindowCommand::Maximize)
            }
            Gesture::Minimize if !self.minimized => {
                self.minimized = true;
                self.maximized = false;
                Some(WindowCommand::Minimize)
            }
            _ => None,
        }
    }
}
