use anyhow::{Context, Result};
use enigo::{Button, Coordinate, Direction, Enigo, Key, Keyboard, Mouse, Settings};
use tracing::debug;

use super::{ActionDispatcher, HotkeyKey};
use crate::gesture::ScreenSize;

/// enigo を使って実際のポインタとキーボードを操作する
pub struct EnigoDispatcher {
    enigo: Enigo,
}

impl EnigoDispatcher {
    pub fn new() -> Result<Self> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| anyhow::anyhow!("Failed to connect to input backend: {:?}", e))?;
        Ok(Self { enigo })
    }

    /// メインディスプレイの解像度（起動時に1回だけ問い合わせる）
    pub fn screen_size(&self) -> Result<ScreenSize> {
        let (w, h) = self
            .enigo
            .main_display()
            .map_err(|e| anyhow::anyhow!("{:?}", e))
            .context("Failed to query screen size")?;
        Ok(ScreenSize::new(w as f32, h as f32))
    }

    fn to_key(key: HotkeyKey) -> Key {
        match key {
            HotkeyKey::Super => Key::Meta,
            HotkeyKey::Up => Key::UpArrow,
            HotkeyKey::Down => Key::DownArrow,
        }
    }
}

impl ActionDispatcher for EnigoDispatcher {
    fn move_cursor_to(&mut self, x: f32, y: f32) -> Result<()> {
        self.enigo
            .move_mouse(x.round() as i32, y.round() as i32, Coordinate::Abs)
            .map_err(|e| anyhow::anyhow!("Failed to move cursor: {:?}", e))
    }

    fn left_click(&mut self) -> Result<()> {
        debug!("left click");
        self.enigo
            .button(Button::Left, Direction::Click)
            .map_err(|e| anyhow::anyhow!("Failed to left click: {:?}", e))
    }

    fn right_click(&mut self) -> Result<()> {
        debug!("right click");
        self.enigo
            .button(Button::Right, Direction::Click)
            .map_err(|e| anyhow::anyhow!("Failed to right click: {:?}", e))
    }

    fn send_hotkey(&mut self, keys: &[HotkeyKey]) -> Result<()> {
        debug!("hotkey {:?}", keys);
        for &key in keys {
            self.enigo
                .key(Self::to_key(key), Direction::Press)
                .map_err(|e| anyhow::anyhow!("Failed to press {:?}: {:?}", key, e))?;
        }
        for &key in keys.iter().rev() {
            self.enigo
                .key(Self::to_key(key), Direction::Release)
                .map_err(|e| anyhow::anyhow!("Failed to release {:?}: {:?}", key, e))?;
        }
        Ok(())
    }
}
