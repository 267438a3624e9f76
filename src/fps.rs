use std::time::Instant;

/// フレーム間隔から瞬間FPSを求める
///
/// 同一時刻のタイムスタンプが続いた場合はゼロ除算せず `None`（不明）を返す。
pub struct FpsCounter {
    last: Option<Instant>,
    fps: Option<f32>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self { last: None, fps: None }
    }

    /// 新しいフレームの時刻を記録
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.fps = self.last.and_then(|prev| {
            let dt = now.saturating_duration_since(prev).as_secs_f32();
            if dt > 0.0 {
                Some(1.0 / dt)
            } else {
                None
            }
        });
        self.last = Some(now);
        self.fps
    }

    /// 表示用ラベル
    pub fn label(&self) -> String {
        match self.fps {
            Some(fps) => format!("Frame:{}", fps.round() as i32),
            None => "Frame:-".to_string(),
        }
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_first_tick_unknown() {
        let mut counter = FpsCounter::new();
        assert_eq!(counter.tick(Instant::now()), None);
        assert_eq!(counter.label(), "Frame:-");
    }

    #[test]
    fn test_rate_from_interval() {
        let mut counter = FpsCounter::new();
        let t0 = Instant::now();
        counter.tick(t0);
        let fps = counter.tick(t0 + Duration::from_millis(40)).unwrap();
        assert!((fps - 25.0).abs() < 0.01);
        assert_eq!(counter.label(), "Frame:25");
    }

    #[test]
    fn test_identical_timestamps_do_not_divide_by_zero() {
        let mut counter = FpsCounter::new();
        let t0 = Instant::now();
        counter.tick(t0);
        assert_eq!(counter.tick(t0), None);
        assert_eq!(counter.label(), "Frame:-");

        // 次の正常な間隔で復帰する
        assert!(counter.tick(t0 + Duration::from_millis(10)).is_some());
    }
}
