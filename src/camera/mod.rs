#[cfg(feature = "desktop")]
pub mod capture;

#[cfg(feature = "desktop")]
pub use capture::OpenCvCamera;

/// 連続したフレーム読み取り失敗の数え上げ
///
/// 失敗は1フレーム単位で読み飛ばし、上限に達したらループを終了させる。
#[derive(Debug, Clone)]
pub struct ReadFailures {
    max_consecutive: u32,
    consecutive: u32,
}

impl ReadFailures {
    pub fn new(max_consecutive: u32) -> Self {
        Self {
            max_consecutive: max_consecutive.max(1),
            consecutive: 0,
        }
    }

    pub fn record_success(&mut self) {
        self.consecutive = 0;
    }

    /// 失敗を記録し、上限に達したら true
    pub fn record_failure(&mut self) -> bool {
        self.consecutive = self.consecutive.saturating_add(1);
        self.consecutive >= self.max_consecutive
    }

    pub fn consecutive(&self) -> u32 {
        self.consecutive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gives_up_after_limit() {
        let mut failures = ReadFailures::new(3);
        assert!(!failures.record_failure());
        assert!(!failures.record_failure());
        assert!(failures.record_failure());
    }

    #[test]
    fn test_success_resets() {
        let mut failures = ReadFailures::new(3);
        failures.record_failure();
        failures.record_failure();
        failures.record_success();
        assert_eq!(failures.consecutive(), 0);
        assert!(!failures.record_failure());
    }

    #[test]
    fn test_zero_limit_treated_as_one() {
        let mut failures = ReadFailures::new(0);
        assert!(failures.record_failure());
    }
}
