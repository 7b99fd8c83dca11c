use std::time::{Duration, Instant};

/// 1 回の生成実行の統計。受理した単語数と経過時間を保持する。
///
/// 消費側が所有し、単語を受理するたびに `record` を呼ぶ。
/// 実行が中断された場合もそれまでの値をそのまま報告できる。
#[derive(Clone, Debug)]
pub struct RunStats {
    count: u64,
    started: Instant,
}

impl RunStats {
    /// 計測を開始する。
    pub fn start() -> Self {
        Self {
            count: 0,
            started: Instant::now(),
        }
    }

    /// 受理した単語を 1 つ数える。
    pub fn record(&mut self) {
        self.count += 1;
    }

    /// これまでに受理した単語数を返す。
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// 計測開始からの経過時間を返す。
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
