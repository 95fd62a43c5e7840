//! 글자 출력 타이머
//!
//! 컨트롤러의 `timer_epoch()`와 `tick_interval()`을 따라가며 다음 tick 시각을 계산합니다.
//! 세대 번호가 바뀌면(스킵, 새 대사, 대본 교체) 대기 중인 tick은 버리고 새로 예약합니다.
//! 한 번의 poll에서 최대 한 글자만 발화하므로 지연이 쌓여도 몰아서 출력하지 않습니다.

use std::time::{Duration, Instant};

/// 취소 가능한 tick 타이머
#[derive(Debug, Default)]
pub struct TickTimer {
    epoch: Option<u64>,
    interval: Option<Duration>,
    deadline: Option<Instant>,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 컨트롤러 상태에 맞춰 타이머 재설정
    /// interval이 None이면 타이머 해제
    pub fn sync(&mut self, epoch: u64, interval: Option<Duration>, now: Instant) {
        match interval {
            None => {
                self.interval = None;
                self.deadline = None;
            }
            Some(interval) => {
                if self.epoch != Some(epoch) || self.deadline.is_none() {
                    self.deadline = Some(now + interval);
                }
                self.interval = Some(interval);
            }
        }
        self.epoch = Some(epoch);
    }

    /// 예약된 tick이 있는지
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// 다음 tick까지 남은 시간 (해제 상태면 None)
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// 시각이 되었으면 true를 반환하고 다음 tick을 now + interval로 예약
    pub fn poll(&mut self, now: Instant) -> bool {
        match (self.deadline, self.interval) {
            (Some(deadline), Some(interval)) if now >= deadline => {
                self.deadline = Some(now + interval);
                true
            }
            _ => false,
        }
    }
}
