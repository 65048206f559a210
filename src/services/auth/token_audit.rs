//! 토큰 감사(audit) 이벤트
//!
//! 발급/검증 결과를 관측 계층으로 내보내는 훅입니다.
//! 이벤트에는 이벤트 이름, 토큰 종류, 결과 코드만 실립니다.
//! 토큰 문자열, 클레임 값, 서명 키는 어떤 경로로도 전달되지 않습니다.

use crate::domain::models::token::TokenClass;

/// 발급 이벤트 이름
pub const TOKEN_ISSUED: &str = "token.issued";
/// 검증 이벤트 이름
pub const TOKEN_VALIDATED: &str = "token.validated";

/// 토큰 연산 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenOutcome {
    Success,
    Rejected(&'static str),
}

impl TokenOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenOutcome::Success => "success",
            TokenOutcome::Rejected(code) => code,
        }
    }
}

/// 토큰 이벤트 관측자
pub trait TokenObserver: Send + Sync {
    fn record(&self, event: &'static str, class: TokenClass, outcome: TokenOutcome);
}

/// `log` 파사드의 `token_audit` 타깃으로 이벤트를 기록하는 기본 관측자
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTokenObserver;

impl TokenObserver for LogTokenObserver {
    fn record(&self, event: &'static str, class: TokenClass, outcome: TokenOutcome) {
        match outcome {
            TokenOutcome::Success => log::debug!(
                target: "token_audit",
                "event={} class={} outcome={}",
                event,
                class.as_str(),
                outcome.as_str()
            ),
            TokenOutcome::Rejected(_) => log::info!(
                target: "token_audit",
                "event={} class={} outcome={}",
                event,
                class.as_str(),
                outcome.as_str()
            ),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// 기록된 이벤트를 메모리에 모아 두는 테스트용 관측자
    #[derive(Default)]
    pub(crate) struct RecordingObserver {
        pub events: Mutex<Vec<(String, TokenClass, String)>>,
    }

    impl RecordingObserver {
        pub fn snapshot(&self) -> Vec<(String, TokenClass, String)> {
            self.events.lock().unwrap().clone()
        }
    }

    impl TokenObserver for RecordingObserver {
        fn record(&self, event: &'static str, class: TokenClass, outcome: TokenOutcome) {
            self.events
                .lock()
                .unwrap()
                .push((event.to_string(), class, outcome.as_str().to_string()));
        }
    }

    #[test]
    fn test_outcome_codes() {
        assert_eq!(TokenOutcome::Success.as_str(), "success");
        assert_eq!(TokenOutcome::Rejected("expired").as_str(), "expired");
    }
}
