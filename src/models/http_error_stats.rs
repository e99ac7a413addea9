use std::collections::HashMap;

use crate::models::result::{RequestOutcome, RequestStatus};

// {(模板, 错误信息): 次数}
// 只在批次之间由控制器单线程合并, 不需要加锁
#[derive(Debug, Clone, Default)]
pub struct HttpErrorStats {
    errors: HashMap<(String, String), u32>,
}

impl HttpErrorStats {
    pub fn new() -> Self {
        HttpErrorStats {
            errors: HashMap::new(),
        }
    }

    pub fn increment(&mut self, template: String, error_message: String) {
        *self.errors.entry((template, error_message)).or_insert(0) += 1;
    }

    // 记录一次失败的请求结果
    pub fn record_failure(&mut self, outcome: &RequestOutcome) {
        let message = match &outcome.status {
            RequestStatus::Code(code) => format!("HTTP 状态码 {}", code),
            RequestStatus::Error(msg) => msg.clone(),
        };
        self.increment(outcome.template.clone(), message);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(String, String), &u32)> {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_counts() {
        let mut stats = HttpErrorStats::new();
        stats.increment("/prime/{n}".to_string(), "connection refused".to_string());
        stats.increment("/prime/{n}".to_string(), "connection refused".to_string());
        stats.increment("/sort/{n}".to_string(), "timeout".to_string());

        let mut counts: Vec<u32> = stats.iter().map(|(_, c)| *c).collect();
        counts.sort();
        assert_eq!(counts, vec![1, 2]);
    }

    #[test]
    fn test_record_failure_message() {
        let mut stats = HttpErrorStats::new();
        stats.record_failure(&RequestOutcome {
            url: "http://localhost:3000/prime/3".to_string(),
            template: "/prime/{n}".to_string(),
            status: RequestStatus::Code(500),
            elapsed_secs: 0.2,
            success: false,
        });
        let ((template, message), count) = stats.iter().next().unwrap();
        assert_eq!(template, "/prime/{n}");
        assert_eq!(message, "HTTP 状态码 500");
        assert_eq!(*count, 1);
    }
}
