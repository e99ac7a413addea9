use std::fmt;

// 一次采样出来的具体请求
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub template: String,
    pub url: String,
    pub param: u64,
}

// 请求结果状态: 状态码或者传输层错误信息
#[derive(Debug, Clone)]
pub enum RequestStatus {
    Code(u16),
    Error(String),
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStatus::Code(code) => write!(f, "{}", code),
            RequestStatus::Error(msg) => write!(f, "Error: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RequestOutcome {
    pub url: String,
    pub template: String,
    pub status: RequestStatus,
    pub elapsed_secs: f64,
    pub success: bool,
}

#[derive(Debug, Clone)]
pub struct BatchResult {
    // 收集顺序, 不保证与发起顺序一致
    pub outcomes: Vec<RequestOutcome>,
    pub batch_elapsed_secs: f64,
}

impl BatchResult {
    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    pub fn durations(&self) -> Vec<f64> {
        self.outcomes.iter().map(|o| o.elapsed_secs).collect()
    }
}

// 一组耗时序列的统计摘要, 由统计引擎在每次打印时重新计算
#[derive(Debug, Clone, PartialEq)]
pub struct DurationSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub p95: f64,
}
