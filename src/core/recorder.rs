use std::collections::HashMap;

use crate::models::http_error_stats::HttpErrorStats;
use crate::models::result::{BatchResult, RequestOutcome};

// 整个压测的累计数据
// 请求协程各自返回结果, 由join_all统一收集, 这里只在批次之间被控制器单线程写入
#[derive(Debug, Default)]
pub struct RunRecorder {
    pub all_durations: Vec<f64>,
    pub endpoint_durations: HashMap<String, Vec<f64>>,
    // {模板: (成功数, 总数)} 按真实请求结果
    pub endpoint_success: HashMap<String, (u64, u64)>,
    pub success_count: u64,
    pub total_count: u64,
    pub http_errors: HttpErrorStats,
}

impl RunRecorder {
    pub fn new() -> Self {
        RunRecorder::default()
    }

    pub fn record(&mut self, outcome: &RequestOutcome) {
        self.all_durations.push(outcome.elapsed_secs);
        self.endpoint_durations
            .entry(outcome.template.clone())
            .or_default()
            .push(outcome.elapsed_secs);
        let counters = self
            .endpoint_success
            .entry(outcome.template.clone())
            .or_insert((0, 0));
        counters.1 += 1;
        self.total_count += 1;
        if outcome.success {
            counters.0 += 1;
            self.success_count += 1;
        } else {
            self.http_errors.record_failure(outcome);
        }
    }

    // 把一个批次折进累计状态
    pub fn merge_batch(&mut self, batch: &BatchResult) {
        for outcome in &batch.outcomes {
            self.record(outcome);
        }
    }
}
