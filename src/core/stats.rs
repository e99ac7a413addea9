use crate::models::result::DurationSummary;

// 对一组耗时序列做统计, 空序列返回None而不是除零
pub fn summarize(durations: &[f64]) -> Option<DurationSummary> {
    if durations.is_empty() {
        return None;
    }
    let mut sorted = durations.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let count = sorted.len();
    let mean = sorted.iter().sum::<f64>() / count as f64;
    // 偶数个取中间两个的平均
    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };
    // 最近秩估计: 升序第 floor(0.95*count) 个(从0数), 不做插值
    let p95 = sorted[(count as f64 * 0.95).floor() as usize];
    Some(DurationSummary {
        min: sorted[0],
        max: sorted[count - 1],
        mean,
        median,
        p95,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series_suppressed() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_single_element() {
        let summary = summarize(&[0.3]).unwrap();
        assert_eq!(summary.min, 0.3);
        assert_eq!(summary.max, 0.3);
        assert_eq!(summary.mean, 0.3);
        assert_eq!(summary.median, 0.3);
        assert_eq!(summary.p95, 0.3);
    }

    #[test]
    fn test_even_count_series() {
        // 0.1..=1.0
        let durations: Vec<f64> = (1..=10).map(|i| i as f64 / 10.0).collect();
        let summary = summarize(&durations).unwrap();
        assert!((summary.min - 0.1).abs() < 1e-9);
        assert!((summary.max - 1.0).abs() < 1e-9);
        assert!((summary.mean - 0.55).abs() < 1e-9);
        assert!((summary.median - 0.55).abs() < 1e-9);
        // floor(0.95 * 10) = 9
        assert!((summary.p95 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_odd_count_median() {
        let summary = summarize(&[0.5, 0.1, 0.3]).unwrap();
        assert!((summary.median - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_p95_nearest_rank_index() {
        for count in [1usize, 2, 5, 19, 20, 21, 100, 101] {
            let durations: Vec<f64> = (0..count).map(|i| i as f64).collect();
            let summary = summarize(&durations).unwrap();
            let expected_index = (count as f64 * 0.95).floor() as usize;
            assert_eq!(summary.p95, durations[expected_index], "count={}", count);
        }
    }

    #[test]
    fn test_ordering_invariant() {
        let durations = [2.5, 0.04, 1.0, 0.7, 3.2, 0.9, 0.9, 5.0];
        let summary = summarize(&durations).unwrap();
        assert!(summary.min <= summary.median);
        assert!(summary.median <= summary.max);
        assert!(summary.min <= summary.mean && summary.mean <= summary.max);
        assert!(summary.p95 <= summary.max);
    }
}
