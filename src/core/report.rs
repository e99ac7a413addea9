use prettytable::{format, row, Cell, Row, Table};

use crate::core::recorder::RunRecorder;
use crate::core::stats::summarize;
use crate::models::config::RunConfig;
use crate::models::result::{BatchResult, RequestOutcome};

// "最慢请求"列表展示的条数
const SLOWEST_COUNT: usize = 5;

pub fn success_line(success: usize, total: usize) -> String {
    let pct = if total > 0 {
        success as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    format!("{}/{} ({:.1}%)", success, total, pct)
}

// 单个请求的结果行
pub fn outcome_line(outcome: &RequestOutcome) -> String {
    if outcome.success {
        format!("✔ {} - {:.2}s", outcome.url, outcome.elapsed_secs)
    } else {
        format!("✖ {} - {}", outcome.url, outcome.status)
    }
}

// 按耗时降序取最慢的count个
pub fn slowest_outcomes(batch: &BatchResult, count: usize) -> Vec<&RequestOutcome> {
    let mut sorted: Vec<&RequestOutcome> = batch.outcomes.iter().collect();
    sorted.sort_by(|a, b| {
        b.elapsed_secs
            .partial_cmp(&a.elapsed_secs)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(count);
    sorted
}

pub fn print_batch_report(batch_index: u64, batch: &BatchResult, verbose: bool) {
    println!("\n第{}批完成, 耗时{:.2}s", batch_index, batch.batch_elapsed_secs);
    if verbose {
        for outcome in &batch.outcomes {
            println!("{}", outcome_line(outcome));
        }
    }
    println!(
        "成功率: {}",
        success_line(batch.success_count(), batch.outcomes.len())
    );
    if let Some(summary) = summarize(&batch.durations()) {
        println!(
            "响应时间: 最小{:.3}s 最大{:.3}s 平均{:.3}s",
            summary.min, summary.max, summary.mean
        );
    }
    let slowest = slowest_outcomes(batch, SLOWEST_COUNT);
    if !slowest.is_empty() {
        println!("最慢的{}个请求:", slowest.len());
        for outcome in slowest {
            println!("  {:.2}s - {} - {}", outcome.elapsed_secs, outcome.url, outcome.status);
        }
    }
}

pub fn print_final_report(recorder: &RunRecorder, config: &RunConfig) {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

    table.add_row(row!["指标", "值"]);
    table.add_row(row!["总请求数", format!("{}", recorder.total_count)]);
    table.add_row(row![
        "成功率",
        success_line(recorder.success_count as usize, recorder.total_count as usize)
    ]);
    if let Some(summary) = summarize(&recorder.all_durations) {
        table.add_row(row!["最小响应时间", format!("{:.3}s", summary.min)]);
        table.add_row(row!["最大响应时间", format!("{:.3}s", summary.max)]);
        table.add_row(row!["平均响应时间", format!("{:.3}s", summary.mean)]);
        table.add_row(row!["中位响应时间", format!("{:.3}s", summary.median)]);
        table.add_row(row!["95%响应时间", format!("{:.3}s", summary.p95)]);
    }
    println!("\n压测总结果:");
    table.printstd();

    if !recorder.endpoint_durations.is_empty() {
        let mut endpoint_table = Table::new();
        endpoint_table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        endpoint_table.add_row(row!["端点", "请求数", "平均", "最大", "成功率"]);
        let mut templates: Vec<&String> = recorder.endpoint_durations.keys().collect();
        templates.sort();
        for template in templates {
            let durations = &recorder.endpoint_durations[template];
            let summary = match summarize(durations) {
                Some(summary) => summary,
                None => continue,
            };
            let success_pct = endpoint_success_pct(recorder, template, durations, config);
            endpoint_table.add_row(Row::new(vec![
                Cell::new(template),
                Cell::new(&format!("{}", durations.len())),
                Cell::new(&format!("{:.3}s", summary.mean)),
                Cell::new(&format!("{:.3}s", summary.max)),
                Cell::new(&format!("{:.1}%", success_pct)),
            ]));
        }
        println!("端点明细:");
        endpoint_table.printstd();
    }

    if !recorder.http_errors.is_empty() {
        let mut errors_table = Table::new();
        errors_table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        errors_table.add_row(row!["端点", "错误信息", "次数"]);
        for ((template, message), count) in recorder.http_errors.iter() {
            errors_table.add_row(Row::new(vec![
                Cell::new(template),
                Cell::new(&format!("{:?}", message)).style_spec("R"),
                Cell::new(format!("{}", count).as_str()),
            ]));
        }
        println!("HTTP 错误:");
        errors_table.printstd();
    }
}

// 端点成功率口径:
// 默认沿用"耗时小于超时"的估算(与来源报表保持一致, 慢的200会被算成失败),
// strict模式改用每个请求记录下来的真实结果
fn endpoint_success_pct(
    recorder: &RunRecorder,
    template: &str,
    durations: &[f64],
    config: &RunConfig,
) -> f64 {
    if config.strict_success {
        match recorder.endpoint_success.get(template) {
            Some((success, total)) if *total > 0 => *success as f64 / *total as f64 * 100.0,
            _ => 0.0,
        }
    } else {
        let timeout = config.timeout_secs as f64;
        durations.iter().filter(|d| **d < timeout).count() as f64 / durations.len() as f64
            * 100.0
    }
}
