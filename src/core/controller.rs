use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use anyhow::Context;
use reqwest::Client;

use crate::core::batch;
use crate::core::catalog::EndpointCatalog;
use crate::core::recorder::RunRecorder;
use crate::core::report;
use crate::models::config::RunConfig;

// 驱动整个压测: 逐批执行, 批间延时, 随时响应中断, 最后打汇总
// 批次严格串行, 上一批收集汇总完才开始下一批
pub async fn run(config: RunConfig) -> anyhow::Result<()> {
    run_until(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

// 中断源作为future传入, 测试里可以注入定时器代替真实信号
// 整个循环复用同一个中断future: 两次select之间到达的信号只是暂存在waker里,
// 下一次select照样能收到, 不会丢
pub async fn run_until<F>(config: RunConfig, interrupt: F) -> anyhow::Result<()>
where
    F: Future<Output = ()>,
{
    config.validate()?;
    let catalog = EndpointCatalog::new(config.endpoints.clone())?;
    let client = build_client(config.timeout_secs)?;

    println!("🚀 开始压测 {}", config.base_url);

    let mut interrupt = pin!(interrupt);
    let mut recorder = RunRecorder::new();
    let mut batch_index: u64 = 0;
    let mut interrupted = false;
    loop {
        if let Some(iterations) = config.iterations {
            if batch_index >= iterations {
                break;
            }
        }
        batch_index += 1;
        // 中断直接打断在途批次, 不等它跑完
        tokio::select! {
            _ = &mut interrupt => {
                interrupted = true;
                break;
            }
            result = batch::run_batch(
                &client,
                &catalog,
                &config.base_url,
                config.batch_size,
                config.max_concurrency,
            ) => {
                let batch = result?;
                report::print_batch_report(batch_index, &batch, config.verbose);
                recorder.merge_batch(&batch);
            }
        }
        // 批间延时, 最后一批之后不再等
        let finished = matches!(config.iterations, Some(iterations) if batch_index >= iterations);
        if !finished && config.delay_secs > 0 {
            tokio::select! {
                _ = &mut interrupt => {
                    interrupted = true;
                    break;
                }
                _ = tokio::time::sleep(Duration::from_secs(config.delay_secs)) => {}
            }
        }
    }

    if interrupted {
        // 中断是正常的停止方式, 不算失败
        println!("\n💀 收到中断信号, 停止压测");
    }
    report::print_final_report(&recorder, &config);
    Ok(())
}

fn build_client(timeout_secs: u64) -> anyhow::Result<Client> {
    let info = os_info::get();
    let user_agent = format!(
        "{} {} ({}; {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        info.os_type(),
        info.version()
    );
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(user_agent)
        .build()
        .context("构建带超时的http客户端失败")
}
