use std::time::{Duration, Instant};

use anyhow::anyhow;
use futures::future::join_all;
use reqwest::Client;

use crate::core::catalog::EndpointCatalog;
use crate::core::sampler;
use crate::models::result::{BatchResult, RequestDescriptor, RequestOutcome, RequestStatus};

// 两波并发之间的固定停顿, 在并发上限之外进一步压住节奏
pub const CHUNK_PAUSE: Duration = Duration::from_millis(500);

// 跑一个批次: batch_size个请求按max_concurrency分波并发
// 每个发出去的请求恰好产出一条结果, 收集顺序不保证与发起顺序一致
pub async fn run_batch(
    client: &Client,
    catalog: &EndpointCatalog,
    base_url: &str,
    batch_size: usize,
    max_concurrency: usize,
) -> anyhow::Result<BatchResult> {
    if max_concurrency == 0 {
        return Err(anyhow!("并发数必须大于0"));
    }
    let batch_start = Instant::now();
    let mut outcomes = Vec::with_capacity(batch_size);
    let mut remaining = batch_size;
    while remaining > 0 {
        let chunk_size = remaining.min(max_concurrency);
        let mut handles = Vec::with_capacity(chunk_size);
        for _ in 0..chunk_size {
            let descriptor = sampler::build_request(catalog, base_url);
            let client = client.clone();
            handles.push(tokio::spawn(async move {
                execute_request(&client, descriptor).await
            }));
        }
        // 等这一波全部落地再发下一波
        for joined in join_all(handles).await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => return Err(anyhow!("协程被取消或意外停止:{:?}", e)),
            }
        }
        remaining -= chunk_size;
        if remaining > 0 {
            tokio::time::sleep(CHUNK_PAUSE).await;
        }
    }
    Ok(BatchResult {
        outcomes,
        batch_elapsed_secs: batch_start.elapsed().as_secs_f64(),
    })
}

// 执行单个请求, 不碰任何共享状态
// 任何传输层失败都收敛成一条失败结果, 不影响同批其他请求
pub async fn execute_request(client: &Client, descriptor: RequestDescriptor) -> RequestOutcome {
    let start = Instant::now();
    match client.get(&descriptor.url).send().await {
        Ok(response) => {
            let code = response.status().as_u16();
            RequestOutcome {
                url: descriptor.url,
                template: descriptor.template,
                status: RequestStatus::Code(code),
                elapsed_secs: start.elapsed().as_secs_f64(),
                success: code == 200,
            }
        }
        Err(e) => RequestOutcome {
            url: descriptor.url,
            template: descriptor.template,
            status: RequestStatus::Error(e.to_string()),
            elapsed_secs: start.elapsed().as_secs_f64(),
            success: false,
        },
    }
}
