use clap::Parser;

use api_stress_engine::core::controller;
use api_stress_engine::models::args::Args;
use api_stress_engine::models::config::{default_endpoints, RunConfig};
use api_stress_engine::models::endpoint::EndpointSpec;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let endpoints = match args.endpoints {
        Some(path) => {
            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("读取端点配置文件失败: {}", e);
                    std::process::exit(1);
                }
            };
            match serde_json::from_str::<Vec<EndpointSpec>>(&content) {
                Ok(endpoints) => endpoints,
                Err(e) => {
                    eprintln!("解析端点配置文件失败: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => default_endpoints(),
    };
    let config = RunConfig {
        base_url: args.url,
        endpoints,
        batch_size: args.batch_size,
        max_concurrency: args.concurrency,
        // 0表示一直压测直到中断
        iterations: if args.iterations == 0 {
            None
        } else {
            Some(args.iterations)
        },
        delay_secs: args.delay_secs,
        timeout_secs: args.timeout,
        strict_success: args.strict_success,
        verbose: args.verbose,
    };
    if let Err(e) = controller::run(config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
