use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// 目标地址
    #[arg(short, long, default_value = "http://localhost:3000")]
    pub url: String,

    /// 每批请求数
    #[arg(short, long, default_value_t = 100)]
    pub batch_size: usize,

    /// 最大并发数
    #[arg(short, long, default_value_t = 50)]
    pub concurrency: usize,

    /// 压测轮数, 0表示一直压测直到中断
    #[arg(short, long, default_value_t = 100)]
    pub iterations: u64,

    /// 批间延时（秒）
    #[arg(short, long, default_value_t = 1)]
    pub delay_secs: u64,

    /// 超时时间（秒）
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// 端点配置文件(json数组, 元素为{template, min_param, max_param})
    #[arg(short, long)]
    pub endpoints: Option<String>,

    /// 端点成功率按真实请求结果统计, 而不是按耗时估算
    #[arg(long, default_value_t = false)]
    pub strict_success: bool,

    /// 打印每个请求的结果
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
