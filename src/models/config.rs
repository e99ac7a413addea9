use anyhow::anyhow;

use crate::models::endpoint::EndpointSpec;

// 一次压测的完整配置, 构造后不再修改, 显式传入控制器
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub base_url: String,
    pub endpoints: Vec<EndpointSpec>,
    // 每批请求数
    pub batch_size: usize,
    // 同时在途请求的硬上限
    pub max_concurrency: usize,
    // None表示一直压测直到中断
    pub iterations: Option<u64>,
    pub delay_secs: u64,
    pub timeout_secs: u64,
    // 端点成功率按真实请求结果统计, 默认按耗时是否小于超时估算
    pub strict_success: bool,
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            base_url: "http://localhost:3000".to_string(),
            endpoints: default_endpoints(),
            batch_size: 100,
            max_concurrency: 50,
            iterations: Some(100),
            delay_secs: 1,
            timeout_secs: 10,
            strict_success: false,
            verbose: false,
        }
    }
}

impl RunConfig {
    // 启动时校验, 不允许带着坏配置跑一半
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.endpoints.is_empty() {
            return Err(anyhow!("端点列表不能为空"));
        }
        if self.batch_size == 0 {
            return Err(anyhow!("每批请求数必须大于0"));
        }
        if self.max_concurrency == 0 {
            return Err(anyhow!("并发数必须大于0"));
        }
        Ok(())
    }
}

pub fn default_endpoints() -> Vec<EndpointSpec> {
    vec![
        EndpointSpec::new("/fibonacci/{n}", 10, 500),
        EndpointSpec::new("/prime/{n}", 10, 500),
        EndpointSpec::new("/factorial/{n}", 10, 500),
        EndpointSpec::new("/pi/{n}", 10, 500),
        EndpointSpec::new("/random-bytes/{n}", 10, 500),
        EndpointSpec::new("/sort/{n}", 10, 500),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RunConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let config = RunConfig {
            max_concurrency: 0,
            ..RunConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_endpoints_rejected() {
        let config = RunConfig {
            endpoints: Vec::new(),
            ..RunConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let config = RunConfig {
            batch_size: 0,
            ..RunConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
