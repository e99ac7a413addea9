use serde::{Deserialize, Serialize};

// 模板中的整数占位符
pub const PARAM_PLACEHOLDER: &str = "{n}";

// 模板未配置参数范围时使用的默认范围
pub const DEFAULT_PARAM_RANGE: (u64, u64) = (1, 100);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointSpec {
    pub template: String,
    #[serde(default = "default_min_param")]
    pub min_param: u64,
    #[serde(default = "default_max_param")]
    pub max_param: u64,
}

fn default_min_param() -> u64 {
    DEFAULT_PARAM_RANGE.0
}

fn default_max_param() -> u64 {
    DEFAULT_PARAM_RANGE.1
}

impl EndpointSpec {
    pub fn new(template: &str, min_param: u64, max_param: u64) -> Self {
        EndpointSpec {
            template: template.to_string(),
            min_param,
            max_param,
        }
    }
}
