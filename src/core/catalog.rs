use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::check_endpoints::check_endpoint_templates;
use crate::models::endpoint::{EndpointSpec, DEFAULT_PARAM_RANGE};

// 端点目录: 不可变配置加采样, 没有副作用
pub struct EndpointCatalog {
    specs: Vec<EndpointSpec>,
    ranges: HashMap<String, (u64, u64)>,
}

impl EndpointCatalog {
    pub fn new(specs: Vec<EndpointSpec>) -> anyhow::Result<Self> {
        check_endpoint_templates(&specs)?;
        let ranges = specs
            .iter()
            .map(|spec| (spec.template.clone(), (spec.min_param, spec.max_param)))
            .collect();
        Ok(EndpointCatalog { specs, ranges })
    }

    // 均匀随机选一个端点, 构造时已保证列表非空
    pub fn sample_endpoint(&self) -> &EndpointSpec {
        self.specs
            .choose(&mut rand::thread_rng())
            .expect("端点列表不能为空")
    }

    // 模板没配置范围时回退到默认范围
    pub fn param_range(&self, template: &str) -> (u64, u64) {
        self.ranges
            .get(template)
            .copied()
            .unwrap_or(DEFAULT_PARAM_RANGE)
    }

    // 闭区间内均匀采样
    pub fn sample_param(&self, template: &str) -> u64 {
        let (min_param, max_param) = self.param_range(template);
        rand::thread_rng().gen_range(min_param..=max_param)
    }

    pub fn specs(&self) -> &[EndpointSpec] {
        &self.specs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(EndpointCatalog::new(Vec::new()).is_err());
    }

    #[test]
    fn test_sample_endpoint_is_configured() {
        let catalog = EndpointCatalog::new(vec![
            EndpointSpec::new("/fibonacci/{n}", 10, 500),
            EndpointSpec::new("/prime/{n}", 10, 500),
        ])
        .unwrap();
        for _ in 0..100 {
            let spec = catalog.sample_endpoint();
            assert!(catalog.specs().iter().any(|s| s.template == spec.template));
        }
    }

    #[test]
    fn test_sample_param_stays_in_range() {
        let catalog =
            EndpointCatalog::new(vec![EndpointSpec::new("/prime/{n}", 1, 200)]).unwrap();
        let mut hit_min = false;
        let mut hit_max = false;
        for _ in 0..10_000 {
            let param = catalog.sample_param("/prime/{n}");
            assert!((1..=200).contains(&param));
            hit_min |= param == 1;
            hit_max |= param == 200;
        }
        // 两端都应该采得到
        assert!(hit_min);
        assert!(hit_max);
    }

    #[test]
    fn test_unknown_template_falls_back_to_default_range() {
        let catalog =
            EndpointCatalog::new(vec![EndpointSpec::new("/prime/{n}", 10, 500)]).unwrap();
        assert_eq!(catalog.param_range("/unknown/{n}"), DEFAULT_PARAM_RANGE);
        for _ in 0..1_000 {
            let param = catalog.sample_param("/unknown/{n}");
            assert!((DEFAULT_PARAM_RANGE.0..=DEFAULT_PARAM_RANGE.1).contains(&param));
        }
    }

    #[test]
    fn test_single_value_range() {
        let catalog =
            EndpointCatalog::new(vec![EndpointSpec::new("/pi/{n}", 7, 7)]).unwrap();
        for _ in 0..100 {
            assert_eq!(catalog.sample_param("/pi/{n}"), 7);
        }
    }
}
