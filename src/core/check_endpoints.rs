use std::collections::HashSet;

use anyhow::anyhow;

use crate::models::endpoint::{EndpointSpec, PARAM_PLACEHOLDER};

// 启动时校验端点模板: 非空、带占位符、范围合法、无重复
pub(crate) fn check_endpoint_templates(specs: &[EndpointSpec]) -> anyhow::Result<()> {
    if specs.is_empty() {
        return Err(anyhow!("端点列表不能为空"));
    }
    let mut templates_set = HashSet::new();
    for spec in specs {
        if spec.template.is_empty() {
            return Err(anyhow!("端点模板不能为空"));
        }
        if !spec.template.contains(PARAM_PLACEHOLDER) {
            return Err(anyhow!(
                "端点模板缺少{}占位符: {}",
                PARAM_PLACEHOLDER,
                spec.template
            ));
        }
        if spec.min_param > spec.max_param {
            return Err(anyhow!(
                "参数范围非法: {} [{}, {}]",
                spec.template,
                spec.min_param,
                spec.max_param
            ));
        }
        if !templates_set.insert(spec.template.clone()) {
            return Err(anyhow!("重复的端点模板: {}", spec.template));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_rejected() {
        assert!(check_endpoint_templates(&[]).is_err());
    }

    #[test]
    fn test_duplicate_template_rejected() {
        let specs = vec![
            EndpointSpec::new("/prime/{n}", 1, 10),
            EndpointSpec::new("/prime/{n}", 1, 10),
        ];
        assert!(check_endpoint_templates(&specs).is_err());
    }

    #[test]
    fn test_missing_placeholder_rejected() {
        let specs = vec![EndpointSpec::new("/prime", 1, 10)];
        assert!(check_endpoint_templates(&specs).is_err());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let specs = vec![EndpointSpec::new("/prime/{n}", 10, 1)];
        assert!(check_endpoint_templates(&specs).is_err());
    }

    #[test]
    fn test_valid_specs_accepted() {
        let specs = vec![
            EndpointSpec::new("/prime/{n}", 1, 10),
            EndpointSpec::new("/sort/{n}", 10, 500),
        ];
        assert!(check_endpoint_templates(&specs).is_ok());
    }
}
