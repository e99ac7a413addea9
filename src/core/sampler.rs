use crate::core::catalog::EndpointCatalog;
use crate::models::endpoint::PARAM_PLACEHOLDER;
use crate::models::result::RequestDescriptor;

// 把占位符替换成具体参数
pub fn resolve_template(template: &str, param: u64) -> String {
    template.replace(PARAM_PLACEHOLDER, &param.to_string())
}

// 按模板从拼好的路径反解出参数, 解不出来返回None
pub fn extract_param(template: &str, resolved: &str) -> Option<u64> {
    let placeholder_at = template.find(PARAM_PLACEHOLDER)?;
    let prefix = &template[..placeholder_at];
    let suffix = &template[placeholder_at + PARAM_PLACEHOLDER.len()..];
    let digits = resolved.strip_prefix(prefix)?.strip_suffix(suffix)?;
    digits.parse().ok()
}

// 随机采样端点和参数, 组装出一个具体请求
pub fn build_request(catalog: &EndpointCatalog, base_url: &str) -> RequestDescriptor {
    let spec = catalog.sample_endpoint();
    let param = catalog.sample_param(&spec.template);
    let url = format!("{}{}", base_url, resolve_template(&spec.template, param));
    RequestDescriptor {
        template: spec.template.clone(),
        url,
        param,
    }
}
