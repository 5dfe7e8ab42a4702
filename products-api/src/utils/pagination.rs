use utoipa::IntoParams;

use crate::config::ProductsConfig;
use crate::utils::numeric::parse_int_prefix;

/// 原始分页参数，保留字符串形式以便对无效值回退到默认值，而不是直接拒绝请求。
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// 单页条数，缺省或小于 1 时使用默认值 10
    #[param(value_type = Option<i64>, example = 10)]
    pub limit: Option<String>,
    /// 跳过的条数，缺省或为负数时使用 0
    #[param(value_type = Option<i64>, example = 0)]
    pub skip: Option<String>,
}

/// 解析后的分页请求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub skip: u64,
}

impl PaginationParams {
    /// 从原始查询键值对中取参数；同一个键出现多次时只取第一个值。
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "limit" => &mut params.limit,
                "skip" => &mut params.skip,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    pub fn resolve(&self, settings: &ProductsConfig) -> PageRequest {
        let max_limit = settings.max_limit.max(1);

        let limit = self
            .limit
            .as_deref()
            .and_then(parse_int_prefix)
            .filter(|v| *v > 0)
            .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
            .unwrap_or(settings.default_limit)
            .min(max_limit);

        let skip = self
            .skip
            .as_deref()
            .and_then(parse_int_prefix)
            .and_then(|v| u64::try_from(v).ok())
            .unwrap_or(0);

        PageRequest { limit, skip }
    }
}

#[derive(Debug)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub limit: u32,
    pub skip: u64,
}
