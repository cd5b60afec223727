//! Query parameters for the paginated listings.
//!
//! Values arrive as raw strings and are parsed leniently: anything that does
//! not parse is treated as absent, so `?page=abc` falls back to page 1.

use std::str::FromStr;

use prefab_core::pagination::Page;
use prefab_core::types::DbId;
use prefab_db::models::prefabricada::PrefabricadaFilter;
use serde::Deserialize;

/// `?page=&limit=`
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> Page {
        Page::resolve(lenient(&self.page), lenient(&self.limit))
    }
}

/// `?page=&limit=&categoria_id=&tipo_id=&destacada=&oferta=`
#[derive(Debug, Default, Deserialize)]
pub struct PrefabricadaParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub categoria_id: Option<String>,
    pub tipo_id: Option<String>,
    pub destacada: Option<String>,
    pub oferta: Option<String>,
}

impl PrefabricadaParams {
    pub fn page(&self) -> Page {
        Page::resolve(lenient(&self.page), lenient(&self.limit))
    }

    pub fn filter(&self) -> PrefabricadaFilter {
        PrefabricadaFilter {
            categoria_id: lenient::<DbId>(&self.categoria_id),
            tipo_id: lenient::<DbId>(&self.tipo_id),
            destacada: self.destacada.as_deref().and_then(parse_flag),
            oferta: self.oferta.as_deref().and_then(parse_flag),
        }
    }
}

fn lenient<T: FromStr>(raw: &Option<String>) -> Option<T> {
    raw.as_deref().and_then(|v| v.trim().parse().ok())
}

/// `true`/`false` as well as `1`/`0`.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use prefab_core::pagination::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};

    use super::*;

    #[test]
    fn garbage_falls_back_to_defaults() {
        let params = PageParams {
            page: Some("abc".into()),
            limit: Some("-4".into()),
        };
        let page = params.page();
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn limit_is_capped() {
        let params = PageParams {
            page: Some("3".into()),
            limit: Some("5000".into()),
        };
        assert_eq!(params.page().limit, MAX_PAGE_LIMIT);
    }

    #[test]
    fn filter_parses_flags_and_ids() {
        let params = PrefabricadaParams {
            categoria_id: Some("7".into()),
            tipo_id: Some("x".into()),
            destacada: Some("true".into()),
            oferta: Some("0".into()),
            ..Default::default()
        };
        let filter = params.filter();
        assert_eq!(filter.categoria_id, Some(7));
        assert_eq!(filter.tipo_id, None);
        assert_eq!(filter.destacada, Some(true));
        assert_eq!(filter.oferta, Some(false));
    }
}
