use serde::{Deserialize, Serialize};

use crate::config::CONFIG;

/// Parámetros de paginación enviados como query string (?page=&perPage=)
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: u32,
    pub per_page: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: CONFIG.paging.default_page,
            per_page: CONFIG.paging.default_per_page,
        }
    }
}

impl PageQuery {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Pares clave/valor para el query string
    pub fn to_params(self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("perPage", self.per_page.to_string()),
        ]
    }
}
