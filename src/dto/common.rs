//! DTOs compartidos entre recursos

use serde::{Deserialize, Serialize};

/// Respuesta simple con mensaje
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Metadatos de paginación de los listados
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_count: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        Self {
            current_page: page,
            total_pages: (total + limit - 1) / limit,
            total_count: total,
            has_next: page * limit < total,
            has_prev: page > 1,
        }
    }
}

/// Normalizar los query params page/limit con los defaults del listado
pub fn normalize_page_params(page: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(10).max(1);
    (page, limit)
}

/// Conteo por estado para los endpoints de estadísticas
#[derive(Debug, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_page_of_fifteen_records() {
        // 15 registros, página 2, límite 10: quedan 5
        let meta = PaginationMeta::new(2, 10, 15);
        assert_eq!(meta.current_page, 2);
        assert_eq!(meta.total_pages, 2);
        assert_eq!(meta.total_count, 15);
        assert!(!meta.has_next);
        assert!(meta.has_prev);
    }

    #[test]
    fn first_page_has_next_but_no_prev() {
        let meta = PaginationMeta::new(1, 10, 15);
        assert!(meta.has_next);
        assert!(!meta.has_prev);
    }

    #[test]
    fn empty_listing_has_zero_pages() {
        let meta = PaginationMeta::new(1, 10, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
        assert!(!meta.has_prev);
    }

    #[test]
    fn page_params_default_and_clamp() {
        assert_eq!(normalize_page_params(None, None), (1, 10));
        assert_eq!(normalize_page_params(Some(0), Some(-3)), (1, 1));
        assert_eq!(normalize_page_params(Some(3), Some(25)), (3, 25));
    }
}
