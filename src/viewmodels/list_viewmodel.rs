// ============================================================================
// LIST VIEWMODEL - Estado de una pantalla de listado
// ============================================================================
// Lee el snapshot del slice de listado y deriva qué renderizar: skeleton
// mientras carga, error inline si falló, tabla si hay datos. El filtro y la
// paginación son client-side sobre la página YA devuelta por el servidor
// (comportamiento observado del dashboard original, conservado a propósito).
// ============================================================================

use crate::models::ListResponse;
use crate::state::slice::SliceSnapshot;

/// Qué debe renderizar la pantalla de listado
#[derive(Clone, Debug, PartialEq)]
pub enum ListDisplay<T> {
    Skeleton,
    Error(String),
    Table { rows: Vec<T>, total_pages: u32 },
}

pub struct ListViewModel {
    pub filter: String,
    pub page: u32,
    pub per_page: u32,
}

impl ListViewModel {
    pub fn new(per_page: u32) -> Self {
        Self {
            filter: String::new(),
            page: 1,
            per_page: per_page.max(1),
        }
    }

    /// Cambiar el filtro vuelve a la primera página
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Filtrar y re-paginar la página recibida del servidor
    pub fn window<T: Clone>(&self, rows: &[T], matches: impl Fn(&T) -> bool) -> Vec<T> {
        let start = ((self.page - 1) * self.per_page) as usize;
        rows.iter()
            .filter(|row| matches(row))
            .skip(start)
            .take(self.per_page as usize)
            .cloned()
            .collect()
    }

    /// Como `window`, ordenando el resultado antes de paginar
    pub fn window_sorted<T: Clone>(
        &self,
        rows: &[T],
        matches: impl Fn(&T) -> bool,
        compare: impl Fn(&T, &T) -> std::cmp::Ordering,
    ) -> Vec<T> {
        let mut filtered: Vec<T> = rows.iter().filter(|row| matches(row)).cloned().collect();
        filtered.sort_by(compare);
        let start = ((self.page - 1) * self.per_page) as usize;
        filtered
            .into_iter()
            .skip(start)
            .take(self.per_page as usize)
            .collect()
    }

    /// Derivar el estado visual desde el snapshot del slice
    pub fn display<T: Clone>(
        &self,
        snapshot: &SliceSnapshot<ListResponse<T>>,
        matches: impl Fn(&T) -> bool,
    ) -> ListDisplay<T> {
        if snapshot.loading {
            return ListDisplay::Skeleton;
        }
        if !snapshot.error.is_empty() {
            return ListDisplay::Error(snapshot.error.clone());
        }
        let filtered: Vec<T> = snapshot
            .data
            .data
            .iter()
            .filter(|row| matches(row))
            .cloned()
            .collect();
        let total_pages = (filtered.len() as u32).div_ceil(self.per_page).max(1);
        let start = ((self.page - 1) * self.per_page) as usize;
        let rows = filtered
            .into_iter()
            .skip(start)
            .take(self.per_page as usize)
            .collect();
        ListDisplay::Table { rows, total_pages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_of(rows: Vec<&str>) -> SliceSnapshot<ListResponse<String>> {
        SliceSnapshot {
            data: ListResponse {
                is_success: true,
                data: rows.into_iter().map(String::from).collect(),
                total: None,
            },
            loading: false,
            error: String::new(),
        }
    }

    #[test]
    fn loading_snapshot_renders_the_skeleton() {
        let vm = ListViewModel::new(10);
        let mut snap = snapshot_of(vec!["a"]);
        snap.loading = true;
        assert_eq!(vm.display(&snap, |_| true), ListDisplay::Skeleton);
    }

    #[test]
    fn error_snapshot_renders_the_inline_message() {
        let vm = ListViewModel::new(10);
        let mut snap = snapshot_of(vec![]);
        snap.error = "X".to_string();
        assert_eq!(vm.display(&snap, |_| true), ListDisplay::Error("X".to_string()));
    }

    #[test]
    fn window_repaginates_the_fetched_page() {
        let mut vm = ListViewModel::new(2);
        let rows: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();

        assert_eq!(vm.window(&rows, |_| true), vec!["a", "b"]);
        vm.set_page(3);
        assert_eq!(vm.window(&rows, |_| true), vec!["e"]);
    }

    #[test]
    fn filter_applies_before_paging_and_resets_the_page() {
        let mut vm = ListViewModel::new(2);
        vm.set_page(3);
        vm.set_filter("b");
        assert_eq!(vm.page, 1);

        // "bus", "bar" y "cab" pasan el filtro; caben 2 por página
        let snap = snapshot_of(vec!["bus", "bar", "taxi", "cab"]);
        let display = vm.display(&snap, |row| row.contains(&vm.filter));
        assert_eq!(
            display,
            ListDisplay::Table {
                rows: vec!["bus".to_string(), "bar".to_string()],
                total_pages: 2,
            }
        );
    }

    #[test]
    fn window_sorted_orders_before_paging() {
        let vm = ListViewModel::new(2);
        let rows: Vec<String> = ["delta", "alpha", "charlie"].iter().map(|s| s.to_string()).collect();
        let page = vm.window_sorted(&rows, |_| true, |a, b| a.cmp(b));
        assert_eq!(page, vec!["alpha", "charlie"]);
    }

    #[test]
    fn total_pages_is_at_least_one_even_when_empty() {
        let vm = ListViewModel::new(10);
        let snap = snapshot_of(vec![]);
        match vm.display(&snap, |_| true) {
            ListDisplay::Table { rows, total_pages } => {
                assert!(rows.is_empty());
                assert_eq!(total_pages, 1);
            }
            other => panic!("expected table, got {:?}", other),
        }
    }
}
