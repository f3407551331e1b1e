// ============================================================================
// RESOURCE SLICES - Un juego de slices CRUD por recurso del backend
// ============================================================================
// La fábrica genérica que el dashboard original copió ~40 veces: cada
// recurso (ruta, reserva, hotel, ...) instancia este struct una vez con su
// path y obtiene los cinco slices con sus dispatches.
// ============================================================================

use serde::{de::DeserializeOwned, Serialize};

use crate::models::{DetailResponse, ListResponse, MutationResponse, PageQuery};
use crate::services::api_client::ApiClient;
use crate::state::slice::{run, ResourceSlice};

pub struct ResourceSlices<T> {
    path: &'static str,
    pub list: ResourceSlice<ListResponse<T>>,
    pub detail: ResourceSlice<DetailResponse<T>>,
    pub create: ResourceSlice<MutationResponse>,
    pub update: ResourceSlice<MutationResponse>,
    pub remove: ResourceSlice<MutationResponse>,
}

impl<T> Clone for ResourceSlices<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path,
            list: self.list.clone(),
            detail: self.detail.clone(),
            create: self.create.clone(),
            update: self.update.clone(),
            remove: self.remove.clone(),
        }
    }
}

impl<T> ResourceSlices<T>
where
    T: Clone + DeserializeOwned,
{
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            list: ResourceSlice::new(),
            detail: ResourceSlice::new(),
            create: ResourceSlice::new(),
            update: ResourceSlice::new(),
            remove: ResourceSlice::new(),
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Listar una página del recurso
    pub async fn fetch_all(&self, api: &ApiClient, query: PageQuery) {
        self.fetch_all_with(api, query, Vec::new()).await;
    }

    /// Listar con filtros adicionales además de la paginación
    pub async fn fetch_all_with(
        &self,
        api: &ApiClient,
        query: PageQuery,
        filters: Vec<(&'static str, String)>,
    ) {
        let mut params = query.to_params();
        params.extend(filters);
        run(&self.list, api.get(self.path, &params)).await;
    }

    /// Obtener una entidad por id
    pub async fn fetch_one(&self, api: &ApiClient, id: &str) {
        let path = format!("{}/{}", self.path, id);
        run(&self.detail, api.get(&path, &[])).await;
    }

    /// Crear una entidad nueva
    pub async fn create_one<B: Serialize>(&self, api: &ApiClient, body: &B) {
        run(&self.create, api.post(self.path, body)).await;
    }

    /// Actualizar una entidad existente
    pub async fn update_one<B: Serialize>(&self, api: &ApiClient, id: &str, body: &B) {
        let path = format!("{}/{}", self.path, id);
        run(&self.update, api.put(&path, body)).await;
    }

    /// Eliminar por id
    pub async fn delete_one(&self, api: &ApiClient, id: &str) {
        let path = format!("{}/{}", self.path, id);
        run(&self.remove, api.delete(&path)).await;
    }

    /// Limpiar los slices de mutación tras consumir su resultado, para que un
    /// isSuccess viejo no dispare efectos repetidos en la próxima visita
    pub fn reset_mutations(&self) {
        self.create.reset();
        self.update.reset();
        self.remove.reset();
    }

    /// Volver todo el recurso a su estado inicial (teardown)
    pub fn reset_all(&self) {
        self.list.reset();
        self.detail.reset();
        self.reset_mutations();
    }
}
