// ============================================================================
// RESOURCE SLICE - Contenedor genérico { data, loading, error }
// ============================================================================
// Cada recurso del backend vive en una instancia de este contenedor. Una
// dispatch recorre siempre el mismo ciclo: pending → fulfill | reject.
// Estado compartido con Rc<RefCell> (un solo hilo de UI).
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::services::error::ApiError;

/// Lectura puntual del slice para renderizar
#[derive(Clone, Debug, PartialEq)]
pub struct SliceSnapshot<T> {
    pub data: T,
    pub loading: bool,
    pub error: String,
}

/// Slice genérico de un recurso asíncrono.
/// `data` arranca en `T::default()` (objeto vacío, nunca ausente),
/// `loading` es true solo entre dispatch y settlement,
/// `error` es cadena vacía mientras no haya fallo.
pub struct ResourceSlice<T> {
    data: Rc<RefCell<T>>,
    loading: Rc<RefCell<bool>>,
    error: Rc<RefCell<String>>,
    subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl<T> Clone for ResourceSlice<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            loading: self.loading.clone(),
            error: self.error.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<T: Clone + Default> ResourceSlice<T> {
    pub fn new() -> Self {
        Self {
            data: Rc::new(RefCell::new(T::default())),
            loading: Rc::new(RefCell::new(false)),
            error: Rc::new(RefCell::new(String::new())),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn data(&self) -> T {
        self.data.borrow().clone()
    }

    pub fn loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn error(&self) -> String {
        self.error.borrow().clone()
    }

    pub fn snapshot(&self) -> SliceSnapshot<T> {
        SliceSnapshot {
            data: self.data(),
            loading: self.loading(),
            error: self.error(),
        }
    }

    /// Request en vuelo: data vuelve al objeto vacío, error se limpia
    pub fn pending(&self) {
        *self.data.borrow_mut() = T::default();
        *self.loading.borrow_mut() = true;
        self.error.borrow_mut().clear();
        self.notify();
    }

    /// Éxito: el body decodificado reemplaza data por completo (sin merge)
    pub fn fulfill(&self, payload: T) {
        *self.data.borrow_mut() = payload;
        *self.loading.borrow_mut() = false;
        self.error.borrow_mut().clear();
        self.notify();
    }

    /// Fallo: data vuelve al objeto vacío y queda el mensaje legible
    pub fn reject(&self, message: impl Into<String>) {
        *self.data.borrow_mut() = T::default();
        *self.loading.borrow_mut() = false;
        *self.error.borrow_mut() = message.into();
        self.notify();
    }

    /// Volver al estado inicial exacto, venga de donde venga. Se usa tras una
    /// mutación exitosa para que un isSuccess viejo no redispare toasts.
    pub fn reset(&self) {
        *self.data.borrow_mut() = T::default();
        *self.loading.borrow_mut() = false;
        self.error.borrow_mut().clear();
        self.notify();
    }

    /// Suscribirse a cambios del slice
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }
}

impl<T: Clone + Default> Default for ResourceSlice<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// La dispatch: exactamente una llamada HTTP por invocación, sin retry y sin
/// cancelación. Si dos dispatches al mismo slice corren a la vez, gana la que
/// SETTLEA más tarde, no la que se despachó más tarde (last-settled-wins,
/// igual que el comportamiento observado del dashboard original).
pub async fn run<T, Fut>(slice: &ResourceSlice<T>, request: Fut)
where
    T: Clone + Default,
    Fut: Future<Output = Result<T, ApiError>>,
{
    slice.pending();
    match request.await {
        Ok(payload) => slice.fulfill(payload),
        Err(e) => slice.reject(e.user_message()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::DEFAULT_ERROR_MESSAGE;
    use futures::executor::block_on;

    #[derive(Clone, Default, Debug, PartialEq)]
    struct Counter {
        value: u32,
    }

    #[test]
    fn starts_at_the_declared_empty_default() {
        let slice: ResourceSlice<Counter> = ResourceSlice::new();
        let snap = slice.snapshot();
        assert_eq!(snap.data, Counter::default());
        assert!(!snap.loading);
        assert_eq!(snap.error, "");
    }

    #[test]
    fn pending_sets_loading_and_clears_everything_else() {
        let slice: ResourceSlice<Counter> = ResourceSlice::new();
        slice.fulfill(Counter { value: 9 });
        slice.reject("boom");

        slice.pending();
        let snap = slice.snapshot();
        assert!(snap.loading);
        assert_eq!(snap.data, Counter::default());
        assert_eq!(snap.error, "");
    }

    #[test]
    fn fulfill_stores_the_exact_payload() {
        let slice: ResourceSlice<Counter> = ResourceSlice::new();
        slice.pending();
        slice.fulfill(Counter { value: 42 });

        let snap = slice.snapshot();
        assert_eq!(snap.data, Counter { value: 42 });
        assert!(!snap.loading);
        assert_eq!(snap.error, "");
    }

    #[test]
    fn reject_resets_data_and_keeps_the_message() {
        let slice: ResourceSlice<Counter> = ResourceSlice::new();
        slice.pending();
        slice.fulfill(Counter { value: 7 });
        slice.reject("X");

        let snap = slice.snapshot();
        assert_eq!(snap.data, Counter::default());
        assert!(!snap.loading);
        assert_eq!(snap.error, "X");
    }

    #[test]
    fn reset_returns_to_the_exact_initial_state() {
        let slice: ResourceSlice<Counter> = ResourceSlice::new();
        slice.fulfill(Counter { value: 3 });
        slice.reset();
        assert_eq!(slice.snapshot(), ResourceSlice::<Counter>::new().snapshot());

        slice.reject("broken");
        slice.reset();
        assert_eq!(slice.snapshot(), ResourceSlice::<Counter>::new().snapshot());
    }

    #[test]
    fn run_maps_ok_to_fulfill() {
        let slice: ResourceSlice<Counter> = ResourceSlice::new();
        block_on(run(&slice, async { Ok(Counter { value: 5 }) }));

        let snap = slice.snapshot();
        assert_eq!(snap.data, Counter { value: 5 });
        assert!(!snap.loading);
        assert_eq!(snap.error, "");
    }

    #[test]
    fn run_surfaces_the_server_message_on_http_failure() {
        let slice: ResourceSlice<Counter> = ResourceSlice::new();
        block_on(run(&slice, async {
            Err(ApiError::Http {
                status: 403,
                message: Some("X".to_string()),
            })
        }));
        assert_eq!(slice.error(), "X");
        assert_eq!(slice.data(), Counter::default());
        assert!(!slice.loading());
    }

    #[test]
    fn run_uses_the_fixed_message_on_network_failure() {
        let slice: ResourceSlice<Counter> = ResourceSlice::new();
        block_on(run(&slice, async {
            Err(ApiError::Network("offline".to_string()))
        }));
        assert_eq!(slice.error(), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn later_settlement_overwrites_earlier_one() {
        // last-settled-wins: la segunda dispatch settlea después y se queda
        let slice: ResourceSlice<Counter> = ResourceSlice::new();
        block_on(run(&slice, async { Ok(Counter { value: 1 }) }));
        block_on(run(&slice, async { Ok(Counter { value: 2 }) }));
        assert_eq!(slice.data(), Counter { value: 2 });
    }

    #[test]
    fn subscribers_fire_on_every_transition() {
        use std::cell::Cell;
        use std::rc::Rc;

        let slice: ResourceSlice<Counter> = ResourceSlice::new();
        let fired = Rc::new(Cell::new(0u32));
        let counter = fired.clone();
        slice.subscribe(move || counter.set(counter.get() + 1));

        slice.pending();
        slice.fulfill(Counter { value: 1 });
        slice.reset();
        assert_eq!(fired.get(), 3);
    }
}
