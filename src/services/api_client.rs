// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP con el bearer token
// de la sesión actual. Exactamente una request por llamada: sin retry,
// sin deduplicación, sin cache entre parámetros distintos.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::models::ErrorBody;
use crate::services::error::ApiError;
use crate::state::session_state::SessionState;

/// Cliente API - SOLO comunicación HTTP (stateless salvo el handle de sesión
/// del que lee el token)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionState,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionState) -> Self {
        Self {
            base_url: base_url.into(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET con query params
    pub async fn get<Res>(&self, path: &str, params: &[(&str, String)]) -> Result<Res, ApiError>
    where
        Res: DeserializeOwned,
    {
        let request = self
            .build_get(path, params)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    /// Construir el GET con los params percent-encodeados por el browser.
    /// Un valor de filtro con '&', '=' o espacios queda como UN solo
    /// parámetro, nunca inyecta otros.
    fn build_get(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Request, gloo_net::Error> {
        let url = format!("{}{}", self.base_url, path);
        self.authorize(Request::get(&url).query(params.iter().map(|(k, v)| (*k, v.as_str()))))
            .build()
    }

    /// POST con body JSON
    pub async fn post<Req, Res>(&self, path: &str, body: &Req) -> Result<Res, ApiError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let request = self
            .authorize(Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Network(format!("serialization: {}", e)))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    /// PUT con body JSON
    pub async fn put<Req, Res>(&self, path: &str, body: &Req) -> Result<Res, ApiError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let request = self
            .authorize(Request::put(&url))
            .json(body)
            .map_err(|e| ApiError::Network(format!("serialization: {}", e)))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    /// DELETE por id
    pub async fn delete<Res>(&self, path: &str) -> Result<Res, ApiError>
    where
        Res: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let request = self.authorize(Request::delete(&url));
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    /// Adjuntar Authorization: Bearer <token> si hay sesión activa
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Mapear la respuesta a los dos desenlaces del slice: body decodificado
    /// o ApiError con el mensaje del servidor si lo hubo
    async fn decode<Res>(response: Response) -> Result<Res, ApiError>
    where
        Res: DeserializeOwned,
    {
        let status = response.status();
        if !response.ok() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(ErrorBody::into_message);
            log::warn!("⚠️ HTTP {} en {}: {:?}", status, response.url(), message);
            return Err(ApiError::Http { status, message });
        }
        response
            .json::<Res>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session_state::SessionState;
    use wasm_bindgen_test::wasm_bindgen_test;

    // El encoding lo hace URLSearchParams, así que va como test wasm
    #[wasm_bindgen_test]
    fn filter_text_with_reserved_chars_stays_one_single_param() {
        let api = ApiClient::new("http://x", SessionState::new());
        let request = api
            .build_get("/booking", &[("search", "foo&page=999".to_string())])
            .unwrap();

        let url = request.url();
        assert!(url.contains("search=foo%26page%3D999"), "url: {}", url);
        assert!(!url.contains("&page="), "url: {}", url);
    }

    #[wasm_bindgen_test]
    fn spaces_in_filters_do_not_break_the_url() {
        let api = ApiClient::new("http://x", SessionState::new());
        let request = api
            .build_get("/hotel", &[("city", "la paz".to_string())])
            .unwrap();

        let url = request.url();
        assert!(!url.contains(' '), "url: {}", url);
    }
}
