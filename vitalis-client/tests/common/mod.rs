//! In-process mock of the Vitalis backend

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, Query, Request, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::{Value, json};
use vitalis_client::{ClientConfig, MemoryCredentialStore, VitalisClient};

pub const PATIENT_EMAIL: &str = "joao@email.com";
pub const PASSWORD: &str = "123456";

/// Unsigned credential carrying `sub` and `role`
pub fn token(sub: &str, role: &str) -> String {
    let payload = json!({ "sub": sub, "role": role, "exp": 4102444800u64 }).to_string();
    format!(
        "eyJhbGciOiJIUzI1NiJ9.{}.c2lnbmF0dXJl",
        URL_SAFE_NO_PAD.encode(payload)
    )
}

/// Method, path and query string of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
}

#[derive(Default)]
pub struct MockState {
    /// Every routed request, in arrival order
    calls: Mutex<Vec<Call>>,
    /// Authorization header of every request, in arrival order
    seen: Mutex<Vec<(String, Option<String>)>>,
    /// Answer the next protected call with 401
    reject_next: AtomicBool,
    /// Hand out this token on login instead of a valid one
    login_token: Mutex<Option<String>>,
}

impl MockState {
    fn record(&self, route: &str, headers: &HeaderMap) {
        let auth = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.seen.lock().push((route.to_string(), auth));
    }

    fn take_rejection(&self) -> bool {
        self.reject_next.swap(false, Ordering::SeqCst)
    }
}

pub struct MockBackend {
    pub addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/clinicas", get(clinics))
            .route("/api/clinicas/{id}", get(clinic))
            .route("/api/clinicas/{id}/procedimentos", get(procedures))
            .route("/api/agendamentos", post(book))
            .route("/api/agendamentos/paciente", get(my_appointments))
            .route("/api/agendamentos/{id}/status", patch(update_status))
            .route("/api/agendamentos/{id}/cancelar", post(cancel))
            .route("/api/agendamentos/{id}/prontuario", post(record_attendance))
            .route("/api/avaliacoes", post(rate))
            .route("/api/admin/seed", post(seed))
            .route("/api/requisicoes", get(list_requests).post(create_request))
            .route(
                "/api/requisicoes/{id}",
                get(get_request).put(update_request).delete(delete_request),
            )
            .route("/api/requisicoes/{id}/status", patch(update_request_status))
            .route("/api/requisicoes/status/{status}", get(requests_by_status))
            .route("/api/requisicoes/prioridade/{prioridade}", get(requests_by_priority))
            .route("/api/lento", get(slow_unauthorized))
            .layer(middleware::from_fn_with_state(state.clone(), record_call))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Client over an in-memory store, already initialized
    pub fn client(&self) -> VitalisClient {
        self.client_with(ClientConfig::new(self.base_url()).with_timeout(5))
    }

    pub fn client_with(&self, config: ClientConfig) -> VitalisClient {
        let client =
            VitalisClient::with_store(config, Arc::new(MemoryCredentialStore::new())).unwrap();
        client.initialize();
        client
    }

    pub fn reject_next(&self) {
        self.state.reject_next.store(true, Ordering::SeqCst);
    }

    pub fn issue_on_login(&self, token: impl Into<String>) {
        *self.state.login_token.lock() = Some(token.into());
    }

    /// Authorization header seen on the last request to `route`
    pub fn last_auth(&self, route: &str) -> Option<Option<String>> {
        self.state
            .seen
            .lock()
            .iter()
            .rev()
            .find(|(r, _)| r == route)
            .map(|(_, auth)| auth.clone())
    }

    /// Last routed request
    pub fn last_call(&self) -> Option<Call> {
        self.state.calls.lock().last().cloned()
    }

    pub fn request_count(&self, route: &str) -> usize {
        self.state
            .seen
            .lock()
            .iter()
            .filter(|(r, _)| r == route)
            .count()
    }
}

async fn record_call(State(state): State<Arc<MockState>>, request: Request, next: Next) -> Response {
    let uri = request.uri();
    state.calls.lock().push(Call {
        method: request.method().to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
    });
    next.run(request).await
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Unauthorized", "message": "Token inválido" })),
    )
        .into_response()
}

async fn login(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.record("login", &headers);
    if let Some(token) = state.login_token.lock().clone() {
        return Json(json!({ "token": token })).into_response();
    }
    let token = match (&body["email"], &body["senha"], &body["username"]) {
        (Value::String(email), Value::String(senha), _) if senha == PASSWORD => {
            let role = if email.contains("clinica") {
                "ROLE_CLINICA"
            } else {
                "ROLE_PACIENTE"
            };
            token(email, role)
        }
        (_, _, Value::String(user)) if body["password"] == "admin123" => token(user, "ROLE_ADMIN"),
        _ => return unauthorized(),
    };
    Json(json!({ "token": token })).into_response()
}

fn clinic_json(id: i64, especialidade: &str) -> Value {
    json!({
        "id": id,
        "nomeFantasia": format!("Clínica {id}"),
        "razaoSocial": format!("Clínica {id} LTDA"),
        "especialidade": especialidade,
        "endereco": "Rua das Flores, 100",
        "avaliacao": 4.5,
        "ativo": true
    })
}

#[derive(Deserialize)]
struct ClinicQuery {
    especialidade: Option<String>,
}

async fn clinics(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Query(query): Query<ClinicQuery>,
) -> Json<Value> {
    state.record("clinicas", &headers);
    let all = [(1, "Cardiologia"), (2, "Dermatologia"), (3, "Cardiologia")];
    let list: Vec<Value> = all
        .iter()
        .filter(|(_, e)| query.especialidade.as_deref().is_none_or(|q| q == *e))
        .map(|(id, e)| clinic_json(*id, e))
        .collect();
    Json(Value::Array(list))
}

fn not_found(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
}

async fn clinic(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    state.record("clinica", &headers);
    if id == 1 {
        Json(clinic_json(1, "Cardiologia")).into_response()
    } else {
        not_found("Clínica não encontrada")
    }
}

fn procedure_json(id: i64, preco: f64) -> Value {
    json!({
        "id": id,
        "nome": format!("Procedimento {id}"),
        "preco": preco,
        "duracaoEstimadaMinutos": 30,
        "disponivel": true,
        "clinicaId": 1
    })
}

async fn procedures(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    state.record("procedimentos", &headers);
    if id != 1 {
        return not_found("Clínica não encontrada");
    }
    Json(json!([procedure_json(10, 150.0), procedure_json(11, 80.5)])).into_response()
}

fn appointment_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "pacienteNome": "João Silva",
        "clinicaNomeFantasia": "Clínica 1",
        "procedimentos": [procedure_json(10, 150.0)],
        "dataHora": "20/12/2030 14:30",
        "valorTotal": 150.0,
        "status": status
    })
}

async fn book(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.record("agendar", &headers);
    if state.take_rejection() {
        return unauthorized();
    }
    if body["dataHora"] != "2030-12-20T14:30" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "errors": [{ "field": "dataHora", "defaultMessage": "Formato inválido" }] })),
        )
            .into_response();
    }
    (StatusCode::CREATED, Json(appointment_json(7, "PENDENTE"))).into_response()
}

async fn my_appointments(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    state.record("meus", &headers);
    if state.take_rejection() || !headers.contains_key(AUTHORIZATION) {
        return unauthorized();
    }
    Json(json!([appointment_json(7, "CONFIRMADO")])).into_response()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusQuery {
    novo_status: String,
}

async fn update_status(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Query(query): Query<StatusQuery>,
) -> Json<Value> {
    state.record("status", &headers);
    Json(appointment_json(id, &query.novo_status))
}

async fn cancel(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    state.record("cancelar", &headers);
    if id != 7 {
        return not_found("Agendamento não encontrado");
    }
    "Agendamento cancelado com sucesso".into_response()
}

async fn record_attendance(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    state.record("prontuario", &headers);
    if id == 8 {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "message": "Prontuário já registrado" })),
        )
            .into_response();
    }
    (
        StatusCode::CREATED,
        Json(json!({
            "id": 3,
            "descricaoSintomas": body["descricaoSintomas"],
            "diagnostico": body["diagnostico"],
            "prescricaoMedica": body["prescricaoMedica"],
            "dataRegistro": "2030-12-20T15:10:00"
        })),
    )
        .into_response()
}

async fn rate(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.record("avaliar", &headers);
    if body["agendamentoId"] == 999 {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "message": "Este agendamento já foi avaliado" })),
        )
            .into_response();
    }
    (StatusCode::CREATED, Json(json!({ "id": 1, "nota": body["nota"] }))).into_response()
}

async fn seed(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    state.record("seed", &headers);
    if state.take_rejection() {
        return unauthorized();
    }
    "Banco de dados populado com sucesso".into_response()
}

fn ticket_json(id: i64, status: &str, prioridade: &str) -> Value {
    json!({
        "id": id,
        "titulo": "Atualizar cadastro",
        "descricao": "Revisar dados da clínica",
        "status": status,
        "prioridade": prioridade,
        "solicitante": "admin",
        "dataCriacao": "2025-02-01T10:00:00"
    })
}

async fn list_requests(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Json<Value> {
    state.record("requisicoes", &headers);
    Json(json!([
        ticket_json(1, "PENDENTE", "ALTA"),
        ticket_json(2, "CONCLUIDA", "BAIXA")
    ]))
}

async fn create_request(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Response {
    state.record("requisicoes", &headers);
    body["id"] = json!(5);
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn get_request(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    state.record("requisicao", &headers);
    if id != 1 {
        return not_found("Requisição não encontrada");
    }
    Json(ticket_json(1, "PENDENTE", "ALTA")).into_response()
}

async fn update_request(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(mut body): Json<Value>,
) -> Json<Value> {
    state.record("requisicao", &headers);
    body["id"] = json!(id);
    Json(body)
}

async fn delete_request(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    state.record("requisicao", &headers);
    if id != 1 {
        return not_found("Requisição não encontrada");
    }
    StatusCode::NO_CONTENT.into_response()
}

#[derive(Deserialize)]
struct TicketStatusQuery {
    status: String,
}

async fn update_request_status(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Query(query): Query<TicketStatusQuery>,
) -> Json<Value> {
    state.record("requisicao", &headers);
    Json(ticket_json(id, &query.status, "ALTA"))
}

async fn requests_by_status(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(status): Path<String>,
) -> Json<Value> {
    state.record("requisicoes", &headers);
    Json(json!([ticket_json(1, &status, "ALTA")]))
}

async fn requests_by_priority(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(prioridade): Path<String>,
) -> Json<Value> {
    state.record("requisicoes", &headers);
    Json(json!([
        ticket_json(3, "PENDENTE", &prioridade),
        ticket_json(4, "EM_ANDAMENTO", &prioridade)
    ]))
}

/// Answers 401 after a delay, leaving time to swap the session
async fn slow_unauthorized(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    state.record("lento", &headers);
    tokio::time::sleep(Duration::from_millis(300)).await;
    unauthorized()
}
