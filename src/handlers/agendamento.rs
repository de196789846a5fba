use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::appointment::{ESPECIES, HORARIOS};
use crate::models::{AgendamentoForm, ConsultationType};
use crate::services::{message, validation, weight, whatsapp};
use crate::state::AppState;

// GET /api/agendamento/opcoes
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpcoesResponse {
    pub especies: Vec<&'static str>,
    pub horarios: Vec<&'static str>,
    pub tipos_consulta: Vec<ConsultationType>,
}

pub async fn get_opcoes(State(state): State<Arc<AppState>>) -> Json<OpcoesResponse> {
    Json(OpcoesResponse {
        especies: ESPECIES.to_vec(),
        horarios: HORARIOS.to_vec(),
        tipos_consulta: state.catalog.types().to_vec(),
    })
}

// GET /api/contato/whatsapp
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContatoResponse {
    pub whatsapp_url: String,
}

pub async fn get_contato(State(state): State<Arc<AppState>>) -> Json<ContatoResponse> {
    Json(ContatoResponse {
        whatsapp_url: whatsapp::greeting_link(&state.config.whatsapp_number),
    })
}

// POST /api/agendamentos
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendamentoResponse {
    pub mensagem: String,
    pub whatsapp_url: String,
}

/// Validates the submitted form, composes the WhatsApp message and returns
/// the deep link. Nothing is stored; the browser opens the link and the
/// conversation continues on WhatsApp.
pub async fn create_agendamento(
    State(state): State<Arc<AppState>>,
    Json(form): Json<AgendamentoForm>,
) -> Result<Json<AgendamentoResponse>, AppError> {
    let today = chrono::Local::now().date_naive();

    let agendamento = validation::validate(&form, today).map_err(AppError::Validation)?;
    let peso_gramas = weight::to_grams(&agendamento.peso)?;

    let mensagem = message::compose(&agendamento, peso_gramas, &state.catalog);
    let whatsapp_url = whatsapp::booking_link(&state.config.whatsapp_number, &mensagem);

    tracing::info!(
        pet = %agendamento.nome_pet,
        tipo = %agendamento.tipo_consulta,
        data = %agendamento.data_preferida,
        "appointment request composed"
    );

    Ok(Json(AgendamentoResponse {
        mensagem,
        whatsapp_url,
    }))
}
