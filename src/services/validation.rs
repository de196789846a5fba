use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use crate::models::{Agendamento, AgendamentoForm};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub campo: &'static str,
    pub mensagem: &'static str,
}

impl FieldError {
    fn new(campo: &'static str, mensagem: &'static str) -> Self {
        Self { campo, mensagem }
    }
}

/// Checks every field rule independently and reports all violations at once,
/// so the form can mark each offending input. `today` is passed in to keep
/// the date rules deterministic under test.
pub fn validate(
    form: &AgendamentoForm,
    today: NaiveDate,
) -> Result<Agendamento, Vec<FieldError>> {
    let mut errors = Vec::new();

    if form.nome_tutor.trim().chars().count() < 2 {
        errors.push(FieldError::new(
            "nomeTutor",
            "Nome deve ter pelo menos 2 caracteres",
        ));
    }
    if form.telefone.trim().chars().count() < 10 {
        errors.push(FieldError::new(
            "telefone",
            "Telefone deve ter pelo menos 10 dígitos",
        ));
    }
    if !EMAIL_RE.is_match(form.email.trim()) {
        errors.push(FieldError::new("email", "Email inválido"));
    }
    if form.nome_pet.trim().is_empty() {
        errors.push(FieldError::new("nomePet", "Nome do pet é obrigatório"));
    }
    if form.especie.trim().is_empty() {
        errors.push(FieldError::new("especie", "Espécie é obrigatória"));
    }
    if form.raca.trim().is_empty() {
        errors.push(FieldError::new("raca", "Raça é obrigatória"));
    }
    if form.peso.trim().is_empty() {
        errors.push(FieldError::new("peso", "Peso é obrigatório"));
    }
    if form.tipo_consulta.trim().is_empty() {
        errors.push(FieldError::new(
            "tipoConsulta",
            "Tipo de consulta é obrigatório",
        ));
    }
    if form.horario_preferido.trim().is_empty() {
        errors.push(FieldError::new(
            "horarioPreferido",
            "Horário é obrigatório",
        ));
    }

    if let Some(nascimento) = form.data_nascimento {
        if nascimento > today {
            errors.push(FieldError::new(
                "dataNascimento",
                "Data de nascimento não pode ser no futuro",
            ));
        }
    }

    match form.data_preferida {
        None => errors.push(FieldError::new(
            "dataPreferida",
            "Data preferida é obrigatória",
        )),
        Some(data) if data < today => errors.push(FieldError::new(
            "dataPreferida",
            "Data preferida não pode ser no passado",
        )),
        Some(_) => {}
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Agendamento {
        nome_tutor: form.nome_tutor.trim().to_string(),
        telefone: form.telefone.trim().to_string(),
        email: form.email.trim().to_string(),
        endereco: optional_text(&form.endereco),
        nome_pet: form.nome_pet.trim().to_string(),
        especie: form.especie.trim().to_string(),
        raca: form.raca.trim().to_string(),
        data_nascimento: form.data_nascimento,
        peso: form.peso.trim().to_string(),
        tipo_consulta: form.tipo_consulta.trim().to_string(),
        // Checked non-None above.
        data_preferida: form.data_preferida.unwrap_or(today),
        horario_preferido: form.horario_preferido.trim().to_string(),
        observacoes: optional_text(&form.observacoes),
    })
}

/// Optional free-text inputs arrive as empty strings when left blank; those
/// count as absent so the composer emits no line for them.
fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
