use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Species offered by the booking form. The field itself stays free text so
/// "Outro" can be replaced by anything the tutor types.
pub const ESPECIES: [&str; 6] = ["Cão", "Gato", "Ave", "Roedor", "Réptil", "Outro"];

/// Half-hour consultation slots: mornings 08:00–11:30, afternoons 14:00–17:30.
pub const HORARIOS: [&str; 16] = [
    "08:00", "08:30", "09:00", "09:30", "10:00", "10:30", "11:00", "11:30",
    "14:00", "14:30", "15:00", "15:30", "16:00", "16:30", "17:00", "17:30",
];

/// Raw appointment-request form as posted by the booking page. Lives only for
/// the duration of one submission; nothing is persisted.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendamentoForm {
    #[serde(default)]
    pub nome_tutor: String,
    #[serde(default)]
    pub telefone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub endereco: Option<String>,
    #[serde(default)]
    pub nome_pet: String,
    #[serde(default)]
    pub especie: String,
    #[serde(default)]
    pub raca: String,
    #[serde(default)]
    pub data_nascimento: Option<NaiveDate>,
    #[serde(default)]
    pub peso: String,
    #[serde(default)]
    pub tipo_consulta: String,
    #[serde(default)]
    pub data_preferida: Option<NaiveDate>,
    #[serde(default)]
    pub horario_preferido: String,
    #[serde(default)]
    pub observacoes: Option<String>,
}

/// A form that passed field validation. Only this type reaches the message
/// composer, so a composed message can never carry an invalid field.
#[derive(Debug, Clone, PartialEq)]
pub struct Agendamento {
    pub nome_tutor: String,
    pub telefone: String,
    pub email: String,
    pub endereco: Option<String>,
    pub nome_pet: String,
    pub especie: String,
    pub raca: String,
    pub data_nascimento: Option<NaiveDate>,
    pub peso: String,
    pub tipo_consulta: String,
    pub data_preferida: NaiveDate,
    pub horario_preferido: String,
    pub observacoes: Option<String>,
}
