use chrono::NaiveDate;

use crate::models::{Agendamento, Catalog};

fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Renders the appointment request into the WhatsApp message the clinic
/// reads. Absent optional fields contribute no line at all, and unknown
/// consultation ids fall back to the raw id so a stale catalog never blocks
/// a request. Pure: same input, same output.
pub fn compose(agendamento: &Agendamento, peso_gramas: i64, catalog: &Catalog) -> String {
    let tipo = catalog.lookup(&agendamento.tipo_consulta);

    let mut lines: Vec<String> = Vec::new();

    lines.push("*AGENDAMENTO - VETLIFE 24H*".to_string());
    lines.push(String::new());

    lines.push("*DADOS DO TUTOR:*".to_string());
    lines.push(format!("Nome: {}", agendamento.nome_tutor));
    lines.push(format!("Telefone: {}", agendamento.telefone));
    lines.push(format!("Email: {}", agendamento.email));
    if let Some(endereco) = &agendamento.endereco {
        lines.push(format!("Endereço: {endereco}"));
    }
    lines.push(String::new());

    lines.push("*DADOS DO PET:*".to_string());
    lines.push(format!("Nome: {}", agendamento.nome_pet));
    lines.push(format!("Espécie: {}", agendamento.especie));
    lines.push(format!("Raça: {}", agendamento.raca));
    if let Some(nascimento) = agendamento.data_nascimento {
        lines.push(format!("Data de Nascimento: {}", format_date(nascimento)));
    }
    lines.push(format!("Peso: {} ({peso_gramas}g)", agendamento.peso));
    lines.push(String::new());

    lines.push("*CONSULTA:*".to_string());
    lines.push(format!(
        "Tipo: {}",
        tipo.map(|t| t.name.as_str())
            .unwrap_or(agendamento.tipo_consulta.as_str())
    ));
    if let Some(minutos) = tipo.and_then(|t| t.duration_minutes) {
        lines.push(format!("Duração: {minutos} minutos"));
    }
    if let Some(cents) = tipo.and_then(|t| t.price_cents) {
        lines.push(format!("Preço: R$ {:.2}", cents as f64 / 100.0));
    }
    lines.push(format!("Data: {}", format_date(agendamento.data_preferida)));
    lines.push(format!("Horário: {}", agendamento.horario_preferido));

    if let Some(observacoes) = &agendamento.observacoes {
        lines.push(String::new());
        lines.push("*OBSERVAÇÕES:*".to_string());
        lines.push(observacoes.clone());
    }

    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agendamento() -> Agendamento {
        Agendamento {
            nome_tutor: "Ana Silva".to_string(),
            telefone: "37999998888".to_string(),
            email: "ana@example.com".to_string(),
            endereco: None,
            nome_pet: "Rex".to_string(),
            especie: "Cão".to_string(),
            raca: "Labrador".to_string(),
            data_nascimento: None,
            peso: "15kg".to_string(),
            tipo_consulta: "1".to_string(),
            data_preferida: NaiveDate::from_ymd_opt(2025, 6, 17).unwrap(),
            horario_preferido: "09:00".to_string(),
            observacoes: None,
        }
    }

    #[test]
    fn test_full_message_structure() {
        let msg = compose(&agendamento(), 15000, &Catalog::default());
        assert!(msg.starts_with("*AGENDAMENTO - VETLIFE 24H*"));
        assert!(msg.contains("*DADOS DO TUTOR:*"));
        assert!(msg.contains("Nome: Ana Silva"));
        assert!(msg.contains("Telefone: 37999998888"));
        assert!(msg.contains("Email: ana@example.com"));
        assert!(msg.contains("*DADOS DO PET:*"));
        assert!(msg.contains("Espécie: Cão"));
        assert!(msg.contains("Raça: Labrador"));
        assert!(msg.contains("Peso: 15kg (15000g)"));
        assert!(msg.contains("*CONSULTA:*"));
        assert!(msg.contains("Tipo: Consulta Geral"));
        assert!(msg.contains("Duração: 30 minutos"));
        assert!(msg.contains("Preço: R$ 80.00"));
        assert!(msg.contains("Data: 17/06/2025"));
        assert!(msg.contains("Horário: 09:00"));
    }

    #[test]
    fn test_absent_optionals_contribute_no_lines() {
        let msg = compose(&agendamento(), 15000, &Catalog::default());
        assert!(!msg.contains("Endereço:"));
        assert!(!msg.contains("Data de Nascimento:"));
        assert!(!msg.contains("*OBSERVAÇÕES:*"));
        assert!(msg.ends_with("Horário: 09:00"));
    }

    #[test]
    fn test_present_optionals_render() {
        let mut ag = agendamento();
        ag.endereco = Some("Rua das Flores, 123".to_string());
        ag.data_nascimento = Some(NaiveDate::from_ymd_opt(2020, 1, 5).unwrap());
        ag.observacoes = Some("Coceira constante há três dias".to_string());
        let msg = compose(&ag, 15000, &Catalog::default());
        assert!(msg.contains("Endereço: Rua das Flores, 123"));
        assert!(msg.contains("Data de Nascimento: 05/01/2020"));
        assert!(msg.contains("*OBSERVAÇÕES:*\nCoceira constante há três dias"));
        assert!(msg.ends_with("Coceira constante há três dias"));
    }

    #[test]
    fn test_unknown_type_echoes_raw_id() {
        let mut ag = agendamento();
        ag.tipo_consulta = "banho-e-tosa".to_string();
        let msg = compose(&ag, 15000, &Catalog::default());
        assert!(msg.contains("Tipo: banho-e-tosa"));
        assert!(!msg.contains("Duração:"));
        assert!(!msg.contains("Preço:"));
    }

    #[test]
    fn test_price_two_decimals() {
        let mut ag = agendamento();
        ag.tipo_consulta = "3".to_string();
        let msg = compose(&ag, 15000, &Catalog::default());
        assert!(msg.contains("Tipo: Cirurgia Simples"));
        assert!(msg.contains("Duração: 120 minutos"));
        assert!(msg.contains("Preço: R$ 250.00"));
    }

    #[test]
    fn test_compose_is_pure() {
        let catalog = Catalog::default();
        let ag = agendamento();
        assert_eq!(compose(&ag, 15000, &catalog), compose(&ag, 15000, &catalog));
    }

    #[test]
    fn test_message_is_trimmed() {
        let msg = compose(&agendamento(), 15000, &Catalog::default());
        assert_eq!(msg, msg.trim());
    }
}
