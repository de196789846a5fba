use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ConsultationType {
    pub id: String,
    pub name: String,
    pub duration_minutes: Option<i32>,
    pub price_cents: Option<i64>,
}

impl ConsultationType {
    fn new(id: &str, name: &str, duration_minutes: i32, price_cents: i64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            duration_minutes: Some(duration_minutes),
            price_cents: Some(price_cents),
        }
    }
}

/// Read-only consultation-type catalog. Hard-coded until the catalog moves to
/// persistent storage; the composer copes with ids that are missing here.
#[derive(Debug, Clone)]
pub struct Catalog {
    types: Vec<ConsultationType>,
}

impl Catalog {
    pub fn lookup(&self, id: &str) -> Option<&ConsultationType> {
        self.types.iter().find(|t| t.id == id)
    }

    pub fn types(&self) -> &[ConsultationType] {
        &self.types
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            types: vec![
                ConsultationType::new("1", "Consulta Geral", 30, 8000),
                ConsultationType::new("2", "Vacinação", 30, 6000),
                ConsultationType::new("3", "Cirurgia Simples", 120, 25000),
                ConsultationType::new("4", "Emergência", 60, 15000),
                ConsultationType::new("5", "Retorno", 20, 4000),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_id() {
        let catalog = Catalog::default();
        let t = catalog.lookup("1").unwrap();
        assert_eq!(t.name, "Consulta Geral");
        assert_eq!(t.duration_minutes, Some(30));
        assert_eq!(t.price_cents, Some(8000));
    }

    #[test]
    fn test_lookup_unknown_id() {
        let catalog = Catalog::default();
        assert!(catalog.lookup("99").is_none());
    }
}
