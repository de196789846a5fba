pub mod appointment;
pub mod catalog;

pub use appointment::{Agendamento, AgendamentoForm};
pub use catalog::{Catalog, ConsultationType};
