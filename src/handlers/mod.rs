pub mod agendamento;
pub mod health;
pub mod pages;
