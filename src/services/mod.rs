pub mod message;
pub mod validation;
pub mod weight;
pub mod whatsapp;
