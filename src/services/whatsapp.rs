/// Pre-filled greeting behind the home page's "Agende uma Consulta" button.
pub const GREETING: &str = "Olá! Gostaria de agendar uma consulta para meu pet.";

/// Builds the wa.me deep link the browser opens in a new tab. Delivery is
/// fire-and-forget; nothing here can tell whether the message was sent.
pub fn booking_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{number}?text={}", urlencoding::encode(message))
}

pub fn greeting_link(number: &str) -> String {
    booking_link(number, GREETING)
}
