use axum::response::Html;

static INDEX_HTML: &str = include_str!("../web/index.html");
static AGENDAMENTO_HTML: &str = include_str!("../web/agendamento.html");

pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn agendamento_page() -> Html<&'static str> {
    Html(AGENDAMENTO_HTML)
}
