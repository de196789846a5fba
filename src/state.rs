use crate::config::AppConfig;
use crate::models::Catalog;

pub struct AppState {
    pub config: AppConfig,
    pub catalog: Catalog,
}
