use crate::api::model::create_template_registry;
use crate::model::AppConfig;
use handlebars::Handlebars;
use shared::error::LiveTvError;
use shared::model::ChannelCatalog;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub app_config: Arc<AppConfig>,
    pub templates: Arc<Handlebars<'static>>,
}

impl AppState {
    pub fn new(app_config: Arc<AppConfig>) -> Result<Self, LiveTvError> {
        Ok(Self {
            app_config,
            templates: Arc::new(create_template_registry()?),
        })
    }

    pub fn catalog(&self) -> &ChannelCatalog {
        &self.app_config.catalog
    }
}
