use handlebars::Handlebars;
use shared::error::{LiveTvError, LiveTvErrorKind};

pub const TEMPLATE_INDEX: &str = "index";
pub const TEMPLATE_PLAYER: &str = "player";
pub const TEMPLATE_MESSAGE: &str = "message";

const PARTIALS: &[(&str, &str)] = &[
    ("layout", include_str!("../../../resources/templates/layout.hbs")),
];

const TEMPLATES: &[(&str, &str)] = &[
    (TEMPLATE_INDEX, include_str!("../../../resources/templates/index.hbs")),
    (TEMPLATE_PLAYER, include_str!("../../../resources/templates/player.hbs")),
    (TEMPLATE_MESSAGE, include_str!("../../../resources/templates/message.hbs")),
];

fn template_error(name: &str, err: &dyn std::error::Error) -> LiveTvError {
    LiveTvError::new(LiveTvErrorKind::Info, format!("Invalid template {name}: {err}"))
}

/// All page templates, compiled once at startup.
pub fn create_template_registry() -> Result<Handlebars<'static>, LiveTvError> {
    let mut registry = Handlebars::new();
    for (name, content) in PARTIALS {
        registry.register_partial(name, *content).map_err(|err| template_error(name, &err))?;
    }
    for (name, content) in TEMPLATES {
        registry.register_template_string(name, *content).map_err(|err| template_error(name, &err))?;
    }
    Ok(registry)
}
