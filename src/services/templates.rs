use crate::config::loader::Config;
use crate::error::AppError;
use axum::response::Html;
use minijinja::{path_loader, Environment};
use serde::Serialize;
use std::path::PathBuf;

/// Template environment bound to the configured templates directory.
/// Templates are loaded on first use and cached by the environment.
pub fn environment(config: &Config) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_loader(path_loader(PathBuf::from(&config.templates_dir)));
    env.add_global("app_name", config.app.name.clone());
    env.add_global("app_version", config.app.version.clone());
    env.add_filter("price", price);
    env
}

pub fn render<S: Serialize>(
    env: &Environment<'_>,
    name: &str,
    ctx: S,
) -> Result<Html<String>, AppError> {
    let template = env.get_template(name)?;
    Ok(Html(template.render(ctx)?))
}

/// Formats an amount in cents, e.g. `4999` as `49.99`.
fn price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}
