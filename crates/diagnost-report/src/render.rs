use std::borrow::Cow;

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ReportError;

pub const AUGMENTED_TEMPLATE: &str = include_str!("../templates/augmented.txt");
pub const FALLBACK_TEMPLATE: &str = include_str!("../templates/fallback.txt");

/// The two report layouts, as Tera (Jinja2-syntax) source.
#[derive(Debug, Clone)]
pub struct ReportTemplates {
    pub augmented: Cow<'static, str>,
    pub fallback: Cow<'static, str>,
}

impl Default for ReportTemplates {
    fn default() -> Self {
        Self {
            augmented: Cow::Borrowed(AUGMENTED_TEMPLATE),
            fallback: Cow::Borrowed(FALLBACK_TEMPLATE),
        }
    }
}

/// Render a Tera template against any serializable context.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &T,
) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context =
        Context::from_value(value).map_err(|e| ReportError::Render(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
