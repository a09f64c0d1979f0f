use crate::error::{PagesError, PagesErrorExt};
use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderError,
    RenderErrorReason,
};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Nodes,
    Members,
    Contact,
}

impl Page {
    pub const ALL: [Self; 4] = [Self::Home, Self::Nodes, Self::Members, Self::Contact];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "index",
            Self::Nodes => "nodes",
            Self::Members => "members",
            Self::Contact => "contact",
        }
    }

    const fn source(self) -> &'static str {
        match self {
            Self::Home => include_str!("../templates/index.hbs"),
            Self::Nodes => include_str!("../templates/nodes.hbs"),
            Self::Members => include_str!("../templates/members.hbs"),
            Self::Contact => include_str!("../templates/contact.hbs"),
        }
    }
}

const PARTIALS: [(&str, &str); 3] = [
    ("head", include_str!("../templates/partials/head.hbs")),
    ("nav", include_str!("../templates/partials/nav.hbs")),
    ("foot", include_str!("../templates/partials/foot.hbs")),
];

/// Shared handlebars registry with every page and partial pre-compiled.
#[derive(Clone)]
pub struct Renderer {
    registry: Arc<Handlebars<'static>>,
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer").field("templates", &self.registry.get_templates().len()).finish()
    }
}

impl Renderer {
    /// Compiles the bundled templates.
    ///
    /// # Errors
    /// Returns [`PagesError::Template`] if a template does not parse.
    pub fn new() -> Result<Self, PagesError> {
        let mut registry = Handlebars::new();
        registry.register_helper("json", Box::new(json_helper));

        for (name, source) in PARTIALS {
            registry.register_partial(name, source).context(format!("Partial '{name}'"))?;
        }
        for page in Page::ALL {
            registry
                .register_template_string(page.name(), page.source())
                .context(format!("Template '{}'", page.name()))?;
        }

        Ok(Self { registry: Arc::new(registry) })
    }

    /// Renders `page` with `view` as its context.
    ///
    /// # Errors
    /// Returns [`PagesError::Render`] if the context cannot be rendered.
    pub fn render<T: Serialize>(&self, page: Page, view: &T) -> Result<String, PagesError> {
        self.registry.render(page.name(), view).context(format!("Rendering '{}'", page.name()))
    }
}

/// `{{{json value}}}`: JSON safe to embed inside a `<script>` element.
fn json_helper(
    h: &Helper<'_>,
    _: &Handlebars<'_>,
    _: &Context,
    _: &mut RenderContext<'_, '_>,
    out: &mut dyn Output,
) -> HelperResult {
    if let Some(param) = h.param(0) {
        let json = serde_json::to_string(param.value())
            .map_err(|err| RenderError::from(RenderErrorReason::SerdeError(err)))?;
        out.write(&escape_script(&json))?;
    }
    Ok(())
}

fn escape_script(json: &str) -> String {
    json.replace('<', "\\u003c").replace('>', "\\u003e").replace('&', "\\u0026")
}
