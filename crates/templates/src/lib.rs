mod filters;
pub mod pages;

use errors::error::generic_error;
use libs::anyhow::Error;
use libs::tera::{Context, Tera};

pub use pages::{
    HomePage, MessagePage, Page, PostPage, PresetHelpPage, ProfilePage, SimulationPage,
};

const TEMPLATES: [(&str, &str); 7] = [
    ("base.html", include_str!("../templates/base.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("message.html", include_str!("../templates/message.html")),
    ("post.html", include_str!("../templates/post.html")),
    ("preset_help.html", include_str!("../templates/preset_help.html")),
    ("profile.html", include_str!("../templates/profile.html")),
    ("simulation.html", include_str!("../templates/simulation.html")),
];

/// Renders the embedded page templates.
///
/// Every template ends in `.html`, so Tera escapes all interpolated values
/// unless a template explicitly opts out with `| safe`. None of them do.
pub struct Hera {
    tera: Tera,
}

impl Hera {
    pub fn new() -> Result<Hera, Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        tera.register_filter("initials", filters::Initials);
        if tera.get_template_names().count() != TEMPLATES.len() {
            return Err(generic_error("Error: not every page template was registered"));
        }

        Ok(Hera { tera })
    }

    pub fn render<P: Page>(&self, page: &P) -> Result<String, Error> {
        let context = Context::from_serialize(page)?;
        Ok(self.tera.render(P::TEMPLATE, &context)?)
    }
}

impl std::fmt::Debug for Hera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hera")
            .field("templates", &self.tera.get_template_names().count())
            .finish()
    }
}
