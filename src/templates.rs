use std::io::Write;

use tera::{Context, Tera};

use crate::error::TemplateError;

pub const LAYOUT: &str = "layout.html";

/// Read-only rendering service, loaded once at startup and shared by all workers.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn load(glob: &str) -> Result<Self, TemplateError> {
        Ok(Self {
            tera: Tera::new(glob)?,
        })
    }

    pub fn from_tera(tera: Tera) -> Self {
        Self { tera }
    }

    /// Streams the layout into `out`. On failure `out` keeps what was written so far.
    pub fn render_page<W: Write>(&self, page: &str, out: W) -> Result<(), TemplateError> {
        let mut context = Context::new();
        context.insert("Page", page);
        self.tera.render_to(LAYOUT, &context, out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_name_reaches_the_layout() {
        let mut tera = Tera::default();
        tera.add_raw_template(LAYOUT, "<title>{{ Page }}</title>")
            .unwrap();
        let templates = Templates::from_tera(tera);

        let mut out = Vec::new();
        templates.render_page("Register", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "<title>Register</title>");
    }

    #[test]
    fn missing_layout_is_an_error() {
        let templates = Templates::from_tera(Tera::default());
        assert!(templates.render_page("Register", Vec::new()).is_err());
    }
}
