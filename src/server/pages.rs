use liquid::{ParserBuilder, Template};

/// The embedded review form page
static TEMPLATE: &str = include_str!("../../templates/index.html.liquid");

/// Parsed page templates
pub struct Pages {
    /// The review form, with an optional prediction block
    template: Template,
}

impl Pages {
    /// Parse the embedded page template
    pub fn new() -> anyhow::Result<Self> {
        let template = ParserBuilder::with_stdlib()
            .build()?
            .parse(TEMPLATE)
            .map_err(|e| anyhow!("Unable to parse page template: {}", e))?;

        Ok(Self { template })
    }

    /// Render the bare input form
    pub fn index(&self) -> Result<String, liquid::Error> {
        self.render("", "")
    }

    /// Render the form with the predicted class filled in
    pub fn prediction(&self, class: usize, label: &str) -> Result<String, liquid::Error> {
        self.render(&class.to_string(), label)
    }

    fn render(&self, output: &str, label: &str) -> Result<String, liquid::Error> {
        let globals = liquid::object!({
            "output": output,
            "label": label,
        });

        self.template.render(&globals)
    }
}
