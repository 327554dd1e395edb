/// One carousel entry. Read-only once handed to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    image: String, // URI or path understood by the renderer
    title: String,
    description: String,
}

impl Slide {
    pub fn new(
        image: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
