//! Renderer slots for the header.
//!
//! Every slot in [`Components`] is optional; an empty slot resolves to the
//! built-in renderer at the call site.

mod gutter;
mod header;
mod resource_header;

pub use gutter::{EmptyGutterHeader, TimeGutterHeaderComponent};
pub use header::{DefaultHeader, HeaderComponent, HeaderProps};
pub use resource_header::{DefaultResourceHeader, ResourceHeaderComponent, ResourceHeaderProps};

/// Optional renderer overrides.
#[derive(Default)]
pub struct Components {
    pub header: Option<Box<dyn HeaderComponent>>,
    pub resource_header: Option<Box<dyn ResourceHeaderComponent>>,
    pub time_gutter_header: Option<Box<dyn TimeGutterHeaderComponent>>,
}

impl Components {
    pub fn with_header(mut self, header: impl HeaderComponent + 'static) -> Self {
        self.header = Some(Box::new(header));
        self
    }

    pub fn with_resource_header(mut self, header: impl ResourceHeaderComponent + 'static) -> Self {
        self.resource_header = Some(Box::new(header));
        self
    }

    pub fn with_time_gutter_header(
        mut self,
        header: impl TimeGutterHeaderComponent + 'static,
    ) -> Self {
        self.time_gutter_header = Some(Box::new(header));
        self
    }

    pub fn header(&self) -> &dyn HeaderComponent {
        self.header.as_deref().unwrap_or(&DefaultHeader)
    }

    pub fn resource_header(&self) -> &dyn ResourceHeaderComponent {
        self.resource_header
            .as_deref()
            .unwrap_or(&DefaultResourceHeader)
    }

    pub fn time_gutter_header(&self) -> &dyn TimeGutterHeaderComponent {
        self.time_gutter_header
            .as_deref()
            .unwrap_or(&EmptyGutterHeader)
    }
}
