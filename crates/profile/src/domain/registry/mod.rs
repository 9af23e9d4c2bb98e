mod section_component;
mod section_descriptor;
mod section_registry;

pub use section_component::SectionComponent;
pub use section_descriptor::SectionDescriptor;
pub use section_registry::{resolve_component, resolve_platform, SectionRegistry};

#[cfg(test)]
mod section_registry_test;
