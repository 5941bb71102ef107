use crate::field::{catalog, seed_for, Field, Section};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    pub transaction_fields: Vec<Field>,
    pub seller_fields: Vec<Field>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            transaction_fields: vec![seed_for(Section::Transaction)],
            seller_fields: vec![seed_for(Section::Seller)],
        }
    }
}

impl FormState {
    pub fn fields(&self, section: Section) -> &[Field] {
        match section {
            Section::Transaction => &self.transaction_fields,
            Section::Seller => &self.seller_fields,
        }
    }

    fn fields_mut(&mut self, section: Section) -> &mut Vec<Field> {
        match section {
            Section::Transaction => &mut self.transaction_fields,
            Section::Seller => &mut self.seller_fields,
        }
    }

    /// Whether `name` is assigned to any section.
    pub fn is_assigned(&self, name: &str) -> bool {
        Section::ALL
            .iter()
            .any(|&section| self.fields(section).iter().any(|f| f.name == name))
    }
}

/// Whether a zone bound to `zone` takes `field`.
pub fn accepts(zone: Section, field: &Field) -> bool {
    field.section == zone
}

#[derive(Debug, Clone)]
pub enum FormAction {
    AddToSection(Section, Field),
    RemoveFromSection(Section, String), // section, field name
    DropField(Section, Field),          // target zone, payload
}

pub struct FormStateManager {
    state: FormState,
    catalog: Vec<Field>,
}

impl FormStateManager {
    pub fn new() -> Self {
        Self::with_catalog(catalog())
    }

    pub fn with_catalog(catalog: Vec<Field>) -> Self {
        Self {
            state: FormState::default(),
            catalog,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    #[cfg(test)]
    pub fn catalog(&self) -> &[Field] {
        &self.catalog
    }

    // Apply an action to the state and return the new state
    pub fn dispatch(&mut self, action: FormAction) -> &FormState {
        match action {
            FormAction::AddToSection(section, field) => {
                self.add_to_section(section, field);
            }
            FormAction::RemoveFromSection(section, name) => {
                self.remove_from_section(section, &name);
            }
            FormAction::DropField(zone, field) => {
                if accepts(zone, &field) {
                    self.dispatch(FormAction::AddToSection(zone, field));
                } else {
                    tracing::debug!(
                        field = %field.name,
                        zone = zone.title(),
                        "drop rejected: section mismatch"
                    );
                }
            }
        }
        &self.state
    }

    fn add_to_section(&mut self, section: Section, field: Field) {
        // A name lives in at most one section, so a hit anywhere is a no-op.
        if self.state.is_assigned(&field.name) {
            tracing::debug!(field = %field.name, "already assigned, ignoring add");
            return;
        }
        tracing::info!(field = %field.name, section = section.title(), "field added");
        self.state.fields_mut(section).push(field);
    }

    fn remove_from_section(&mut self, section: Section, name: &str) {
        let fields = self.state.fields_mut(section);
        let before = fields.len();
        fields.retain(|f| f.default || f.name != name);
        if fields.len() < before {
            tracing::info!(field = name, section = section.title(), "field removed");
        } else {
            tracing::debug!(field = name, "nothing removable by that name");
        }
    }

    /// Catalog entries of `section` that are not assigned anywhere, in catalog order.
    pub fn available(&self, section: Section) -> Vec<&Field> {
        self.catalog
            .iter()
            .filter(|f| f.section == section && !self.state.is_assigned(&f.name))
            .collect()
    }

    /// Total number of catalog entries still offered across both sections.
    pub fn available_count(&self) -> usize {
        Section::ALL.iter().map(|&s| self.available(s).len()).sum()
    }
}

impl Default for FormStateManager {
    fn default() -> Self {
        Self::new()
    }
}
