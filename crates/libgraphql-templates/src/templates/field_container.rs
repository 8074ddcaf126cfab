use crate::DuplicatePath;
use crate::TemplateError;
use crate::templates::DuplicateCollector;
use crate::templates::FieldTemplate;
use crate::types::DependentType;

type Result<T> = std::result::Result<T, TemplateError>;

/// The ordered fields of a graph type (or actions of a controller).
#[derive(Clone, Debug, Default)]
pub struct FieldContainer {
    fields: Vec<FieldTemplate>,
}
impl FieldContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every schema path claimed by more than one field, in first-seen
    /// order.
    pub fn duplicate_paths(&self) -> Vec<DuplicatePath> {
        let mut paths = DuplicateCollector::new();
        for field in &self.fields {
            paths.add(field.route().path(), field.internal_name());
        }
        paths.into_duplicates()
            .into_iter()
            .map(|(path, members)| DuplicatePath {
                path: path.to_string(),
                members,
            })
            .collect()
    }

    /// Looks up a field by its schema-facing name.
    pub fn get(&self, name: &str) -> Option<&FieldTemplate> {
        self.fields.iter().find(|field| field.name() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldTemplate> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub(crate) fn parse_all(&mut self) {
        for field in self.fields.iter_mut() {
            field.parse();
        }
    }

    pub(crate) fn push(&mut self, field: FieldTemplate) {
        self.fields.push(field);
    }

    pub(crate) fn required_types(&self) -> impl Iterator<Item = DependentType> + '_ {
        self.fields.iter().flat_map(|field| field.required_types())
    }

    pub(crate) fn validate_children(&self) -> Result<()> {
        for field in &self.fields {
            field.validate_or_throw(true)?;
        }
        Ok(())
    }

    /// Fails when any two fields share a schema path, reporting every
    /// shared path at once.
    pub(crate) fn validate_unique_paths(&self, owner_name: &str) -> Result<()> {
        let duplicates = self.duplicate_paths();
        if duplicates.is_empty() {
            return Ok(());
        }
        Err(TemplateError::DuplicateFieldPaths {
            internal_name: owner_name.to_string(),
            duplicates,
        })
    }
}
