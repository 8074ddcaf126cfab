use crate::DuplicateLifeCycle;
use crate::TemplateError;
use crate::templates::DirectiveLifeCycle;
use crate::templates::DirectiveLifeCyclePhase;
use crate::templates::DirectiveMethodTemplate;
use crate::types::DependentType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, TemplateError>;

/// The lifecycle methods of a directive, at most one per lifecycle.
///
/// Registering a second method for a lifecycle does not fail immediately;
/// every such conflict is recorded and reported together by
/// [`DirectiveMethodContainer::validate_or_throw`].
#[derive(Clone, Debug)]
pub struct DirectiveMethodContainer {
    directive_name: String,
    duplicates: IndexMap<DirectiveLifeCycle, Vec<String>>,
    methods: IndexMap<DirectiveLifeCycle, DirectiveMethodTemplate>,
}
impl DirectiveMethodContainer {
    pub fn new(directive_name: impl Into<String>) -> Self {
        Self {
            directive_name: directive_name.into(),
            duplicates: IndexMap::new(),
            methods: IndexMap::new(),
        }
    }

    /// Conflicting registrations recorded so far.
    pub fn duplicates(&self) -> Vec<DuplicateLifeCycle> {
        self.duplicates.iter()
            .map(|(life_cycle, methods)| DuplicateLifeCycle {
                life_cycle: *life_cycle,
                methods: methods.to_owned(),
            })
            .collect()
    }

    pub fn get(&self, life_cycle: DirectiveLifeCycle) -> Option<&DirectiveMethodTemplate> {
        self.methods.get(&life_cycle)
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Registered methods, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &DirectiveMethodTemplate> {
        self.methods.values()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn register(&mut self, method: DirectiveMethodTemplate) {
        let life_cycle = method.life_cycle();
        match self.methods.get(&life_cycle) {
            Some(existing) => {
                log::trace!(
                    "`{}` registers a second {life_cycle} method `{}`",
                    self.directive_name,
                    method.internal_name(),
                );
                let existing_name = existing.internal_name().to_string();
                self.duplicates.entry(life_cycle)
                    .or_insert_with(|| vec![existing_name])
                    .push(method.internal_name().to_string());
            },
            None => {
                self.methods.insert(life_cycle, method);
            },
        }
    }

    pub(crate) fn required_types(&self) -> impl Iterator<Item = DependentType> + '_ {
        self.methods.values().flat_map(|method| method.required_types())
    }

    /// Reports recorded duplicate registrations, then checks that every
    /// execution-phase method shares the signature of the first one
    /// registered.
    pub fn validate_or_throw(&self) -> Result<()> {
        if !self.duplicates.is_empty() {
            return Err(TemplateError::DuplicateLifeCycleRegistrations {
                internal_name: self.directive_name.to_owned(),
                duplicates: self.duplicates(),
            });
        }

        let mut execution_methods =
            self.methods.values()
                .filter(|method| method.life_cycle().phase() == DirectiveLifeCyclePhase::Execution);
        let Some(reference) = execution_methods.next() else {
            return Ok(());
        };
        for method in execution_methods {
            if !method.has_same_signature(reference) {
                return Err(TemplateError::MismatchedDirectiveSignatures {
                    internal_name: self.directive_name.to_owned(),
                    reference_method: reference.internal_name().to_string(),
                    reference_signature: reference.signature(),
                    method: method.internal_name().to_string(),
                    signature: method.signature(),
                });
            }
        }
        Ok(())
    }
}
