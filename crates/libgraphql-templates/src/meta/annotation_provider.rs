use crate::meta::Annotation;
use crate::meta::AnnotationFamily;

/// Exposes the annotations declared on (and inherited by) a metadata
/// element.
pub trait AnnotationProvider {
    /// Annotations declared directly on this element, in declaration order.
    fn declared_annotations(&self) -> &[Annotation];

    /// Annotations this element inherits from its ancestors.
    fn inherited_annotations(&self) -> &[Annotation] {
        &[]
    }

    /// Every annotation of the given family. Declared annotations come before
    /// inherited ones.
    fn annotations(
        &self,
        family: AnnotationFamily,
        include_inherited: bool,
    ) -> Vec<&Annotation> {
        let inherited: &[Annotation] =
            if include_inherited {
                self.inherited_annotations()
            } else {
                &[]
            };

        self.declared_annotations()
            .iter()
            .chain(inherited.iter())
            .filter(|annot| annot.family() == family)
            .collect()
    }

    fn first_annotation(&self, family: AnnotationFamily) -> Option<&Annotation> {
        self.annotations(family, true).into_iter().next()
    }

    fn has_annotation(&self, family: AnnotationFamily) -> bool {
        self.first_annotation(family).is_some()
    }
}
