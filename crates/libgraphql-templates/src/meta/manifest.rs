use crate::meta::MetadataError;
use crate::meta::ScalarDeclaration;
use crate::meta::TypeCatalog;
use crate::meta::TypeDescriptor;
use crate::templates::TemplateOptions;
use std::path::Path;

type Result<T> = std::result::Result<T, MetadataError>;

/// A JSON document describing the types (and any extra scalars) of one
/// application, along with the options to compile them with.
///
/// ```json
/// {
///   "options": { "require_method_declarations": false },
///   "scalars": [{ "type_name": "shop.Money", "graph_name": "Money", "value_type": true }],
///   "types": [{ "name": "shop.Widget", "properties": [{ "name": "Id", "type_ref": "i32" }] }]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct MetadataManifest {
    pub options: TemplateOptions,
    pub scalars: Vec<ScalarDeclaration>,
    pub types: Vec<TypeDescriptor>,
}
impl MetadataManifest {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path)
                .map_err(|err| MetadataError::ManifestRead {
                    path: path.to_path_buf(),
                    err,
                })?;
        serde_json::from_str(content.as_str())
            .map_err(|err| MetadataError::ManifestParse {
                path: Some(path.to_path_buf()),
                err,
            })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|err| MetadataError::ManifestParse {
                path: None,
                err,
            })
    }

    /// Builds a [`TypeCatalog`] holding every scalar and type in this
    /// manifest.
    pub fn to_catalog(&self) -> Result<TypeCatalog> {
        let mut catalog = TypeCatalog::new();
        catalog.set_input_object_prefix(self.options.input_object_prefix.as_str());
        for scalar in &self.scalars {
            catalog.register_scalar(scalar.clone())?;
        }
        for descriptor in &self.types {
            catalog.insert_type(descriptor.clone())?;
        }
        Ok(catalog)
    }
}
