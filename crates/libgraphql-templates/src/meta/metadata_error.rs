use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("The `{type_name}` scalar is registered more than once")]
    DuplicateScalar {
        type_name: String,
    },

    #[error("The `{type_name}` type is described more than once")]
    DuplicateType {
        type_name: String,
    },

    #[error("Failure to read metadata manifest `{}`: {err}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("Invalid metadata manifest{}: {err}", describe_path(path))]
    ManifestParse {
        path: Option<PathBuf>,
        #[source]
        err: serde_json::Error,
    },
}

fn describe_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" `{}`", path.display()),
        None => String::new(),
    }
}
