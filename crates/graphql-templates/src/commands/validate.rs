use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_templates::meta::MetadataManifest;
use libgraphql_templates::meta::SharedTypeResolver;
use libgraphql_templates::templates::TemplateProvider;
use libgraphql_templates::types::TypeKind;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "json".to_string(),
        ],
        help="Set of file extensions to filter to when searching for \
             metadata manifests within a directory.",
        long,
        value_delimiter = ',',
    )]
    manifest_file_exts: Vec<String>,

    #[arg(
        help="Print the types each compiled template requires.",
        long,
    )]
    show_required_types: bool,

    #[arg(
        help="Paths to one or more metadata manifests or directories \
             containing metadata manifests which need to be compiled.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// Totals across every compiled manifest.
#[derive(Debug, Default)]
struct CompileSummary {
    num_directives: usize,
    num_fields: usize,
    num_types: usize,
    required_types: Vec<String>,
}

impl ValidateCmd {
    fn compile_manifest(
        &self,
        path: &Path,
        summary: &mut CompileSummary,
        errors: &mut Vec<anyhow::Error>,
    ) {
        let manifest = match MetadataManifest::from_file(path) {
            Ok(manifest) => manifest,
            Err(err) => {
                errors.push(err.into());
                return;
            },
        };
        let catalog = match manifest.to_catalog() {
            Ok(catalog) => catalog,
            Err(err) => {
                errors.push(anyhow::Error::new(err).context(format!(
                    "Failed to load the types described in {path:#?}",
                )));
                return;
            },
        };

        let resolver: SharedTypeResolver = Arc::new(catalog);
        let provider = TemplateProvider::new(resolver, manifest.options.to_owned());
        log::debug!(
            "Compiling {} described type(s) from {path:#?}...",
            manifest.types.len(),
        );
        for descriptor in &manifest.types {
            let type_name = descriptor.name.as_str();
            let compiled =
                provider.parse_type_auto(type_name)
                    .with_context(|| format!("Failed to compile `{type_name}` ({path:#?})"));
            let template = match compiled {
                Ok(template) => template,
                Err(err) => {
                    errors.push(err);
                    continue;
                },
            };

            summary.num_types += 1;
            if template.kind() == TypeKind::Directive {
                summary.num_directives += 1;
            }
            summary.num_fields += template.fields().map_or(0, |fields| fields.len());
            if self.show_required_types {
                for required in template.required_types() {
                    summary.required_types.push(format!(
                        "  * {} requires {} `{}`",
                        template.route(),
                        required.expected_kind(),
                        required.type_name(),
                    ));
                }
            }
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<anyhow::Error> = vec![];

        // Normalize the set of file extensions to filter with
        let manifest_file_exts: HashSet<String> =
            self.manifest_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_files: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        let is_manifest =
                            path.extension()
                                .map(|ext| ext.to_string_lossy())
                                .is_some_and(|ext| manifest_file_exts.contains(&*ext));
                        if is_manifest {
                            log::trace!("Found manifest at {path:#?}.");
                            file_paths.push(path.to_path_buf());
                        } else {
                            log::trace!("Skipping non-manifest file: {path:#?}.");
                            num_skipped_files += 1;
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.into());
                    },
                }
            }
        }

        // A single file passed explicitly is compiled regardless of its
        // extension.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to compile {first_arg_path:#?} even though it \
                doesn't match any of the --manifest-file-exts ({}).",
                manifest_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_skipped_files = num_skipped_files.saturating_sub(1);
            file_paths.push(first_arg_path.to_owned());
        }

        log::debug!("Found {} manifests to be compiled.", file_paths.len());

        let mut summary = CompileSummary::default();
        for path in &file_paths {
            self.compile_manifest(path, &mut summary, &mut errors);
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} {} template error(s):\n{}",
                output_utils::RED_X,
                errors.len(),
                errors.iter()
                    .map(|err| format!("  * {err:#}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ));
        }

        let required_types =
            if summary.required_types.is_empty() {
                String::new()
            } else {
                format!("\nRequired types:\n{}", summary.required_types.join("\n"))
            };
        CommandResult::stdout(format_args!(
            concat!(
                "{} All templates compiled successfully:\n",
                "  * Analyzed {} manifests.\n",
                "  * Skipped {} non-manifest files.\n",
                "  * Compiled {} types.\n",
                "  * Compiled {} fields.\n",
                "  * Compiled {} directives.{}",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_skipped_files,
            summary.num_types,
            summary.num_fields,
            summary.num_directives,
            required_types,
        ))
    }
}
