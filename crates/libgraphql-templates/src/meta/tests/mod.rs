mod manifest_tests;
mod type_catalog_tests;
