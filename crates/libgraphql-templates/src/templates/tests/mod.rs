mod argument_template_tests;
mod controller_template_tests;
mod directive_template_tests;
mod enum_type_template_tests;
mod input_object_type_template_tests;
mod test_utils;
