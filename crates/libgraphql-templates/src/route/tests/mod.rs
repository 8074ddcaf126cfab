mod schema_item_path_tests;
