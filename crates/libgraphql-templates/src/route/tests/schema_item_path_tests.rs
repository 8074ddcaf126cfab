use crate::route::SchemaItemCollection;
use crate::route::SchemaItemPath;
use crate::route::is_valid_graph_name;

#[test]
fn join_normalizes_nested_and_empty_segments() {
    let path = SchemaItemPath::join(
        SchemaItemCollection::Query,
        ["Users/ Search ", "", "/ByName/"],
    );

    assert_eq!(path.segments(), &["Users", "Search", "ByName"]);
    assert_eq!(path.path(), "[query]/Users/Search/ByName");
    assert_eq!(path.name(), Some("ByName"));
    assert!(path.is_valid());
}

#[test]
fn path_without_segments_is_invalid() {
    let path = SchemaItemPath::join(SchemaItemCollection::Mutation, [""]);

    assert_eq!(path.path(), "[mutation]");
    assert_eq!(path.name(), None);
    assert!(!path.is_valid());
}

#[test]
fn reserved_and_illegal_segments_are_reported() {
    let path = SchemaItemPath::join(
        SchemaItemCollection::Types,
        ["Widget", "__typename", "1st", "has-dash"],
    );

    assert!(!path.is_valid());
    assert_eq!(path.invalid_segments(), vec!["__typename", "1st", "has-dash"]);
}

#[test]
fn child_and_parent_walk_the_hierarchy() {
    let owner = SchemaItemPath::join(SchemaItemCollection::Types, ["Widget"]);
    let field = owner.child("parts");

    assert_eq!(field.to_string(), "[type]/Widget/parts");
    assert_eq!(field.parent(), Some(owner.clone()));
    assert_eq!(owner.parent(), None);
    assert_eq!(field.collection(), SchemaItemCollection::Types);
}

#[test]
fn graph_name_rules() {
    assert!(is_valid_graph_name("_private"));
    assert!(is_valid_graph_name("Widget2"));
    assert!(!is_valid_graph_name(""));
    assert!(!is_valid_graph_name("__schema"));
    assert!(!is_valid_graph_name("ünicode"));
    assert!(!is_valid_graph_name("with space"));
}
