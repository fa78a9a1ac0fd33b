use attrgen::{parse, AttributeDescriptor, AttributeType, OptionKey, OptionValue, ParseError};

#[test]
fn test_names_alone_are_plain_strings() {
    for name in ["a", "title", "created_at", "Camel", "x1"] {
        let attr = parse(name).expect("bare name should parse");
        assert_eq!(attr.name(), name);
        assert_eq!(attr.attr_type(), AttributeType::String);
        assert!(attr.options().is_empty());
    }
}

#[test]
fn test_alias_table() {
    let cases = [
        ("bool", AttributeType::Boolean),
        ("Boolean", AttributeType::Boolean),
        ("date", AttributeType::Date),
        ("DATETIME", AttributeType::Datetime),
        ("float", AttributeType::Float),
        ("int", AttributeType::Integer),
        ("Integer", AttributeType::Integer),
        ("list", AttributeType::List),
        ("map", AttributeType::Map),
        ("num_set", AttributeType::NumericSet),
        ("numeric_set", AttributeType::NumericSet),
        ("NSET", AttributeType::NumericSet),
        ("string_set", AttributeType::StringSet),
        ("s_set", AttributeType::StringSet),
        ("sset", AttributeType::StringSet),
        ("string", AttributeType::String),
    ];

    for (alias, expected) in cases {
        let attr = parse(&format!("field:{}", alias)).unwrap();
        assert_eq!(attr.attr_type(), expected, "alias {}", alias);
        assert!(attr.options().is_empty());
    }
}

#[test]
fn test_generator_scenario() {
    let definitions = [
        "id:hkey",
        "sort:int:rkey",
        "title:string:db_attr_name{Title}",
        "tags:sset:ddb_type{ss}",
        "views:int:default_value{0},persist_nil",
    ];

    let attrs: Vec<AttributeDescriptor> = definitions
        .iter()
        .map(|d| parse(d).expect("definition should parse"))
        .collect();

    assert!(attrs[0].is_hash_key());
    assert_eq!(attrs[0].attr_type(), AttributeType::String);
    assert!(attrs[1].is_range_key());
    assert_eq!(
        attrs[2].option(OptionKey::DatabaseAttributeName).map(OptionValue::literal),
        Some("\"Title\"".to_string())
    );
    assert_eq!(
        attrs[3].option(OptionKey::DynamodbType).map(OptionValue::literal),
        Some("\"SS\"".to_string())
    );
    assert_eq!(attrs[4].options().len(), 2);
}

#[test]
fn test_canonical_text_parses_back() {
    let definitions = [
        "title",
        "id:hkey",
        "age:INT:hkey,default_value{0}",
        "pk:string:persist_nil,ddb_type{n},db_attr_name{PK},hkey",
        "meta:map:default_value{{}}",
        "starts:datetime:default_value{12:00}",
    ];

    for definition in definitions {
        let attr = parse(definition).unwrap();
        let reparsed = parse(&attr.to_string()).unwrap();
        assert_eq!(attr, reparsed, "{} rendered as {}", definition, attr);
    }
}

#[test]
fn test_rejections() {
    let cases = [
        ("id:map:hkey", "Field id cannot be a hash key and be of type map"),
        ("id:list:hkey", "Field id cannot be a hash key and be of type list"),
        ("id:string:hkey,rkey", "Field id cannot be a range key and hash key simultaneously"),
        ("x:string:bogus_opt", "You provided an invalid option for x: bogus_opt"),
        ("x:notatype", "Invalid type for x: notatype"),
        (":int", "Field definition is missing a name"),
    ];

    for (definition, message) in cases {
        let err = parse(definition).unwrap_err();
        assert_eq!(err.to_string(), message, "definition {}", definition);
    }
}

#[test]
fn test_first_failure_is_reported() {
    // The type is resolved before any option
    let err = parse("x:notatype:bogus_opt").unwrap_err();
    assert!(matches!(err, ParseError::InvalidType { .. }));

    // An invalid option stops parsing before the key conflict is checked
    let err = parse("x:map:hkey,bogus_opt").unwrap_err();
    assert!(matches!(err, ParseError::InvalidOption { .. }));
}

#[test]
fn test_repeated_parses_are_equal() {
    let definition = "age:int:hkey,default_value{0}";
    let first = parse(definition).unwrap();
    let mut second = parse(definition).unwrap();
    assert_eq!(first, second);

    // Mutating one result does not leak into later parses
    second.options_mut().clear();
    assert_eq!(parse(definition).unwrap(), first);
}

#[test]
fn test_parse_from_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || parse(&format!("field{}:int:default_value{{{}}}", i, i)))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let attr = handle.join().unwrap().unwrap();
        assert_eq!(attr.name(), format!("field{}", i));
        assert_eq!(attr.options()[&OptionKey::DefaultValue].literal(), i.to_string());
    }
}
