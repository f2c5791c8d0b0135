use recast::{convert, ConvertError, Value};

#[test]
fn to_bool_literal_matrix() {
    let cases = [
        ("1", Some(true)),
        ("t", Some(true)),
        ("T", Some(true)),
        ("true", Some(true)),
        ("True", Some(true)),
        ("TRUE", Some(true)),
        ("0", Some(false)),
        ("f", Some(false)),
        ("F", Some(false)),
        ("false", Some(false)),
        ("False", Some(false)),
        ("FALSE", Some(false)),
        ("123", None),
        ("0.0", None),
        ("abc", None),
        ("truE", None),
        ("", None),
    ];
    for (input, expected) in cases {
        let result = convert::to_bool(&Value::from(input));
        match expected {
            Some(b) => assert_eq!(result.unwrap(), b, "input {input:?}"),
            None => assert!(
                matches!(result, Err(ConvertError::Parse { .. })),
                "input {input:?}"
            ),
        }
        // Zero-value convention: failures default to false.
        assert_eq!(
            convert::to_bool(&Value::from(input)).unwrap_or_default(),
            expected.unwrap_or(false),
            "input {input:?}"
        );
    }
}

#[test]
fn to_bool_passthrough_and_unsupported() {
    assert!(convert::to_bool(&Value::Bool(true)).unwrap());
    assert!(!convert::to_bool(&Value::Bool(false)).unwrap());
    for input in [
        Value::Null,
        Value::Int(1),
        Value::Float(0.0),
        Value::Bytes(vec![1]),
        Value::Array(vec![]),
    ] {
        assert!(
            matches!(
                convert::to_bool(&input),
                Err(ConvertError::UnsupportedType { .. })
            ),
            "input {input:?}"
        );
    }
}

#[test]
fn to_int_matrix() {
    assert_eq!(convert::to_int(&Value::from("123")).unwrap(), 123);
    assert_eq!(convert::to_int(&Value::from("-123")).unwrap(), -123);
    assert_eq!(convert::to_int(&Value::Float(12.3)).unwrap(), 12);
    assert_eq!(convert::to_int(&Value::Float(-12.3)).unwrap(), -12);
    assert_eq!(convert::to_int(&Value::Int(i64::MIN)).unwrap(), i64::MIN);

    assert!(matches!(
        convert::to_int(&Value::from("abc")),
        Err(ConvertError::Parse { .. })
    ));
    assert!(matches!(
        convert::to_int(&Value::from("12.3")),
        Err(ConvertError::Parse { .. })
    ));
    assert!(matches!(
        convert::to_int(&Value::Bool(true)),
        Err(ConvertError::UnsupportedType { .. })
    ));
    assert_eq!(convert::to_int(&Value::from("abc")).unwrap_or_default(), 0);
    assert_eq!(convert::to_int(&Value::Bool(true)).unwrap_or_default(), 0);
}

#[test]
fn to_float_matrix() {
    assert!(matches!(
        convert::to_float(&Value::from("")),
        Err(ConvertError::Parse { .. })
    ));
    assert!(matches!(
        convert::to_float(&Value::from("abc")),
        Err(ConvertError::Parse { .. })
    ));
    assert_eq!(convert::to_float(&Value::from("-1")).unwrap(), -1.0);
    assert_eq!(convert::to_float(&Value::from("-.11")).unwrap(), -0.11);
    assert_eq!(convert::to_float(&Value::from("1.23e3")).unwrap(), 1230.0);
    assert_eq!(convert::to_float(&Value::Int(5)).unwrap(), 5.0);
    assert!(matches!(
        convert::to_float(&Value::Bool(true)),
        Err(ConvertError::UnsupportedType { .. })
    ));
    assert_eq!(convert::to_float(&Value::from("")).unwrap_or_default(), 0.0);
}

#[test]
fn to_string_matrix() {
    assert_eq!(convert::to_string(&Value::from("")), "");
    assert_eq!(convert::to_string(&Value::Null), "");
    assert_eq!(convert::to_string(&Value::Int(0)), "0");
    assert_eq!(convert::to_string(&Value::Float(1.23)), "1.23");
    assert_eq!(convert::to_string(&Value::Bool(true)), "true");
    assert_eq!(convert::to_string(&Value::Bool(false)), "false");
    assert_eq!(
        convert::to_string(&Value::Array(vec![
            Value::Int(1),
            Value::Int(2),
            Value::Int(3),
        ])),
        "[1,2,3]"
    );
}

#[test]
fn to_string_is_idempotent_on_strings() {
    for s in ["", "abc", "1.23", "[1,2,3]"] {
        let once = convert::to_string(&Value::from(s));
        let twice = convert::to_string(&Value::from(once.clone()));
        assert_eq!(once, twice);
        assert_eq!(once, s);
    }
}

#[test]
fn to_json_sorts_object_keys() {
    let obj = [
        ("c".to_owned(), Value::Int(3)),
        ("a".to_owned(), Value::Int(1)),
        ("b".to_owned(), Value::Int(2)),
    ]
    .into();
    assert_eq!(
        convert::to_json(&Value::Object(obj)).unwrap(),
        r#"{"a":1,"b":2,"c":3}"#
    );
}

#[test]
fn to_json_matrix() {
    assert_eq!(convert::to_json(&Value::Null).unwrap(), "null");
    assert_eq!(convert::to_json(&Value::from("x")).unwrap(), "\"x\"");
    assert_eq!(
        convert::to_json(&Value::Array(vec![Value::Int(1), Value::Bool(true)])).unwrap(),
        "[1,true]"
    );
    assert_eq!(
        convert::to_json(&Value::Bytes(vec![1, 2])).unwrap(),
        "[1,2]"
    );
    assert!(matches!(
        convert::to_json(&Value::Float(f64::NAN)),
        Err(ConvertError::Structural(_))
    ));
}

#[test]
fn to_bytes_matrix() {
    assert_eq!(
        convert::to_bytes(&Value::Int(1)).unwrap(),
        vec![0, 0, 0, 0, 0, 0, 0, 1]
    );
    assert_eq!(
        convert::to_bytes(&Value::from("abc")).unwrap(),
        vec![97, 98, 99]
    );
    assert_eq!(
        convert::to_bytes(&Value::Bool(true)).unwrap(),
        b"true".to_vec()
    );
    assert_eq!(
        convert::to_bytes(&Value::Bool(false)).unwrap(),
        b"false".to_vec()
    );
    assert_eq!(
        convert::to_bytes(&Value::Bytes(vec![9, 8])).unwrap(),
        vec![9, 8]
    );
    assert_eq!(
        convert::to_bytes(&Value::Float(1.0)).unwrap(),
        1.0f64.to_be_bytes().to_vec()
    );
    assert!(matches!(
        convert::to_bytes(&Value::Null),
        Err(ConvertError::UnsupportedType { .. })
    ));
    assert!(matches!(
        convert::to_bytes(&Value::Array(vec![])),
        Err(ConvertError::UnsupportedType { .. })
    ));
}

#[test]
fn to_char_matrix() {
    assert_eq!(convert::to_char(""), Vec::<char>::new());
    assert_eq!(convert::to_char("abc"), vec!['a', 'b', 'c']);
    assert_eq!(convert::to_char("1 2#3"), vec!['1', ' ', '2', '#', '3']);
}

#[test]
fn to_pointer_returns_owned_copy() {
    let boxed = convert::to_pointer(&123);
    assert_eq!(*boxed, 123);
}

#[test]
fn to_channel_preserves_order_and_ends() {
    let rx = convert::to_channel(vec!["a", "b", "c"]);
    let drained: Vec<&str> = rx.iter().collect();
    assert_eq!(drained, vec!["a", "b", "c"]);

    let empty = convert::to_channel(Vec::<i64>::new());
    assert!(empty.recv().is_err());
}
