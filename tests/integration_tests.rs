use serde::Serialize;
use serde_urlform::{encode, fields, to_bytes, to_string, Error, FieldMap, Number, Value};
use std::collections::HashMap;

fn assert_encodes<T: ?Sized + Serialize>(value: &T, expected: &str) {
    let encoded = to_string(value).unwrap();
    assert_eq!(encoded, expected);
}

#[test]
fn test_encode_bool() {
    assert_encodes(&true, "=true");
    assert_encodes(&false, "=false");
}

#[test]
fn test_encode_signed_integers() {
    assert_encodes(&0, "=0");
    assert_encodes(&1, "=1");
    assert_encodes(&-1, "=-1");
    assert_encodes(&i8::MIN, "=-128");
    assert_encodes(&i64::MIN, "=-9223372036854775808");
}

#[test]
fn test_encode_unsigned_integers() {
    assert_encodes(&0u32, "=0");
    assert_encodes(&255u8, "=255");
    assert_encodes(&u64::MAX, "=18446744073709551615");
}

#[test]
fn test_encode_floats() {
    assert_encodes(&1.0, "=1");
    assert_encodes(&-1.5, "=-1.5");
    assert_encodes(&(1.0 / 3.0), "=0.3333333333333333");
    assert_encodes(&(2.0 / 3.0), "=0.6666666666666666");
    assert_encodes(&0.25f32, "=0.25");
}

#[test]
fn test_encode_strings() {
    assert_encodes("", "=");
    assert_encodes("test", "=test");
    assert_encodes("Hello world", "=Hello+world");
    assert_encodes(&'a', "=a");
}

#[test]
fn test_encode_references() {
    let x = 42;
    assert_encodes(&&x, "=42");
    assert_encodes(&Box::new("boxed"), "=boxed");
    assert_encodes(&Some(1.5), "=1.5");
    assert_encodes(&Some(Some(true)), "=true");
}

#[test]
fn test_absent_reference_is_nil_value() {
    assert_eq!(to_bytes(&Option::<i32>::None).unwrap_err(), Error::NilValue);
    assert_eq!(encode(&Value::Ref(None)).unwrap_err(), Error::NilValue);
}

#[test]
fn test_unsupported_types() {
    assert!(matches!(
        to_bytes(&()).unwrap_err(),
        Error::UnsupportedType(_)
    ));
    assert!(matches!(
        to_bytes(&vec![1, 2, 3]).unwrap_err(),
        Error::UnsupportedType(_)
    ));
    assert!(matches!(
        to_bytes(&(1, "two")).unwrap_err(),
        Error::UnsupportedType(_)
    ));

    let mut map = HashMap::new();
    map.insert("k", "v");
    assert!(matches!(to_bytes(&map).unwrap_err(), Error::UnsupportedType(_)));
}

#[test]
fn test_unsupported_error_names_the_shape() {
    #[derive(Serialize)]
    struct Login {
        user: String,
    }

    let err = to_bytes(&Login {
        user: "alice".to_string(),
    })
    .unwrap_err();
    assert_eq!(err.to_string(), "unsupported value type: struct `Login`");

    let err = to_bytes(&vec![1]).unwrap_err();
    assert_eq!(err.to_string(), "unsupported value type: sequence");
}

#[test]
fn test_unit_enum_variant_encodes_as_string() {
    #[derive(Serialize)]
    enum Color {
        Red,
    }

    assert_encodes(&Color::Red, "=Red");
}

#[test]
fn test_newtype_struct_is_transparent() {
    #[derive(Serialize)]
    struct Meters(f64);

    assert_encodes(&Meters(-1.5), "=-1.5");
}

#[test]
fn test_value_scalars_match_native_scalars() {
    assert_eq!(encode(&Value::from(true)).unwrap(), to_bytes(&true).unwrap());
    assert_eq!(encode(&Value::from(-1i64)).unwrap(), to_bytes(&-1i64).unwrap());
    assert_eq!(encode(&Value::from(0u64)).unwrap(), to_bytes(&0u64).unwrap());
    assert_eq!(
        encode(&Value::from(1.0 / 3.0)).unwrap(),
        to_bytes(&(1.0 / 3.0)).unwrap()
    );
    assert_eq!(
        encode(&Value::from("Hello world")).unwrap(),
        to_bytes("Hello world").unwrap()
    );
    assert_eq!(
        encode(&Value::Number(Number::UInt(0))).unwrap(),
        b"=0"
    );
}

#[test]
fn test_value_reference_dereferences() {
    let value = Value::Ref(Some(Box::new(Value::from(42))));
    assert_eq!(encode(&value).unwrap(), b"=42");

    let nested = Value::Ref(Some(Box::new(Value::Ref(Some(Box::new(Value::from(
        "deep",
    )))))));
    assert_eq!(encode(&nested).unwrap(), b"=deep");
}

#[test]
fn test_bypass_multi_value_key() {
    let form = fields! {
        "key" => ["a", "b", "c"],
    };
    assert_eq!(
        encode(&Value::Fields(form)).unwrap(),
        b"key[0]=a&key[1]=b&key[2]=c"
    );
}

#[test]
fn test_bypass_multi_value_key_first_in_sort_order() {
    // A multi-valued key sorting before single-valued keys still gets a
    // separator between every pair.
    let form = fields! {
        "a" => ["x", "y"],
        "b" => "z",
    };
    assert_eq!(encode(&Value::Fields(form)).unwrap(), b"a[0]=x&a[1]=y&b=z");
}

#[test]
fn test_bypass_keys_are_sorted() {
    let mut fields = FieldMap::new();
    fields.append("zeta", "1");
    fields.append("alpha", "2");
    fields.append("mid", "3");
    assert_eq!(
        encode(&Value::Fields(fields)).unwrap(),
        b"alpha=2&mid=3&zeta=1"
    );
}

#[test]
fn test_sort_is_byte_wise() {
    // 'B' (0x42) sorts before 'a' (0x61); a locale or case-insensitive
    // sort would order these differently.
    let mut fields = FieldMap::new();
    fields.append("apple", "1");
    fields.append("Banana", "2");
    assert_eq!(
        encode(&Value::Fields(fields)).unwrap(),
        b"Banana=2&apple=1"
    );
}

#[test]
fn test_determinism_across_insertion_orders() {
    let mut forward = FieldMap::new();
    forward.append("a", "1");
    forward.append("b", "2");
    forward.append("c", "3");

    let mut backward = FieldMap::new();
    backward.append("c", "3");
    backward.append("b", "2");
    backward.append("a", "1");

    let first = encode(&Value::Fields(forward)).unwrap();
    let second = encode(&Value::Fields(backward)).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, b"a=1&b=2&c=3");
}

#[test]
fn test_empty_field_map_renders_empty() {
    assert_eq!(encode(&Value::Fields(FieldMap::new())).unwrap(), b"");
}

#[test]
fn test_reserved_characters_are_escaped() {
    assert_encodes("a&b=c", "=a%26b%3Dc");
    assert_encodes("100%", "=100%25");
    assert_encodes("a+b", "=a%2Bb");

    let form = fields! {
        "user name" => "A & B",
    };
    assert_eq!(
        encode(&Value::Fields(form)).unwrap(),
        b"user+name=A+%26+B"
    );
}

#[test]
fn test_non_ascii_is_percent_escaped() {
    assert_encodes("café", "=caf%C3%A9");
}

#[test]
fn test_json_scalars_encode() {
    use serde_json::json;

    assert_encodes(&json!(true), "=true");
    assert_encodes(&json!(1), "=1");
    assert_encodes(&json!(-1.5), "=-1.5");
    assert_encodes(&json!("Hello world"), "=Hello+world");
}

#[test]
fn test_json_composites_are_rejected() {
    use serde_json::json;

    assert!(matches!(
        to_bytes(&json!([1, 2])).unwrap_err(),
        Error::UnsupportedType(_)
    ));
    assert!(matches!(
        to_bytes(&json!({"k": "v"})).unwrap_err(),
        Error::UnsupportedType(_)
    ));
    assert!(matches!(
        to_bytes(&json!(null)).unwrap_err(),
        Error::UnsupportedType(_)
    ));
}
