/// Builds a [`FieldMap`](crate::FieldMap) literal.
///
/// Each entry maps a key to either a single value or a bracketed list of
/// values; list entries become multi-valued keys rendered with `[0]`,
/// `[1]`, ... indices.
///
/// # Examples
///
/// ```rust
/// use serde_urlform::{encode, fields, Value};
///
/// let fields = fields! {
///     "name" => "Alice",
///     "tag" => ["rust", "serde"],
/// };
///
/// let bytes = encode(&Value::Fields(fields)).unwrap();
/// assert_eq!(bytes, b"name=Alice&tag[0]=rust&tag[1]=serde");
/// ```
#[macro_export]
macro_rules! fields {
    // Handle empty map
    () => {
        $crate::FieldMap::new()
    };

    // Handle entries; each value is either a [list] or a single value
    ( $($key:expr => $value:tt),* $(,)? ) => {{
        let mut fields = $crate::FieldMap::new();
        $(
            $crate::fields!(@entry fields, $key, $value);
        )*
        fields
    }};

    (@entry $fields:ident, $key:expr, [ $($val:expr),* $(,)? ]) => {
        $(
            $fields.append($key, $val);
        )*
    };

    (@entry $fields:ident, $key:expr, $val:expr) => {
        $fields.append($key, $val);
    };
}
