#[macro_export]
macro_rules! assert_value_eq_json {
    ($value:expr, $($json:tt)*) => {
        let right: ::serde_json::Value = ::serde_json::json!($($json)*);
        let left = ::serde_json::to_value(&$value).unwrap();

        assert_eq!(left, right, "json are not equals");
    };
}

#[macro_export]
macro_rules! records_vec {
    ($Record:ty, $($json:tt)*) => {{
        let val = ::serde_json::json!($($json)*);
        let data: Vec<$Record> = ::serde_json::from_value(val).unwrap();
        data
    }};
}
