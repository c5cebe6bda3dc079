use std::collections::HashMap;
use tinyjson::InnerAsRef;
use tinyjson::JsonValue;

pub fn read_value_or<T>(data: &HashMap<String, JsonValue>, name: &str, default: T) -> T
where
    T: Clone + InnerAsRef,
{
    match data.get(name) {
        Some(value) => value.get::<T>().cloned().unwrap_or(default),
        None => default,
    }
}
