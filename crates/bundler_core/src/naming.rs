//! Define the naming rules that derive generated identifiers from field names.
//!
//! Field names are expected in lowerCamelCase. Word boundaries are the positions of uppercase
//! characters (after the first character); digits and underscores never start a word.
//!
//! ## Notes
//! - Conversions are total: any input produces an output, even if it is not lowerCamelCase.
//! - Acronyms are split per letter: `userURL` becomes `USER_U_R_L`.
//! - Derived names are recomputed on every call; nothing is cached.

use crate::lang::conventions::{
    COMPANION_PREFIX, CONTAINER_KEY_PREFIX, GET_HELPER_PREFIX, GETTER_PREFIX, PUT_HELPER_PREFIX,
    SETTER_PREFIX,
};

/// Convert lowerCamelCase to UpperCamelCase.
///
/// ## Examples
/// ```rust
/// use bundler_core::naming::lower_camel_to_upper_camel;
///
/// assert_eq!(lower_camel_to_upper_camel("userName"), "UserName");
/// assert_eq!(lower_camel_to_upper_camel("x"), "X");
/// ```
pub fn lower_camel_to_upper_camel(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert lowerCamelCase to UPPER_UNDERSCORE.
///
/// ## Examples
/// ```rust
/// use bundler_core::naming::lower_camel_to_upper_underscore;
///
/// assert_eq!(lower_camel_to_upper_underscore("userName"), "USER_NAME");
/// assert_eq!(lower_camel_to_upper_underscore("user_name"), "USER_NAME");
/// ```
pub fn lower_camel_to_upper_underscore(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            out.push('_');
        }
        out.extend(c.to_uppercase());
    }
    out
}

/// Container key for a field: `ARG_` + UPPER_UNDERSCORE(name).
pub fn container_key(field_name: &str) -> String {
    format!("{CONTAINER_KEY_PREFIX}{}", lower_camel_to_upper_underscore(field_name))
}

/// Conventional accessor name for a field: `get` + UpperCamel(name).
pub fn getter_name(field_name: &str) -> String {
    format!("{GETTER_PREFIX}{}", lower_camel_to_upper_camel(field_name))
}

/// Conventional mutator name for a field: `set` + UpperCamel(name).
pub fn setter_name(field_name: &str) -> String {
    format!("{SETTER_PREFIX}{}", lower_camel_to_upper_camel(field_name))
}

/// Name of the companion's static helper reading a field from the container.
pub fn get_helper_name(field_name: &str) -> String {
    format!("{GET_HELPER_PREFIX}{}", lower_camel_to_upper_camel(field_name))
}

/// Name of the companion's static helper writing a field into the container.
pub fn put_helper_name(field_name: &str) -> String {
    format!("{PUT_HELPER_PREFIX}{}", lower_camel_to_upper_camel(field_name))
}

/// Companion type name for a model.
///
/// ## Parameters
/// - `simple_names`: simple names from the outermost enclosing class down to the model itself.
///
/// ## Examples
/// ```rust
/// use bundler_core::naming::companion_name;
///
/// assert_eq!(companion_name(["SampleActivity", "Params"]), "BundlerSampleActivityParams");
/// assert_eq!(companion_name(["Point"]), "BundlerPoint");
/// ```
pub fn companion_name<'a>(simple_names: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::from(COMPANION_PREFIX);
    for name in simple_names {
        out.push_str(name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_camel_capitalizes_first_char_only() {
        assert_eq!(lower_camel_to_upper_camel("userId"), "UserId");
        assert_eq!(lower_camel_to_upper_camel("user_name"), "User_name");
        assert_eq!(lower_camel_to_upper_camel("URL"), "URL");
        assert_eq!(lower_camel_to_upper_camel(""), "");
    }

    #[test]
    fn upper_underscore_splits_on_uppercase() {
        assert_eq!(lower_camel_to_upper_underscore("x"), "X");
        assert_eq!(lower_camel_to_upper_underscore("userId"), "USER_ID");
        assert_eq!(lower_camel_to_upper_underscore("userURL"), "USER_U_R_L");
        assert_eq!(lower_camel_to_upper_underscore("item2Count"), "ITEM2_COUNT");
        assert_eq!(lower_camel_to_upper_underscore("Leading"), "LEADING");
    }

    #[test]
    fn derived_names_follow_conventions() {
        assert_eq!(container_key("userName"), "ARG_USER_NAME");
        assert_eq!(getter_name("userName"), "getUserName");
        assert_eq!(setter_name("userName"), "setUserName");
        assert_eq!(get_helper_name("userName"), "getUserName");
        assert_eq!(put_helper_name("userName"), "putUserName");
    }

    #[test]
    fn camel_and_snake_spellings_share_a_key() {
        assert_eq!(container_key("userId"), container_key("user_id"));
    }
}
