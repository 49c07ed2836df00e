//! 命名转换 - 组件名与库名之间的两条固定规则

/// 将PascalCase/camelCase名称转换为kebab-case库名。
///
/// 仅在小写字母或数字后面紧跟大写字母处加分隔符，连续大写不拆分。
pub fn to_kebab_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut prev_lower_or_digit = false;

    for ch in name.chars() {
        if ch.is_ascii_uppercase() && prev_lower_or_digit {
            result.push('-');
        }
        prev_lower_or_digit = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        result.push(ch.to_ascii_lowercase());
    }

    result
}

/// 仅把首字母改为大写，其余部分原样保留
pub fn to_pascal_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
