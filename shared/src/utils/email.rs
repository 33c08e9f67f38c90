//! E-mail address helpers

/// Mask an e-mail address for logging, keeping the first character of the
/// local part and the whole domain: `alice@example.com` -> `a****@example.com`.
pub fn mask_email(address: &str) -> String {
    match address.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}****@{}", first, domain)
        }
        _ => "****".to_string(),
    }
}
