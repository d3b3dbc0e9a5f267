//! ID generation utilities for Comprar

use uuid::Uuid;

/// Generate a unique item ID
///
/// Format: UUID v4 without hyphens (32 lowercase hex chars)
/// Example: `9f1c2e0b7a6d4c3e8b5a1f0e2d3c4b5a`
pub fn generate_item_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_item_id_format() {
        let id = generate_item_id();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!id.contains('-'));
    }

    #[test]
    fn test_generate_item_id_uniqueness() {
        let ids: std::collections::HashSet<String> = (0..100).map(|_| generate_item_id()).collect();
        assert_eq!(ids.len(), 100);
    }
}
