//! # Validation Module
//!
//! Field-level validation rules for Velo OMS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Validation Layers                             │
//! │                                                                     │
//! │  Layer 1: Frontend forms                                            │
//! │  └── Basic format checks, immediate feedback                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Tauri Command (Rust)                                      │
//! │  └── THIS MODULE: business rule validation                          │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                         │
//! │  └── NOT NULL, PRIMARY KEY, FOREIGN KEY constraints                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_LINE_QUANTITY, MAX_ORDER_LINES};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Alphanumeric plus hyphens and underscores only
///
/// ## Example
/// ```rust
/// use velo_core::validation::validate_sku;
///
/// assert!(validate_sku("HELM-STD").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("has space").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: 50,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name (non-empty, at most 200 characters).
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_name_field("name", name, 200)
}

/// Validates a customer name (non-empty, at most 120 characters).
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    validate_name_field("customer_name", name, 120)
}

/// Validates a category or bike model name (non-empty, at most 80 chars).
pub fn validate_catalog_name(name: &str) -> ValidationResult<()> {
    validate_name_field("name", name, 80)
}

fn validate_name_field(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a mobile number.
///
/// ## Rules
/// - Required
/// - Optional leading `+`
/// - Spaces and hyphens are allowed as separators and ignored
/// - 7 to 15 digits after stripping separators
///
/// ## Example
/// ```rust
/// use velo_core::validation::validate_mobile;
///
/// assert!(validate_mobile("+91 98765 43210").is_ok());
/// assert!(validate_mobile("98765-43210").is_ok());
/// assert!(validate_mobile("12345").is_err());
/// assert!(validate_mobile("not a number").is_err());
/// ```
pub fn validate_mobile(mobile: &str) -> ValidationResult<()> {
    let mobile = mobile.trim();

    if mobile.is_empty() {
        return Err(ValidationError::Required {
            field: "mobile_number".to_string(),
        });
    }

    let digits: String = mobile
        .strip_prefix('+')
        .unwrap_or(mobile)
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "mobile_number".to_string(),
            reason: "must contain only digits, separators, and an optional leading +".to_string(),
        });
    }

    if !(7..=15).contains(&digits.len()) {
        return Err(ValidationError::InvalidFormat {
            field: "mobile_number".to_string(),
            reason: "must be 7 to 15 digits".to_string(),
        });
    }

    Ok(())
}

/// Validates an email address when one is provided.
///
/// Deliberately shallow: one `@`, non-empty local part, and a domain with
/// a dot. Full RFC 5322 parsing buys nothing for a shop-counter form.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    let invalid = || ValidationError::InvalidFormat {
        field: "email_address".to_string(),
        reason: "must look like name@example.com".to_string(),
    };

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid());
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line-item quantity: positive and at most [`MAX_LINE_QUANTITY`].
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents. Zero is allowed (complimentary items).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level. Must not be negative.
pub fn validate_stock_level(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: "quantity_on_hand".to_string(),
        });
    }

    Ok(())
}

/// Validates an advance-received amount. Zero means no prepayment.
pub fn validate_advance_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative {
            field: "advance".to_string(),
        });
    }

    Ok(())
}

/// Validates a GST rate in basis points (0% to 100%).
pub fn validate_gst_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: "gst_rate".to_string(),
            min: 0,
            max: 10_000,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates the number of line items on a draft.
pub fn validate_line_count(count: usize) -> ValidationResult<()> {
    if count == 0 {
        return Err(ValidationError::Empty {
            field: "items".to_string(),
        });
    }

    if count > MAX_ORDER_LINES {
        return Err(ValidationError::OutOfRange {
            field: "items".to_string(),
            min: 1,
            max: MAX_ORDER_LINES as i64,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sku_rules() {
        assert!(validate_sku("HELM-STD").is_ok());
        assert!(validate_sku("tube_26in").is_ok());
        assert!(validate_sku("").is_err());
        assert!(validate_sku("   ").is_err());
        assert!(validate_sku("has space").is_err());
        assert!(validate_sku(&"A".repeat(100)).is_err());
    }

    #[test]
    fn mobile_rules() {
        assert!(validate_mobile("9876543210").is_ok());
        assert!(validate_mobile("+91 98765 43210").is_ok());
        assert!(validate_mobile("98765-43210").is_ok());
        assert!(validate_mobile("").is_err());
        assert!(validate_mobile("12345").is_err()); // too short
        assert!(validate_mobile("1234567890123456").is_err()); // too long
        assert!(validate_mobile("98x7654321").is_err());
    }

    #[test]
    fn email_rules() {
        assert!(validate_email("rider@example.com").is_ok());
        assert!(validate_email("a.b@shop.co.in").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("rider@").is_err());
        assert!(validate_email("rider@nodot").is_err());
        assert!(validate_email("rider@.com").is_err());
    }

    #[test]
    fn quantity_rules() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn money_rules() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(50_000).is_ok());
        assert!(validate_price_cents(-1).is_err());
        assert!(validate_advance_cents(0).is_ok());
        assert!(validate_advance_cents(-100).is_err());
    }

    #[test]
    fn gst_rate_rules() {
        assert!(validate_gst_rate_bps(0).is_ok());
        assert!(validate_gst_rate_bps(500).is_ok());
        assert!(validate_gst_rate_bps(10_000).is_ok());
        assert!(validate_gst_rate_bps(10_001).is_err());
    }

    #[test]
    fn line_count_rules() {
        assert!(validate_line_count(1).is_ok());
        assert!(validate_line_count(100).is_ok());
        assert!(matches!(
            validate_line_count(0),
            Err(ValidationError::Empty { .. })
        ));
        assert!(validate_line_count(101).is_err());
    }
}
