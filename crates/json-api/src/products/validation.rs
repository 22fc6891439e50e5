//! Product request validation.
//!
//! Validation runs as router hoops ahead of the handlers. Each stage checks
//! every rule it owns, in declaration order, and either passes control on or
//! answers `400` with the accumulated field errors.

use salvo::prelude::*;
use serde_json::Value;

use catalog_app::products::records::ProductId;

use crate::errors::{ApiError, FieldError};

pub(crate) const ID_PARAM: &str = "id";

pub(crate) const INVALID_ID: &str = "invalid ID";
pub(crate) const NAME_REQUIRED: &str = "name is required";
pub(crate) const NAME_TOO_LONG: &str = "name must be at most 100 characters";
pub(crate) const NAME_HAS_NUL: &str = "name must not contain NUL characters";
pub(crate) const PRICE_NOT_NUMBER: &str = "price must be a number";
pub(crate) const PRICE_NOT_POSITIVE: &str = "price must be greater than zero";
pub(crate) const AVAILABILITY_NOT_BOOLEAN: &str = "availability must be a boolean";

/// Matches the width of the `products.name` column.
const NAME_MAX_CHARS: usize = 100;

/// The body fields product rules inspect. `null` counts as absent.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ProductInput<'a> {
    pub name: Option<&'a Value>,
    pub price: Option<&'a Value>,
    pub availability: Option<&'a Value>,
}

impl<'a> ProductInput<'a> {
    pub(crate) fn from_body(body: &'a Value) -> Self {
        Self {
            name: present(body, "name"),
            price: present(body, "price"),
            availability: present(body, "availability"),
        }
    }
}

fn present<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    body.get(key).filter(|value| !value.is_null())
}

pub(crate) struct Rule {
    field: &'static str,
    message: &'static str,
    check: fn(&ProductInput<'_>) -> bool,
}

pub(crate) const NEW_PRODUCT_RULES: &[Rule] = &[
    Rule {
        field: "name",
        message: NAME_REQUIRED,
        check: name_present,
    },
    Rule {
        field: "name",
        message: NAME_TOO_LONG,
        check: name_within_limit,
    },
    Rule {
        field: "name",
        message: NAME_HAS_NUL,
        check: name_without_nul,
    },
    Rule {
        field: "price",
        message: PRICE_NOT_NUMBER,
        check: price_numeric,
    },
    Rule {
        field: "price",
        message: PRICE_NOT_POSITIVE,
        check: price_positive,
    },
];

pub(crate) const PRODUCT_UPDATE_RULES: &[Rule] = &[
    Rule {
        field: "name",
        message: NAME_REQUIRED,
        check: name_present,
    },
    Rule {
        field: "name",
        message: NAME_TOO_LONG,
        check: name_within_limit,
    },
    Rule {
        field: "name",
        message: NAME_HAS_NUL,
        check: name_without_nul,
    },
    Rule {
        field: "price",
        message: PRICE_NOT_NUMBER,
        check: price_numeric,
    },
    Rule {
        field: "price",
        message: PRICE_NOT_POSITIVE,
        check: price_positive,
    },
    Rule {
        field: "availability",
        message: AVAILABILITY_NOT_BOOLEAN,
        check: availability_boolean,
    },
];

fn name_present(input: &ProductInput<'_>) -> bool {
    input
        .name
        .and_then(Value::as_str)
        .is_some_and(|name| !name.trim().is_empty())
}

// Absent or non-string names are reported by `name_present` alone.
fn name_within_limit(input: &ProductInput<'_>) -> bool {
    input
        .name
        .and_then(Value::as_str)
        .is_none_or(|name| name.chars().count() <= NAME_MAX_CHARS)
}

// PostgreSQL text columns cannot store NUL.
fn name_without_nul(input: &ProductInput<'_>) -> bool {
    input
        .name
        .and_then(Value::as_str)
        .is_none_or(|name| !name.contains('\0'))
}

fn price_numeric(input: &ProductInput<'_>) -> bool {
    input.price.is_some_and(Value::is_number)
}

fn price_positive(input: &ProductInput<'_>) -> bool {
    input
        .price
        .and_then(Value::as_f64)
        .is_some_and(|price| price > 0.0)
}

fn availability_boolean(input: &ProductInput<'_>) -> bool {
    input.availability.is_none_or(Value::is_boolean)
}

/// Evaluate every rule against `input`, keeping failures in rule order.
pub(crate) fn validate(input: &ProductInput<'_>, rules: &[Rule]) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = rules
        .iter()
        .filter(|rule| !(rule.check)(input))
        .map(|rule| FieldError::new(rule.field, rule.message))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub(crate) fn parse_id(raw: &str) -> Result<ProductId, Vec<FieldError>> {
    raw.parse::<ProductId>()
        .map_err(|_ignored| vec![FieldError::new(ID_PARAM, INVALID_ID)])
}

fn reject(res: &mut Response, ctrl: &mut FlowCtrl, errors: Vec<FieldError>) {
    res.render(ApiError::Validation(errors));
    ctrl.skip_rest();
}

/// Rejects requests whose `{id}` segment is not an integer.
#[handler]
pub(crate) async fn validate_id(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let raw = req.param::<String>(ID_PARAM).unwrap_or_default();

    match parse_id(&raw) {
        Ok(_) => {
            ctrl.call_next(req, depot, res).await;
        }
        Err(errors) => reject(res, ctrl, errors),
    }
}

#[handler]
pub(crate) async fn validate_new_product(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    validate_body(req, depot, res, ctrl, NEW_PRODUCT_RULES).await;
}

#[handler]
pub(crate) async fn validate_product_update(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    validate_body(req, depot, res, ctrl, PRODUCT_UPDATE_RULES).await;
}

async fn validate_body(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
    rules: &[Rule],
) {
    // Unparseable or non-object bodies are validated as if empty.
    let body = req.parse_json::<Value>().await.unwrap_or(Value::Null);

    match validate(&ProductInput::from_body(&body), rules) {
        Ok(()) => {
            ctrl.call_next(req, depot, res).await;
        }
        Err(errors) => reject(res, ctrl, errors),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn messages(body: &Value, rules: &[Rule]) -> Vec<String> {
        validate(&ProductInput::from_body(body), rules)
            .err()
            .unwrap_or_default()
            .into_iter()
            .map(|error| error.message)
            .collect()
    }

    #[test]
    fn valid_new_product_passes() {
        let body = json!({ "name": "Monitor", "price": 300 });

        assert!(validate(&ProductInput::from_body(&body), NEW_PRODUCT_RULES).is_ok());
    }

    #[test]
    fn empty_body_reports_every_rule_in_order() {
        assert_eq!(
            messages(&json!({}), NEW_PRODUCT_RULES),
            [NAME_REQUIRED, PRICE_NOT_NUMBER, PRICE_NOT_POSITIVE]
        );
    }

    #[test]
    fn non_object_body_is_treated_as_empty() {
        assert_eq!(
            messages(&json!([1, 2, 3]), NEW_PRODUCT_RULES),
            messages(&json!({}), NEW_PRODUCT_RULES)
        );
        assert_eq!(
            messages(&Value::Null, NEW_PRODUCT_RULES),
            messages(&json!({}), NEW_PRODUCT_RULES)
        );
    }

    #[test]
    fn blank_name_is_required() {
        let body = json!({ "name": "   ", "price": 10 });

        assert_eq!(messages(&body, NEW_PRODUCT_RULES), [NAME_REQUIRED]);
    }

    #[test]
    fn non_string_name_is_required() {
        let body = json!({ "name": 42, "price": 10 });

        assert_eq!(messages(&body, NEW_PRODUCT_RULES), [NAME_REQUIRED]);
    }

    #[test]
    fn long_name_is_rejected() {
        let body = json!({ "name": "x".repeat(101), "price": 10 });

        assert_eq!(messages(&body, NEW_PRODUCT_RULES), [NAME_TOO_LONG]);
    }

    #[test]
    fn name_with_nul_is_rejected() {
        for rules in [NEW_PRODUCT_RULES, PRODUCT_UPDATE_RULES] {
            let body = json!({ "name": "Moni\u{0}tor", "price": 10 });

            assert_eq!(messages(&body, rules), [NAME_HAS_NUL]);
        }
    }

    #[test]
    fn name_limit_counts_characters_not_bytes() {
        let body = json!({ "name": "ñ".repeat(100), "price": 10 });

        assert!(messages(&body, NEW_PRODUCT_RULES).is_empty());
    }

    #[test]
    fn numeric_string_price_is_not_a_number() {
        let body = json!({ "name": "Monitor", "price": "300" });

        assert_eq!(
            messages(&body, NEW_PRODUCT_RULES),
            [PRICE_NOT_NUMBER, PRICE_NOT_POSITIVE]
        );
    }

    #[test]
    fn zero_and_negative_prices_are_rejected() {
        for price in [json!(0), json!(0.0), json!(-5), json!(-0.01)] {
            let body = json!({ "name": "Monitor", "price": price });

            assert_eq!(
                messages(&body, NEW_PRODUCT_RULES),
                [PRICE_NOT_POSITIVE],
                "price {price}"
            );
        }
    }

    #[test]
    fn null_fields_count_as_missing() {
        let body = json!({ "name": null, "price": null });

        assert_eq!(
            messages(&body, NEW_PRODUCT_RULES),
            [NAME_REQUIRED, PRICE_NOT_NUMBER, PRICE_NOT_POSITIVE]
        );
    }

    #[test]
    fn new_product_ignores_availability() {
        let body = json!({ "name": "Monitor", "price": 300, "availability": "yes" });

        assert!(messages(&body, NEW_PRODUCT_RULES).is_empty());
    }

    #[test]
    fn update_accepts_missing_or_boolean_availability() {
        for body in [
            json!({ "name": "Monitor", "price": 300 }),
            json!({ "name": "Monitor", "price": 300, "availability": false }),
            json!({ "name": "Monitor", "price": 300, "availability": null }),
        ] {
            assert!(messages(&body, PRODUCT_UPDATE_RULES).is_empty(), "{body}");
        }
    }

    #[test]
    fn update_rejects_non_boolean_availability() {
        let body = json!({ "name": "Monitor", "price": 300, "availability": "true" });

        assert_eq!(
            messages(&body, PRODUCT_UPDATE_RULES),
            [AVAILABILITY_NOT_BOOLEAN]
        );
    }

    #[test]
    fn update_reports_fields_in_declaration_order() {
        let body = json!({ "price": -1, "availability": 1 });

        let Err(errors) = validate(&ProductInput::from_body(&body), PRODUCT_UPDATE_RULES) else {
            panic!("expected validation errors");
        };

        let fields: Vec<&str> = errors.iter().map(|error| error.field.as_str()).collect();

        assert_eq!(fields, ["name", "price", "availability"]);
    }

    #[test]
    fn parse_id_accepts_integers() {
        assert_eq!(parse_id("42"), Ok(ProductId::from_i64(42)));
    }

    #[test]
    fn parse_id_rejects_non_integers() {
        for raw in ["abc", "1.5", "", "9223372036854775808"] {
            assert_eq!(
                parse_id(raw),
                Err(vec![FieldError::new(ID_PARAM, INVALID_ID)]),
                "id {raw:?}"
            );
        }
    }
}
