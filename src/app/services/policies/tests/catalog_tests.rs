//! Tests for the catalog rule set

use super::record;
use crate::app::models::Report;
use crate::app::services::policies::{
    AggregationPolicy, CatalogAggregation, CatalogValidation, ValidationPolicy,
};

const HEADER: &[&str] = &["Id", "Nome", "Categoria", "Preco"];

#[test]
fn test_complete_record_passes() {
    let errors = CatalogValidation.validate(&record(HEADER, "1,Caneta,Papelaria,2.5"));
    assert!(errors.is_empty());
}

#[test]
fn test_zero_price_is_valid() {
    let errors = CatalogValidation.validate(&record(HEADER, "1,Brinde,Promo,0"));
    assert!(errors.is_empty());
}

#[test]
fn test_missing_price_reports_only_absence() {
    let errors = CatalogValidation.validate(&record(HEADER, "1,Caneta,Papelaria,"));
    assert_eq!(errors, vec!["Preco ausente"]);
}

#[test]
fn test_unparseable_price_reports_only_invalid() {
    let errors = CatalogValidation.validate(&record(HEADER, "1,Caneta,Papelaria,abc"));
    assert_eq!(errors, vec!["Preco invalido"]);
}

#[test]
fn test_non_finite_prices_are_invalid() {
    // f64 parsing accepts these spellings; a price must be a real decimal
    for price in ["NaN", "inf", "-inf", "infinity"] {
        let errors =
            CatalogValidation.validate(&record(HEADER, &format!("1,Caneta,Papelaria,{price}")));
        assert_eq!(errors, vec!["Preco invalido"], "price: {price}");
    }
}

#[test]
fn test_negative_price_reports_only_negative() {
    // The three price rules are mutually exclusive per record
    let errors = CatalogValidation.validate(&record(HEADER, "3,Mouse,Eletronicos,-10"));
    assert_eq!(errors, vec!["Preco nao pode ser negativo"]);
}

#[test]
fn test_blank_category_is_an_error_alongside_price_check() {
    let errors = CatalogValidation.validate(&record(HEADER, "5,Lapis,,-1"));
    assert_eq!(
        errors,
        vec!["Categoria ausente", "Preco nao pode ser negativo"]
    );
}

#[test]
fn test_all_required_fields_blank() {
    let errors = CatalogValidation.validate(&record(HEADER, ",,,"));
    assert_eq!(
        errors,
        vec![
            "Id ausente",
            "Nome ausente",
            "Categoria ausente",
            "Preco ausente"
        ]
    );
}

#[test]
fn test_aggregation_counts_by_category() {
    let mut report = Report::new();
    CatalogAggregation.aggregate(&record(HEADER, "1,Caneta,Papelaria,2.5"), &mut report);
    CatalogAggregation.aggregate(&record(HEADER, "2,Caderno,Papelaria,15.0"), &mut report);

    assert_eq!(report.category_totals.get("Papelaria"), Some(&2));
}

#[test]
fn test_blank_category_aggregates_under_sentinel() {
    let mut report = Report::new();
    CatalogAggregation.aggregate(&record(HEADER, "5,Lapis,,1.2"), &mut report);

    assert_eq!(report.category_totals.get("(sem categoria)"), Some(&1));
}
