//! Catalog rule set: product catalog imports keyed by `Categoria`

use super::{AggregationPolicy, ValidationPolicy, require_fields};
use crate::app::models::{Record, Report};
use crate::constants::{
    CATALOG_CATEGORY_FIELD, CATALOG_PRICE_FIELD, CATALOG_REQUIRED_FIELDS, CATALOG_SENTINEL,
};

/// Requires non-blank `Id`, `Nome`, `Categoria`, and `Preco`, with `Preco`
/// parsing as a non-negative decimal.
///
/// The three price rules are mutually exclusive: a record reports at most
/// one of missing, unparseable, or negative, because each check only runs
/// once the previous one passed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogValidation;

impl ValidationPolicy for CatalogValidation {
    fn validate(&self, record: &Record) -> Vec<String> {
        let mut errors = Vec::new();
        require_fields(record, CATALOG_REQUIRED_FIELDS, &mut errors);

        let price = record.get(CATALOG_PRICE_FIELD).trim();
        if !price.is_empty() {
            match price.parse::<f64>() {
                // NaN and infinities are not decimals
                Err(_) => errors.push(format!("{CATALOG_PRICE_FIELD} invalido")),
                Ok(value) if !value.is_finite() => {
                    errors.push(format!("{CATALOG_PRICE_FIELD} invalido"));
                }
                Ok(value) if value < 0.0 => {
                    errors.push(format!("{CATALOG_PRICE_FIELD} nao pode ser negativo"));
                }
                Ok(_) => {}
            }
        }

        errors
    }
}

/// Counts records per `Categoria`, grouping blank categories under
/// `(sem categoria)`
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogAggregation;

impl AggregationPolicy for CatalogAggregation {
    fn aggregate(&self, record: &Record, report: &mut Report) {
        report.tally_category(record.get(CATALOG_CATEGORY_FIELD), CATALOG_SENTINEL);
    }
}
