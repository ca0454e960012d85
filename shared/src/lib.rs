use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Invoices per list page. The backend paginates at this size; `total_pages`
/// derives from it instead of the length of whatever page was last fetched,
/// so an empty page cannot corrupt the page count.
pub const PAGE_SIZE: u32 = 10;

/// Number of pages for a list with `count` invoices in total. Never zero, so
/// the pagination control always has a page 1 to render.
pub fn total_pages(count: u64) -> u32 {
    (count.div_ceil(PAGE_SIZE as u64) as u32).max(1)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub invoice_number: String,
    pub customer_name: String,
    pub date: NaiveDate,
}

/// One line item of an invoice, fetched from the per-invoice details
/// endpoint. The backend serializes its decimal columns as JSON strings;
/// `Decimal`'s deserializer accepts both strings and numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDetail {
    pub id: i64,
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

impl InvoiceDetail {
    /// Client-side recomputation of the line total.
    pub fn computed_total(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

/// Sum of the transmitted line totals, as shown in the view dialog.
pub fn grand_total(details: &[InvoiceDetail]) -> Decimal {
    details.iter().map(|d| d.line_total).sum()
}

/// A draft line item in the add dialog: no id, no stored total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailDraft {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewInvoice {
    pub invoice_number: String,
    pub customer_name: String,
    pub date: NaiveDate,
    pub details: Vec<DetailDraft>,
}

/// Full-replacement update body: header plus the entire detail array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceUpdate {
    pub id: i64,
    pub invoice_number: String,
    pub customer_name: String,
    pub date: NaiveDate,
    pub details: Vec<InvoiceDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicePage {
    pub results: Vec<Invoice>,
    pub count: u64,
}

/// Active list filters. Every field maps to one recognized query key; `None`
/// means no constraint on that field. Slider selections are only ever stored
/// as their min/max halves, never as a raw range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    pub invoice_number: Option<String>,
    pub customer_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub detail_description: Option<String>,
    pub min_quantity: Option<u32>,
    pub max_quantity: Option<u32>,
    pub min_unit_price: Option<u32>,
    pub max_unit_price: Option<u32>,
    pub min_total_value: Option<u32>,
    pub max_total_value: Option<u32>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        *self == FilterSet::default()
    }

    /// Date-range normalization applied when the filter dialog submits.
    ///
    /// An end date without a start date gets `today` as the start; a start
    /// date without an end date is demoted to an exact `date` match and the
    /// range keys are dropped. The asymmetry is what the deployed backend
    /// expects; do not even it out without a product decision.
    pub fn normalized(mut self, today: NaiveDate) -> Self {
        if self.end_date.is_some() && self.start_date.is_none() {
            self.start_date = Some(today);
        }
        if self.start_date.is_some() && self.end_date.is_none() {
            self.date = self.start_date.take();
        }
        self
    }

    /// Flatten to `(query key, value)` pairs for the list endpoint.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = &self.invoice_number {
            pairs.push(("invoice_number", v.clone()));
        }
        if let Some(v) = &self.customer_name {
            pairs.push(("customer_name", v.clone()));
        }
        if let Some(v) = self.date {
            pairs.push(("date", v.to_string()));
        }
        if let Some(v) = self.start_date {
            pairs.push(("start_date", v.to_string()));
        }
        if let Some(v) = self.end_date {
            pairs.push(("end_date", v.to_string()));
        }
        if let Some(v) = &self.detail_description {
            pairs.push(("details__description", v.clone()));
        }
        if let Some(v) = self.min_quantity {
            pairs.push(("details__min_quantity", v.to_string()));
        }
        if let Some(v) = self.max_quantity {
            pairs.push(("details__max_quantity", v.to_string()));
        }
        if let Some(v) = self.min_unit_price {
            pairs.push(("details__min_unit_price", v.to_string()));
        }
        if let Some(v) = self.max_unit_price {
            pairs.push(("details__max_unit_price", v.to_string()));
        }
        if let Some(v) = self.min_total_value {
            pairs.push(("min_total_value", v.to_string()));
        }
        if let Some(v) = self.max_total_value {
            pairs.push(("max_total_value", v.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(25), 3);
        assert_eq!(total_pages(30), 3);
        assert_eq!(total_pages(31), 4);
        assert_eq!(total_pages(1), 1);
    }

    #[test]
    fn total_pages_never_zero() {
        assert_eq!(total_pages(0), 1);
    }

    #[test]
    fn end_date_alone_gets_defaulted_start() {
        let today = day("2024-06-15");
        let filters = FilterSet {
            end_date: Some(day("2024-06-30")),
            ..FilterSet::default()
        }
        .normalized(today);

        assert_eq!(filters.start_date, Some(today));
        assert_eq!(filters.end_date, Some(day("2024-06-30")));
        assert_eq!(filters.date, None);
    }

    #[test]
    fn start_date_alone_becomes_exact_date() {
        let filters = FilterSet {
            start_date: Some(day("2024-01-01")),
            ..FilterSet::default()
        }
        .normalized(day("2024-06-15"));

        assert_eq!(filters.date, Some(day("2024-01-01")));
        assert_eq!(filters.start_date, None);
        assert_eq!(filters.end_date, None);
    }

    #[test]
    fn full_date_range_passes_through() {
        let filters = FilterSet {
            start_date: Some(day("2024-01-01")),
            end_date: Some(day("2024-12-31")),
            ..FilterSet::default()
        }
        .normalized(day("2024-06-15"));

        assert_eq!(filters.start_date, Some(day("2024-01-01")));
        assert_eq!(filters.end_date, Some(day("2024-12-31")));
        assert_eq!(filters.date, None);
    }

    #[test]
    fn ranges_emit_min_max_keys_only() {
        let filters = FilterSet {
            min_quantity: Some(5),
            max_quantity: Some(50),
            min_unit_price: Some(10),
            max_unit_price: Some(200),
            min_total_value: Some(0),
            max_total_value: Some(5000),
            ..FilterSet::default()
        };

        let pairs = filters.query_pairs();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "details__min_quantity",
                "details__max_quantity",
                "details__min_unit_price",
                "details__max_unit_price",
                "min_total_value",
                "max_total_value",
            ]
        );
        assert!(!keys.iter().any(|k| k.contains("range")));
    }

    #[test]
    fn absent_fields_emit_nothing() {
        assert!(FilterSet::default().query_pairs().is_empty());
        assert!(FilterSet::default().is_empty());

        let filters = FilterSet {
            customer_name: Some("Acme".to_string()),
            ..FilterSet::default()
        };
        assert_eq!(
            filters.query_pairs(),
            vec![("customer_name", "Acme".to_string())]
        );
        assert!(!filters.is_empty());
    }

    #[test]
    fn line_total_recomputes_from_quantity_and_price() {
        let detail = InvoiceDetail {
            id: 1,
            description: "Widget".to_string(),
            quantity: dec("2"),
            unit_price: dec("9.99"),
            line_total: dec("19.98"),
        };
        assert_eq!(detail.computed_total(), dec("19.98"));
    }

    #[test]
    fn grand_total_sums_transmitted_line_totals() {
        let details = vec![
            InvoiceDetail {
                id: 1,
                description: "Widget".to_string(),
                quantity: dec("2"),
                unit_price: dec("9.99"),
                line_total: dec("19.98"),
            },
            InvoiceDetail {
                id: 2,
                description: "Gadget".to_string(),
                quantity: dec("1"),
                unit_price: dec("100.00"),
                line_total: dec("100.00"),
            },
        ];
        assert_eq!(grand_total(&details), dec("119.98"));
        // The server echoes consistent totals, so the grand total matches
        // the client-side recomputation row by row.
        let recomputed: Decimal = details.iter().map(|d| d.computed_total()).sum();
        assert_eq!(grand_total(&details), recomputed);
        assert_eq!(grand_total(&[]), Decimal::ZERO);
    }

    #[test]
    fn create_body_serializes_iso_date_and_details() {
        let request = NewInvoice {
            invoice_number: "INV-1".to_string(),
            customer_name: "Acme".to_string(),
            date: day("2024-01-01"),
            details: vec![DetailDraft {
                description: "Widget".to_string(),
                quantity: dec("2"),
                unit_price: dec("9.99"),
            }],
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["date"], "2024-01-01");
        assert_eq!(body["details"].as_array().unwrap().len(), 1);
        assert_eq!(body["details"][0]["description"], "Widget");
        assert_eq!(body["details"][0]["quantity"], "2");
        assert_eq!(body["details"][0]["unit_price"], "9.99");
    }

    #[test]
    fn details_deserialize_string_or_numeric_fields() {
        // The backend sends decimals as strings; tolerate plain numbers too.
        let data = r#"[
            {"id": 1, "description": "Widget", "quantity": "2.00", "unit_price": "9.99", "line_total": "19.98"},
            {"id": 2, "description": "Gadget", "quantity": 3, "unit_price": 5.5, "line_total": 16.5}
        ]"#;

        let details: Vec<InvoiceDetail> = serde_json::from_str(data).unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].quantity, dec("2.00"));
        assert_eq!(details[0].line_total, dec("19.98"));
        assert_eq!(details[1].unit_price, dec("5.5"));
        assert_eq!(grand_total(&details), dec("36.48"));
    }

    #[test]
    fn invoice_page_round_trips() {
        let data = r#"{"results": [{"id": 7, "invoice_number": "INV-7", "customer_name": "Acme", "date": "2024-03-05"}], "count": 25}"#;
        let page: InvoicePage = serde_json::from_str(data).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].date, day("2024-03-05"));
        assert_eq!(total_pages(page.count), 3);
    }
}
