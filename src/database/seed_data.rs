//! Fixed sample-data catalog offered to the report builder UI.
//!
//! The catalog is static: seeding inserts exactly these rows, in this order.

use serde_json::{json, Value};

pub const TEXT: &str = "text";
pub const IMAGE: &str = "image";
pub const TABLE: &str = "table";
pub const CHART: &str = "chart";

#[derive(Debug, Clone, PartialEq)]
pub struct SeedEntry {
    pub data_type: &'static str,
    pub category: &'static str,
    pub data: Value,
}

impl SeedEntry {
    fn new(data_type: &'static str, category: &'static str, data: Value) -> Self {
        Self {
            data_type,
            category,
            data,
        }
    }
}

/// All seed rows: text, then image, table and chart samples.
pub fn catalog() -> Vec<SeedEntry> {
    let mut entries = Vec::new();
    entries.extend(text_samples());
    entries.extend(image_samples());
    entries.extend(table_samples());
    entries.extend(chart_samples());
    entries
}

fn text_samples() -> Vec<SeedEntry> {
    let text_data = vec![
        ("headers", "Executive Summary Report"),
        ("headers", "Quarterly Performance Overview"),
        ("headers", "Annual Business Review"),
        (
            "content",
            "Our company achieved exceptional growth this quarter with a 25% increase in revenue.",
        ),
        (
            "content",
            "Key performance indicators show strong progress across all business segments.",
        ),
        (
            "content",
            "Strategic initiatives have resulted in improved operational efficiency and customer satisfaction.",
        ),
        (
            "insights",
            "• Sales exceeded targets by 15% due to strong market demand\n\
             • Customer retention improved by 8% through enhanced service quality\n\
             • New product launches contributed significantly to revenue growth",
        ),
    ];

    text_data
        .into_iter()
        .map(|(category, text)| SeedEntry::new(TEXT, category, json!({ "text": text })))
        .collect()
}

fn image_samples() -> Vec<SeedEntry> {
    let image_data = vec![
        (
            "charts",
            "https://via.placeholder.com/800x400/4F46E5/FFFFFF?text=Q4+Revenue+Chart",
            "Quarterly revenue performance chart",
            800,
            400,
        ),
        (
            "infographics",
            "https://via.placeholder.com/600x800/059669/FFFFFF?text=Growth+Metrics+Infographic",
            "Company growth metrics infographic",
            600,
            800,
        ),
        (
            "logos",
            "https://via.placeholder.com/400x200/DC2626/FFFFFF?text=Company+Logo",
            "Company logo and branding",
            400,
            200,
        ),
        (
            "diagrams",
            "https://via.placeholder.com/700x500/7C3AED/FFFFFF?text=Process+Flow+Diagram",
            "Business process flow diagram",
            700,
            500,
        ),
        (
            "mockups",
            "https://via.placeholder.com/800x600/EA580C/FFFFFF?text=Product+Mockup",
            "Product design mockup",
            800,
            600,
        ),
    ];

    image_data
        .into_iter()
        .map(|(category, src, alt, width, height)| {
            SeedEntry::new(
                IMAGE,
                category,
                json!({ "src": src, "alt": alt, "width": width, "height": height }),
            )
        })
        .collect()
}

fn table_samples() -> Vec<SeedEntry> {
    vec![
        SeedEntry::new(
            TABLE,
            "sales",
            json!({
                "headers": ["Month", "Revenue", "Growth %", "Target"],
                "rows": [
                    ["January", "$125,000", "15%", "$120,000"],
                    ["February", "$142,000", "22%", "$130,000"],
                    ["March", "$158,000", "18%", "$140,000"],
                    ["April", "$175,000", "28%", "$150,000"]
                ]
            }),
        ),
        SeedEntry::new(
            TABLE,
            "employees",
            json!({
                "headers": ["Department", "Employees", "New Hires", "Retention %"],
                "rows": [
                    ["Engineering", "45", "8", "94%"],
                    ["Sales", "32", "5", "91%"],
                    ["Marketing", "18", "3", "96%"],
                    ["Support", "25", "4", "89%"]
                ]
            }),
        ),
        SeedEntry::new(
            TABLE,
            "budget",
            json!({
                "headers": ["Department", "Budget", "Actual", "Variance"],
                "rows": [
                    ["Marketing", "$50,000", "$48,500", "-$1,500"],
                    ["Sales", "$75,000", "$78,200", "+$3,200"],
                    ["Operations", "$60,000", "$62,100", "+$2,100"],
                    ["R&D", "$40,000", "$39,800", "-$200"]
                ]
            }),
        ),
    ]
}

fn chart_samples() -> Vec<SeedEntry> {
    let chart_data: Vec<(&str, &str, &str, Vec<(&str, i64)>)> = vec![
        (
            "revenue",
            "bar",
            "Monthly Revenue",
            vec![
                ("Jan", 125000),
                ("Feb", 142000),
                ("Mar", 158000),
                ("Apr", 175000),
                ("May", 192000),
                ("Jun", 208000),
            ],
        ),
        (
            "departments",
            "pie",
            "Employee Distribution",
            vec![
                ("Engineering", 45),
                ("Sales", 32),
                ("Marketing", 18),
                ("Support", 25),
            ],
        ),
        (
            "growth",
            "line",
            "Quarterly Growth",
            vec![("Q1", 15), ("Q2", 22), ("Q3", 18), ("Q4", 28)],
        ),
    ];

    chart_data
        .into_iter()
        .map(|(category, chart_type, title, points)| {
            let points: Vec<Value> = points
                .into_iter()
                .map(|(name, value)| json!({ "name": name, "value": value }))
                .collect();

            SeedEntry::new(
                CHART,
                category,
                json!({ "type": chart_type, "title": title, "data": points }),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(data_type: &str) -> usize {
        catalog()
            .iter()
            .filter(|entry| entry.data_type == data_type)
            .count()
    }

    #[test]
    fn test_catalog_shape() {
        assert_eq!(catalog().len(), 18);
        assert_eq!(count(TEXT), 7);
        assert_eq!(count(IMAGE), 5);
        assert_eq!(count(TABLE), 3);
        assert_eq!(count(CHART), 3);
    }

    #[test]
    fn test_every_payload_is_an_object() {
        assert!(catalog().iter().all(|entry| entry.data.is_object()));
    }

    #[test]
    fn test_tables_have_header_and_four_rows() {
        for entry in catalog().iter().filter(|e| e.data_type == TABLE) {
            assert_eq!(entry.data["headers"].as_array().unwrap().len(), 4);
            let rows = entry.data["rows"].as_array().unwrap();
            assert_eq!(rows.len(), 4);
            assert!(rows
                .iter()
                .all(|row| row.as_array().unwrap().iter().all(Value::is_string)));
        }
    }

    #[test]
    fn test_charts_keep_point_order() {
        let revenue = catalog()
            .into_iter()
            .find(|e| e.data_type == CHART && e.category == "revenue")
            .unwrap();

        assert_eq!(revenue.data["type"], "bar");
        assert_eq!(revenue.data["data"][0]["name"], "Jan");
        assert_eq!(revenue.data["data"][5]["value"], 208000);
    }

    #[test]
    fn test_image_categories() {
        let categories: Vec<&str> = catalog()
            .iter()
            .filter(|e| e.data_type == IMAGE)
            .map(|e| e.category)
            .collect();

        assert_eq!(
            categories,
            vec!["charts", "infographics", "logos", "diagrams", "mockups"]
        );
    }
}
