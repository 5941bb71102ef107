use serde::{Deserialize, Serialize};

/// One of the two report groupings a field can be placed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Transaction,
    Seller,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Transaction, Section::Seller];

    /// Heading of the drop zone bound to this section.
    pub fn title(self) -> &'static str {
        match self {
            Section::Transaction => "Transaction Info",
            Section::Seller => "Seller Info",
        }
    }

    /// Heading of this section's group in the reporting fields palette.
    pub fn palette_heading(self) -> &'static str {
        match self {
            Section::Transaction => "Transaction Reporting Fields",
            Section::Seller => "Seller Reporting Fields",
        }
    }
}

/// A named, labeled data point that can be placed into a report section.
///
/// The whole record travels as the drag payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub label: String,
    pub section: Section,
    #[serde(default)]
    pub default: bool,
}

impl Field {
    pub fn new(name: &str, label: &str, section: Section) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            section,
            default: false,
        }
    }

    /// A permanently present, non-removable seed entry.
    pub fn seed(name: &str, label: &str, section: Section) -> Self {
        Self {
            default: true,
            ..Self::new(name, label, section)
        }
    }
}

/// The fields offered for dragging, in display order.
pub fn catalog() -> Vec<Field> {
    vec![
        Field::new("calendar_year2", "Calendar Year2", Section::Transaction),
        Field::new("fiscal_period", "Fiscal Period", Section::Transaction),
        Field::new("output_metrics", "Output Metrics", Section::Transaction),
        Field::new("developer_country", "Developer Country", Section::Seller),
        Field::new("sap_vendor_id", "SAP Vendor ID", Section::Seller),
        Field::new("developer_taid", "Developer TAID", Section::Seller),
    ]
}

/// The default entry each section starts with.
pub fn seed_for(section: Section) -> Field {
    match section {
        Section::Transaction => Field::seed("transaction_id", "Transaction ID", Section::Transaction),
        Section::Seller => Field::seed("seller_name", "Seller Name", Section::Seller),
    }
}
