use serde::{Deserialize, Serialize};

/// NewType wrapper for product identifiers.
///
/// Ids come from the hosted database and key every client-side collection
/// (cart lines, bookmarks, compare set), so mixing them up with other
/// numeric fields is worth preventing at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A numeric specification expressed as an optional min/typ/max triple.
///
/// Reused across voltage, current, frequency and temperature dimensions.
/// A missing field means "not declared by the datasheet", never zero; the
/// filter engine relies on that distinction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpecRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl SpecRange {
    pub fn typical(typ: f64) -> Self {
        Self {
            typ: Some(typ),
            ..Default::default()
        }
    }

    pub fn span(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Default::default()
        }
    }

    /// True when no bound at all is declared.
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none() && self.typ.is_none()
    }
}

/// Electrical/physical/control properties of a product.
///
/// The hosted database stores these as a loosely-typed nested record;
/// unknown fields are dropped on deserialize and every known field is
/// optional because coverage varies per datasheet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Specifications {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_voltage: Option<SpecRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_voltage: Option<SpecRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_current: Option<SpecRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switching_frequency: Option<SpecRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_temperature: Option<SpecRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mounting_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_switch: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thermal_pad: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topology: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimming_method: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication_interface: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pwm_resolution: Option<String>,
}

/// Manufacturer reference embedded in a product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: i64,
    pub name: String,
}

/// A `{id, name, description}` reference record (manufacturers,
/// categories, applications) used for filter option lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// One catalog product as fetched from the hosted database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_number: Option<String>,
    pub manufacturer: Manufacturer,
    #[serde(default)]
    pub specifications: Specifications,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<ProductDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ProductImage>,
}

impl Product {
    /// First image URL, used as the thumbnail across cart and compare views.
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(|image| image.url.as_str())
    }
}
