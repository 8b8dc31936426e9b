use crate::catalog::domain::{Product, SpecRange};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One `[min, max]` slider dimension.
///
/// The filter is active only while the selected interval differs from its
/// full bounds; at rest it imposes no constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter {
    bounds: (f64, f64),
    selected: (f64, f64),
}

impl RangeFilter {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            bounds: (min, max),
            selected: (min, max),
        }
    }

    /// Sets the selected interval, ordered and clamped to the bounds.
    pub fn select(&mut self, low: f64, high: f64) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        self.selected = (low.max(self.bounds.0), high.min(self.bounds.1));
    }

    pub fn reset(&mut self) {
        self.selected = self.bounds;
    }

    pub fn is_active(&self) -> bool {
        self.selected != self.bounds
    }

    pub fn selected(&self) -> (f64, f64) {
        self.selected
    }

    pub fn bounds(&self) -> (f64, f64) {
        self.bounds
    }

    /// Tests a product's declared triple against the selected interval.
    ///
    /// Precedence: a declared `typ` value is tested for membership; else a
    /// declared `[min, max]` pair is tested for overlap; else whichever
    /// single bound exists is tested against the corresponding filter
    /// bound. A product with no data for an active dimension cannot
    /// satisfy it.
    pub fn matches(&self, spec: Option<&SpecRange>) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(spec) = spec else {
            return false;
        };
        let (low, high) = self.selected;
        match (spec.typ, spec.min, spec.max) {
            (Some(typ), _, _) => low <= typ && typ <= high,
            (None, Some(min), Some(max)) => min <= high && max >= low,
            (None, Some(min), None) => min >= low,
            (None, None, Some(max)) => max <= high,
            (None, None, None) => false,
        }
    }
}

/// One multi-select checkbox dimension; OR semantics within the selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectFilter {
    selected: BTreeSet<String>,
}

impl SelectFilter {
    /// Adds a value to the selection if absent, removes it if present.
    pub fn toggle(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !self.selected.remove(&value) {
            self.selected.insert(value);
        }
    }

    pub fn reset(&mut self) {
        self.selected.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    /// True when the filter is inactive or the product's single value is
    /// among the selection. `None` fails an active filter.
    pub fn matches_value(&self, value: Option<&str>) -> bool {
        if !self.is_active() {
            return true;
        }
        value.is_some_and(|v| self.selected.contains(v))
    }

    /// True when the filter is inactive or any of the product's values is
    /// among the selection. An empty list fails an active filter.
    pub fn matches_any<'a>(&self, values: impl IntoIterator<Item = &'a str>) -> bool {
        if !self.is_active() {
            return true;
        }
        values.into_iter().any(|v| self.selected.contains(v))
    }
}

/// Observed bounds for every range dimension, used to seed slider
/// defaults from the loaded catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBounds {
    pub input_voltage: (f64, f64),
    pub output_voltage: (f64, f64),
    pub output_current: (f64, f64),
    pub switching_frequency: (f64, f64),
    pub operating_temperature: (f64, f64),
}

impl Default for FilterBounds {
    fn default() -> Self {
        Self {
            input_voltage: (0.0, 100.0),
            output_voltage: (0.0, 100.0),
            output_current: (0.0, 2000.0),
            switching_frequency: (0.0, 2000.0),
            operating_temperature: (-40.0, 125.0),
        }
    }
}

impl FilterBounds {
    /// Derives bounds from the loaded product list, falling back to the
    /// defaults for dimensions no product declares.
    pub fn from_products(products: &[Product]) -> Self {
        let mut bounds = Self::default();
        bounds.input_voltage =
            Self::observed(products, |s| s.input_voltage.as_ref()).unwrap_or(bounds.input_voltage);
        bounds.output_voltage = Self::observed(products, |s| s.output_voltage.as_ref())
            .unwrap_or(bounds.output_voltage);
        bounds.output_current = Self::observed(products, |s| s.output_current.as_ref())
            .unwrap_or(bounds.output_current);
        bounds.switching_frequency = Self::observed(products, |s| s.switching_frequency.as_ref())
            .unwrap_or(bounds.switching_frequency);
        bounds.operating_temperature =
            Self::observed(products, |s| s.operating_temperature.as_ref())
                .unwrap_or(bounds.operating_temperature);
        bounds
    }

    fn observed(
        products: &[Product],
        field: impl Fn(&crate::catalog::domain::Specifications) -> Option<&SpecRange>,
    ) -> Option<(f64, f64)> {
        let mut low = f64::INFINITY;
        let mut high = f64::NEG_INFINITY;
        for product in products {
            if let Some(range) = field(&product.specifications) {
                for value in [range.min, range.typ, range.max].into_iter().flatten() {
                    low = low.min(value);
                    high = high.max(value);
                }
            }
        }
        (low <= high).then_some((low, high))
    }
}

/// The full set of active filter criteria for the catalog list view.
///
/// Products pass with a logical AND across dimensions and a logical OR
/// within each multi-select. Inactive dimensions impose no constraint.
/// The dialog variant edits a clone and commits it atomically by
/// replacing the live value; the inline variant mutates in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub input_voltage: RangeFilter,
    pub output_voltage: RangeFilter,
    pub output_current: RangeFilter,
    pub switching_frequency: RangeFilter,
    pub operating_temperature: RangeFilter,
    pub manufacturers: SelectFilter,
    pub topologies: SelectFilter,
    pub dimming_methods: SelectFilter,
    pub package_types: SelectFilter,
    pub channels: SelectFilter,
    pub communication_interfaces: SelectFilter,
    pub pwm_resolutions: SelectFilter,
    pub internal_switch: Option<bool>,
    pub thermal_pad: Option<bool>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::with_bounds(&FilterBounds::default())
    }
}

impl FilterCriteria {
    pub fn with_bounds(bounds: &FilterBounds) -> Self {
        Self {
            input_voltage: RangeFilter::new(bounds.input_voltage.0, bounds.input_voltage.1),
            output_voltage: RangeFilter::new(bounds.output_voltage.0, bounds.output_voltage.1),
            output_current: RangeFilter::new(bounds.output_current.0, bounds.output_current.1),
            switching_frequency: RangeFilter::new(
                bounds.switching_frequency.0,
                bounds.switching_frequency.1,
            ),
            operating_temperature: RangeFilter::new(
                bounds.operating_temperature.0,
                bounds.operating_temperature.1,
            ),
            manufacturers: SelectFilter::default(),
            topologies: SelectFilter::default(),
            dimming_methods: SelectFilter::default(),
            package_types: SelectFilter::default(),
            channels: SelectFilter::default(),
            communication_interfaces: SelectFilter::default(),
            pwm_resolutions: SelectFilter::default(),
            internal_switch: None,
            thermal_pad: None,
        }
    }

    /// "Clear all": every dimension back to its default/unset value.
    pub fn reset(&mut self) {
        self.input_voltage.reset();
        self.output_voltage.reset();
        self.output_current.reset();
        self.switching_frequency.reset();
        self.operating_temperature.reset();
        self.manufacturers.reset();
        self.topologies.reset();
        self.dimming_methods.reset();
        self.package_types.reset();
        self.channels.reset();
        self.communication_interfaces.reset();
        self.pwm_resolutions.reset();
        self.internal_switch = None;
        self.thermal_pad = None;
    }

    /// Number of dimensions set away from their default, for the filter
    /// badge. Each dimension counts at most once.
    pub fn active_count(&self) -> usize {
        let ranges = [
            &self.input_voltage,
            &self.output_voltage,
            &self.output_current,
            &self.switching_frequency,
            &self.operating_temperature,
        ]
        .iter()
        .filter(|r| r.is_active())
        .count();
        let selects = [
            &self.manufacturers,
            &self.topologies,
            &self.dimming_methods,
            &self.package_types,
            &self.channels,
            &self.communication_interfaces,
            &self.pwm_resolutions,
        ]
        .iter()
        .filter(|s| s.is_active())
        .count();
        let booleans = [self.internal_switch, self.thermal_pad]
            .iter()
            .filter(|b| b.is_some())
            .count();
        ranges + selects + booleans
    }

    /// Whether a single product passes every active dimension.
    pub fn matches(&self, product: &Product) -> bool {
        let specs = &product.specifications;

        self.input_voltage.matches(specs.input_voltage.as_ref())
            && self.output_voltage.matches(specs.output_voltage.as_ref())
            && self.output_current.matches(specs.output_current.as_ref())
            && self
                .switching_frequency
                .matches(specs.switching_frequency.as_ref())
            && self
                .operating_temperature
                .matches(specs.operating_temperature.as_ref())
            && self
                .manufacturers
                .matches_value(Some(product.manufacturer.name.as_str()))
            && self
                .topologies
                .matches_any(specs.topology.iter().map(String::as_str))
            && self
                .dimming_methods
                .matches_any(specs.dimming_method.iter().map(String::as_str))
            && self.package_types.matches_value(specs.package_type.as_deref())
            && self
                .channels
                .matches_value(specs.channels.map(|c| c.to_string()).as_deref())
            && self
                .communication_interfaces
                .matches_value(specs.communication_interface.as_deref())
            && self
                .pwm_resolutions
                .matches_value(specs.pwm_resolution.as_deref())
            && Self::tri_state_matches(self.internal_switch, specs.internal_switch)
            && Self::tri_state_matches(self.thermal_pad, specs.thermal_pad)
    }

    /// An unset tri-state imposes no constraint; a set one requires the
    /// product to declare the same value. Undeclared fails.
    fn tri_state_matches(filter: Option<bool>, value: Option<bool>) -> bool {
        match filter {
            None => true,
            Some(wanted) => value == Some(wanted),
        }
    }
}

/// Summary counts for the "N of M products" readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    pub total: usize,
    pub matched: usize,
    pub percentage: u32,
}

/// Client-side filter engine: a bounded linear scan over the already
/// fetched product list, O(products × active dimensions) per recompute.
pub struct FilterEngine;

impl FilterEngine {
    /// Computes the filtered subset.
    pub fn apply(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
        products
            .iter()
            .filter(|product| criteria.matches(product))
            .cloned()
            .collect()
    }

    /// Computes the "N of M" summary for the current criteria.
    pub fn stats(products: &[Product], criteria: &FilterCriteria) -> FilterStats {
        let total = products.len();
        let matched = products
            .iter()
            .filter(|product| criteria.matches(product))
            .count();
        let percentage = if total > 0 {
            ((matched as f64 / total as f64) * 100.0).round() as u32
        } else {
            0
        };
        FilterStats {
            total,
            matched,
            percentage,
        }
    }

    /// Per-dimension match counts for badge display: how many products
    /// each *active* dimension would admit on its own.
    pub fn dimension_match_counts(
        products: &[Product],
        criteria: &FilterCriteria,
    ) -> Vec<(&'static str, usize)> {
        let mut counts = Vec::new();
        let baseline = FilterCriteria::with_bounds(&FilterBounds {
            input_voltage: criteria.input_voltage.bounds(),
            output_voltage: criteria.output_voltage.bounds(),
            output_current: criteria.output_current.bounds(),
            switching_frequency: criteria.switching_frequency.bounds(),
            operating_temperature: criteria.operating_temperature.bounds(),
        });

        let mut isolate = |label: &'static str, build: &dyn Fn(&mut FilterCriteria)| {
            let mut single = baseline.clone();
            build(&mut single);
            if single.active_count() > 0 {
                let matched = products.iter().filter(|p| single.matches(p)).count();
                counts.push((label, matched));
            }
        };

        isolate("input_voltage", &|c| c.input_voltage = criteria.input_voltage.clone());
        isolate("output_voltage", &|c| c.output_voltage = criteria.output_voltage.clone());
        isolate("output_current", &|c| c.output_current = criteria.output_current.clone());
        isolate("switching_frequency", &|c| {
            c.switching_frequency = criteria.switching_frequency.clone()
        });
        isolate("operating_temperature", &|c| {
            c.operating_temperature = criteria.operating_temperature.clone()
        });
        isolate("manufacturers", &|c| c.manufacturers = criteria.manufacturers.clone());
        isolate("topologies", &|c| c.topologies = criteria.topologies.clone());
        isolate("dimming_methods", &|c| c.dimming_methods = criteria.dimming_methods.clone());
        isolate("package_types", &|c| c.package_types = criteria.package_types.clone());
        isolate("channels", &|c| c.channels = criteria.channels.clone());
        isolate("communication_interfaces", &|c| {
            c.communication_interfaces = criteria.communication_interfaces.clone()
        });
        isolate("pwm_resolutions", &|c| c.pwm_resolutions = criteria.pwm_resolutions.clone());
        isolate("internal_switch", &|c| c.internal_switch = criteria.internal_switch);
        isolate("thermal_pad", &|c| c.thermal_pad = criteria.thermal_pad);

        counts
    }
}
