symbolic_enum! {
    #[derive(Default)]
    pub enum TimeType {
        #[default]
        Single => "Single",
        HyperSlab => "HyperSlab",
        List => "List",
        Range => "Range",
    }
}

/// Options of a `Time` element. `value` is required when `time_type` is
/// `Single` and ignored otherwise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeAttribs {
    pub time_type: TimeType,
    pub value: Option<f64>,
}

impl TimeAttribs {
    /// a single time value
    pub fn single(value: f64) -> Self {
        Self {
            time_type: TimeType::Single,
            value: Some(value),
        }
    }
}
