use wrk_stats::Variant;

pub struct PlotFmt;

impl PlotFmt {
    // legend used when comparing where services run
    pub fn placement_name(variant: Variant) -> &'static str {
        match variant {
            Variant::Mono => "Local",
            Variant::Micr => "Network",
        }
    }

    // legend used when comparing how the application is split
    pub fn architecture_name(variant: Variant) -> &'static str {
        match variant {
            Variant::Mono => "Monolith",
            Variant::Micr => "Microservices",
        }
    }

    // matplotlib's default color cycle
    pub fn color(variant: Variant) -> &'static str {
        match variant {
            Variant::Mono => "C0",
            Variant::Micr => "C1",
        }
    }

    // Possible values: {'-', '--', '-.', ':'}
    pub fn linestyle(variant: Variant) -> &'static str {
        match variant {
            Variant::Mono => "-",
            Variant::Micr => "--",
        }
    }

    pub fn marker(_variant: Variant) -> &'static str {
        "x"
    }

    pub fn linewidth(_variant: Variant) -> usize {
        3
    }
}
