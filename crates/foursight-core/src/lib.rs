#![deny(warnings)]
pub mod guess;
pub mod model;
pub mod snapshot;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "foursight"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::AppInfo;

    #[test]
    fn exposes_static_metadata() {
        assert_eq!(AppInfo::name(), "foursight");
        assert!(!AppInfo::version().is_empty());
    }
}
