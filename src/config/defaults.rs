//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn brand() -> String {
        "Cafe Latte Co.".into()
    }

    pub fn url() -> Option<String> {
        None
    }

    pub fn base_path() -> String {
        "./".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn data() -> PathBuf {
        "src/data".into()
    }

    pub fn output() -> PathBuf {
        ".".into()
    }

    pub fn images() -> PathBuf {
        "assets/images".into()
    }

    pub mod sitemap {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "sitemap.xml".into()
        }
    }
}
