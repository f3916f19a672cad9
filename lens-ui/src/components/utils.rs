//! Utility functions for UI components

/// Format file size in human-readable form
pub fn format_file_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let size = bytes as f64;
    if size < KB {
        format!("{} B", bytes)
    } else if size < KB * KB {
        format!("{:.1} KB", size / KB)
    } else if size < KB * KB * KB {
        format!("{:.1} MB", size / (KB * KB))
    } else {
        format!("{:.1} GB", size / (KB * KB * KB))
    }
}

/// Classes for the drop zone border and background
pub fn drop_zone_class(drag_highlight: bool) -> &'static str {
    if drag_highlight {
        "border border-dashed border-blue-600 bg-[#F0F8FF]"
    } else {
        "border border-solid border-gray-400 bg-transparent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_size_units() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn drop_zone_reflects_highlight() {
        assert!(drop_zone_class(true).contains("border-dashed"));
        assert!(drop_zone_class(true).contains("bg-[#F0F8FF]"));
        assert!(drop_zone_class(false).contains("border-solid"));
        assert!(!drop_zone_class(false).contains("border-dashed"));
    }
}
