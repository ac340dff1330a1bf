// Global static logger handle for flexi_logger; kept alive for the process
static LOGGER_HANDLE: std::sync::OnceLock<std::sync::Mutex<flexi_logger::LoggerHandle>> =
    std::sync::OnceLock::new();

/// Initialize logging via flexi_logger
///
/// `log_format` selects between the plain text format, the extended format
/// with target info, and compact JSON. Color applies to the text formats
/// only.
pub fn init_logging(
    log_level: Option<&str>,
    log_format: Option<&str>,
    log_file: Option<&str>,
    color_enabled: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    use flexi_logger::{FileSpec, Logger};

    let level_str = log_level.unwrap_or("info");
    let format_type = log_format.map_or("text", |f| f);

    let mut logger = Logger::try_with_str(level_str)?;

    // Set format based on format type and color support
    match format_type {
        "json" => {
            logger = logger.format(json_format);
        }
        "ext" => {
            // Extended format with target info
            if color_enabled {
                logger = logger.format(extended_color_format);
            } else {
                logger = logger.format(extended_format);
            }
        }
        _ => {
            // Default "text" format without target info
            if color_enabled {
                logger = logger.format(simple_color_format);
            } else {
                logger = logger.format(simple_format);
            }
        }
    }

    // Configure file output if requested
    if let Some(file_path) = log_file {
        let file_spec = FileSpec::try_from(std::path::Path::new(file_path))?;
        logger = logger.log_to_file(file_spec);
    }

    // Start the logger and store the handle
    let handle = logger.start()?;
    let _ = LOGGER_HANDLE.set(std::sync::Mutex::new(handle));

    Ok(())
}

fn level_abbreviation(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    }
}

// Simple text format without target info
fn simple_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    // Format: "YYYY-MM-DD HH:mm:ss.ffff INF message"
    write!(
        w,
        "{} {} {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_abbreviation(record.level()),
        record.args()
    )
}

// Simple color format without target info
fn simple_color_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use colored::*;

    let level_colored = match record.level() {
        log::Level::Error => "ERR".red().bold(),
        log::Level::Warn => "WRN".yellow(),
        log::Level::Info => "INF".green(),
        log::Level::Debug => "DBG".blue(),
        log::Level::Trace => "TRC".magenta(),
    };

    // Format: "YYYY-MM-DD HH:mm:ss.ffff INF message" with colors
    write!(
        w,
        "{} {} {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f").to_string().dimmed(),
        level_colored,
        record.args()
    )
}

// Extended format with target info, no colors
fn extended_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    // Format target as path-like: module::submodule -> module/submodule.rs
    let target_formatted = format_target_as_path(record.target(), record.line());

    // Format: "YYYY-MM-DD HH:mm:ss.ffff INF message (conformance/checks.rs:42)"
    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_abbreviation(record.level()),
        record.args(),
        target_formatted
    )
}

// Extended color format with target info and colors
fn extended_color_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use colored::*;

    let level_colored = match record.level() {
        log::Level::Error => "ERR".red().bold(),
        log::Level::Warn => "WRN".yellow(),
        log::Level::Info => "INF".green(),
        log::Level::Debug => "DBG".blue(),
        log::Level::Trace => "TRC".magenta(),
    };

    let target_formatted = format_target_as_path(record.target(), record.line());

    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f").to_string().dimmed(),
        level_colored,
        record.args(),
        target_formatted.dimmed()
    )
}

// JSON format function with improved field ordering and target formatting
fn json_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use serde_json::{json, to_string};

    let target_formatted = format_target_as_path(record.target(), record.line());

    // Ordered: timestamp, level, message, metadata
    let json_obj = json!({
        "timestamp": now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        "level": level_abbreviation(record.level()),
        "message": record.args().to_string(),
        "target": target_formatted
    });

    // Use to_string to ensure compact JSON output - NO newlines added by us
    match to_string(&json_obj) {
        Ok(json_string) => {
            w.write_all(json_string.as_bytes())?;
            Ok(())
        }
        Err(_) => {
            w.write_all(b"{\"error\":\"Failed to serialize log message\"}")?;
            Ok(())
        }
    }
}

// Helper function to format target as file path with line number
fn format_target_as_path(target: &str, line: Option<u32>) -> String {
    // Convert plugin_conform::app::startup -> app/startup.rs
    let path_like = if let Some(without_prefix) = target.strip_prefix("plugin_conform::") {
        without_prefix.replace("::", "/") + ".rs"
    } else {
        // Handle other targets (external crates, etc.)
        target.replace("::", "/")
    };

    // Add line number if available
    if let Some(line_num) = line {
        format!("{}:{}", path_like, line_num)
    } else {
        path_like
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_target_as_path() {
        assert_eq!(
            format_target_as_path("plugin_conform::app::startup", Some(42)),
            "app/startup.rs:42"
        );
        assert_eq!(
            format_target_as_path("plugin_conform::conformance::checks", None),
            "conformance/checks.rs"
        );
        assert_eq!(format_target_as_path("other_crate::module", None), "other_crate/module");
    }

    #[test]
    fn test_simple_format_structure() {
        use flexi_logger::DeferredNow;

        let mut buffer = Vec::new();
        let mut now = DeferredNow::new();

        let record = log::Record::builder()
            .level(log::Level::Info)
            .target("test_target")
            .args(format_args!("Test message"))
            .build();

        simple_format(&mut buffer, &mut now, &record).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("INF Test message"));
        assert!(output.contains(":"));
    }

    #[test]
    fn test_extended_format_includes_target() {
        use flexi_logger::DeferredNow;

        let mut buffer = Vec::new();
        let mut now = DeferredNow::new();

        let record = log::Record::builder()
            .level(log::Level::Warn)
            .target("plugin_conform::registry::discovery")
            .args(format_args!("Discovery warning"))
            .build();

        extended_format(&mut buffer, &mut now, &record).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("WRN Discovery warning"));
        assert!(output.contains("(registry/discovery.rs"));
    }

    #[test]
    fn test_json_format_is_compact_json() {
        use flexi_logger::DeferredNow;

        let mut buffer = Vec::new();
        let mut now = DeferredNow::new();

        let record = log::Record::builder()
            .level(log::Level::Error)
            .target("plugin_conform::conformance::suite")
            .args(format_args!("Check failed"))
            .build();

        json_format(&mut buffer, &mut now, &record).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["level"], "ERR");
        assert_eq!(parsed["message"], "Check failed");
        assert_eq!(parsed["target"], "conformance/suite.rs");
        assert!(!output.contains('\n'));
    }
}
