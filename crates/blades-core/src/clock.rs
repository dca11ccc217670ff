//! Progress clock helpers: size selector options and recoloured SVG data URIs.

use blades_models::ClockSpec;
use blades_sources::{AssetFetcher, SourceError};
use thiserror::Error;
use tracing::{debug, warn};

/// Placeholder colour in the stock clock SVGs
const FILL_PLACEHOLDER: &str = "var(--fill_color_default)";
const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml;charset=utf-8,";

#[derive(Debug, Error)]
pub enum ClockError {
    #[error("invalid clock: {value} of {kind} segments")]
    InvalidClock { kind: u32, value: u32 },

    #[error("failed to fetch clock image '{key}': {source}")]
    Fetch {
        key: String,
        #[source]
        source: SourceError,
    },

    #[error("clock image '{key}' is not valid UTF-8")]
    Encoding {
        key: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// `<option>` elements for a clock size selector.
///
/// The option equal to `current_size` is selected. When there is no current
/// size (absent or zero) the option equal to `default_size` is selected too.
pub fn clock_size_options(sizes: &[u32], default_size: u32, current_size: Option<u32>) -> String {
    let no_current = current_size.unwrap_or(0) == 0;

    sizes
        .iter()
        .map(|&size| {
            let selected = (no_current && size == default_size) || Some(size) == current_size;
            format!("<option value=\"{}\"{}>{}</option>", size, if selected { " selected" } else { "" }, size)
        })
        .collect()
}

/// File name of the SVG for `spec`
pub fn clock_asset_key(spec: ClockSpec) -> String {
    format!("Progress Clock {}-{}.svg", spec.kind, spec.value)
}

/// Asset path of the SVG for `spec` under `root`
pub fn clock_asset_path(root: &str, spec: ClockSpec) -> String {
    let root = root.trim_end_matches('/');
    if root.is_empty() {
        return clock_asset_key(spec);
    }
    format!("{}/{}", root, clock_asset_key(spec))
}

/// Substitute the first fill placeholder with `fill_color`
pub fn recolor_svg(svg: &str, fill_color: &str) -> String {
    svg.replacen(FILL_PLACEHOLDER, fill_color, 1)
}

pub fn svg_data_uri(svg: &str) -> String {
    format!("{}{}", SVG_DATA_URI_PREFIX, urlencoding::encode(svg))
}

/// Fetch the clock SVG for `spec` and return it recoloured as a data URI
pub async fn clock_to_data_uri(
    fetcher: &dyn AssetFetcher,
    root: &str,
    spec: ClockSpec,
    fill_color: &str,
) -> Result<String, ClockError> {
    if !spec.is_valid() {
        return Err(ClockError::InvalidClock { kind: spec.kind, value: spec.value });
    }

    let key = clock_asset_path(root, spec);
    debug!("Fetching clock image {} via {}", key, fetcher.fetcher_name());

    let bytes = fetcher
        .fetch(&key)
        .await
        .map_err(|source| ClockError::Fetch { key: key.clone(), source })?;
    let svg = String::from_utf8(bytes).map_err(|source| ClockError::Encoding { key: key.clone(), source })?;

    if !svg.contains(FILL_PLACEHOLDER) {
        warn!("Clock image {} has no fill placeholder; colour left unchanged", key);
    }

    Ok(svg_data_uri(&recolor_svg(&svg, fill_color)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blades_sources::MemoryAssets;

    const ROOT: &str = "systems/blades-in-the-dark/styles/assets/progressclocks-svg";

    #[test]
    fn test_options_select_current() {
        assert_eq!(
            clock_size_options(&[4, 6, 8], 4, Some(6)),
            "<option value=\"4\">4</option><option value=\"6\" selected>6</option><option value=\"8\">8</option>"
        );
    }

    #[test]
    fn test_options_fall_back_to_default() {
        let html = clock_size_options(&[4, 6, 8], 8, None);
        assert_eq!(html, "<option value=\"4\">4</option><option value=\"6\">6</option><option value=\"8\" selected>8</option>");
        assert_eq!(clock_size_options(&[4, 6, 8], 8, Some(0)), html);
    }

    #[test]
    fn test_options_current_not_listed() {
        let html = clock_size_options(&[4, 6], 4, Some(12));
        assert!(!html.contains("selected"));
    }

    #[test]
    fn test_options_zero_current_selects_zero_and_default() {
        assert_eq!(
            clock_size_options(&[0, 4], 4, Some(0)),
            "<option value=\"0\" selected>0</option><option value=\"4\" selected>4</option>"
        );
        assert_eq!(
            clock_size_options(&[0, 4], 4, None),
            "<option value=\"0\">0</option><option value=\"4\" selected>4</option>"
        );
    }

    #[test]
    fn test_options_empty_sizes() {
        assert_eq!(clock_size_options(&[], 4, None), "");
    }

    #[test]
    fn test_asset_path() {
        assert_eq!(
            clock_asset_path(ROOT, ClockSpec::new(4, 2)),
            "systems/blades-in-the-dark/styles/assets/progressclocks-svg/Progress Clock 4-2.svg"
        );
        assert_eq!(clock_asset_path("clocks/", ClockSpec::new(8, 0)), "clocks/Progress Clock 8-0.svg");
        assert_eq!(clock_asset_path("", ClockSpec::new(6, 6)), "Progress Clock 6-6.svg");
    }

    #[test]
    fn test_recolor_replaces_first_placeholder_only() {
        let svg = "<path fill=\"var(--fill_color_default)\"/><path fill=\"var(--fill_color_default)\"/>";
        assert_eq!(
            recolor_svg(svg, "#ff0000"),
            "<path fill=\"#ff0000\"/><path fill=\"var(--fill_color_default)\"/>"
        );
        assert_eq!(recolor_svg("<svg/>", "red"), "<svg/>");
    }

    #[test]
    fn test_svg_data_uri_encoding() {
        assert_eq!(
            svg_data_uri("<svg fill=\"#000\"/>"),
            "data:image/svg+xml;charset=utf-8,%3Csvg%20fill%3D%22%23000%22%2F%3E"
        );
    }

    #[tokio::test]
    async fn test_clock_to_data_uri() {
        let assets = MemoryAssets::new().with_asset(
            format!("{}/Progress Clock 4-1.svg", ROOT),
            "<circle fill=\"var(--fill_color_default)\"/>",
        );
        let uri = clock_to_data_uri(&assets, ROOT, ClockSpec::new(4, 1), "blue").await.unwrap();
        assert_eq!(uri, "data:image/svg+xml;charset=utf-8,%3Ccircle%20fill%3D%22blue%22%2F%3E");
    }

    #[tokio::test]
    async fn test_clock_to_data_uri_missing_asset() {
        let assets = MemoryAssets::new();
        let err = clock_to_data_uri(&assets, ROOT, ClockSpec::new(6, 3), "blue").await.unwrap_err();
        match err {
            ClockError::Fetch { key, source } => {
                assert!(key.ends_with("Progress Clock 6-3.svg"));
                assert!(source.is_not_found());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_clock_to_data_uri_rejects_invalid_clock() {
        let assets = MemoryAssets::new();
        let err = clock_to_data_uri(&assets, ROOT, ClockSpec::new(4, 5), "blue").await.unwrap_err();
        assert!(matches!(err, ClockError::InvalidClock { kind: 4, value: 5 }));
    }

    #[tokio::test]
    async fn test_clock_to_data_uri_rejects_binary() {
        let assets = MemoryAssets::new().with_asset("Progress Clock 4-0.svg", vec![0xffu8, 0xfe, 0x00]);
        let err = clock_to_data_uri(&assets, "", ClockSpec::new(4, 0), "blue").await.unwrap_err();
        assert!(matches!(err, ClockError::Encoding { .. }));
    }
}
