use super::AppContext;
use crate::output::Output;
use blades_core::{clock_size_options, clock_to_data_uri};
use blades_models::ClockSpec;
use blades_sources::{assets_from_config, http_assets_from_config, AssetFetcher};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde_json::json;

pub fn run_clock_options(
    ctx: &AppContext,
    sizes: Option<Vec<u32>>,
    default_size: Option<u32>,
    current: Option<u32>,
    output: &Output,
) -> Result<()> {
    let sizes = sizes.unwrap_or_else(|| ctx.config.clocks.sizes.clone());
    let default_size = default_size.unwrap_or(ctx.config.clocks.default_size);

    let html = clock_size_options(&sizes, default_size, current);
    output.result(&html, json!({ "html": html }));
    Ok(())
}

/// Configured fetcher, or the HTTP one when `http` is requested
fn select_fetcher(ctx: &AppContext, http: bool) -> Result<Box<dyn AssetFetcher>> {
    if !http {
        return Ok(assets_from_config(&ctx.config, &ctx.paths));
    }
    let assets = http_assets_from_config(&ctx.config)
        .ok_or_else(|| eyre!("--http requires assets.base_url to be set in the configuration"))?;
    Ok(Box::new(assets))
}

pub async fn run_clock_uri(
    ctx: &AppContext,
    kind: u32,
    value: u32,
    fill: Option<String>,
    http: bool,
    output: &Output,
) -> Result<()> {
    let fill = fill.unwrap_or_else(|| ctx.config.clocks.fill_color.clone());
    let fetcher = select_fetcher(ctx, http)?;
    tracing::debug!("Rendering clock {}-{} with fill {}", kind, value, fill);

    let uri = clock_to_data_uri(fetcher.as_ref(), &ctx.config.assets.clock_root, ClockSpec::new(kind, value), &fill).await?;
    output.result(&uri, json!({ "kind": kind, "value": value, "fill": fill, "uri": uri }));
    Ok(())
}
