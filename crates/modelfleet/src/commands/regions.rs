use colored::Colorize;
use modelfleet_platform::{
    InferencePlatform, RegionActivity, SERVING_REGIONS, ScanOptions, scan_regions,
};

pub async fn handle(platform: &dyn InferencePlatform, options: &ScanOptions) -> anyhow::Result<()> {
    let active = scan_and_report(platform, options).await?;
    if active.is_empty() {
        println!(
            "{}",
            "No regions with serving endpoints found.".yellow()
        );
    }
    Ok(())
}

/// Run the region sweep and print the ranked table. Returns the active
/// regions in ranked order (descending endpoint count, then name).
pub async fn scan_and_report(
    platform: &dyn InferencePlatform,
    options: &ScanOptions,
) -> anyhow::Result<Vec<RegionActivity>> {
    println!(
        "{}",
        format!(
            "Scanning {} regions for endpoints (project: {})...",
            SERVING_REGIONS.len(),
            platform.project()
        )
        .blue()
        .bold()
    );

    let results = scan_regions(platform, SERVING_REGIONS, options).await;

    // Probe failures classify as inactive; keep the reasons visible
    // under RUST_LOG=debug without cluttering the table.
    for result in results.iter().filter(|r| r.error.is_some()) {
        tracing::debug!(
            "{}: probe failed: {}",
            result.region,
            result.error.as_deref().unwrap_or_default()
        );
    }

    let active: Vec<RegionActivity> = results.into_iter().filter(|r| r.is_active()).collect();

    println!();
    println!("{}", format!("Active regions ({}):", active.len()).bold());
    for (index, activity) in active.iter().enumerate() {
        println!(
            "  {}. {} ({} endpoint{})",
            index,
            activity.region.cyan(),
            activity.endpoint_count,
            if activity.endpoint_count == 1 { "" } else { "s" }
        );
    }

    Ok(active)
}
