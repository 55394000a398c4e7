use colored::Colorize;
use modelfleet_platform::{Endpoint, InferencePlatform};

pub async fn handle(platform: &dyn InferencePlatform, region: &str) -> anyhow::Result<()> {
    let endpoints = list_and_report(platform, region).await?;
    if endpoints.is_empty() {
        println!("{}", format!("No endpoints in {region}.").yellow());
    }
    Ok(())
}

/// Fetch a fresh endpoint listing for the region and print it with
/// nested deployed-model details. Returns the snapshot for selection.
pub async fn list_and_report(
    platform: &dyn InferencePlatform,
    region: &str,
) -> anyhow::Result<Vec<Endpoint>> {
    let endpoints = platform.list_endpoints(region).await?;

    println!();
    println!(
        "{}",
        format!("Endpoints in {} ({}):", region, endpoints.len()).bold()
    );
    for (index, endpoint) in endpoints.iter().enumerate() {
        println!(
            "  {}. {} (id {})",
            index,
            endpoint.display_name.cyan(),
            endpoint.id()
        );
        if endpoint.deployed_models.is_empty() {
            println!("     (no deployed models)");
        }
        for (model_index, deployed) in endpoint.deployed_models.iter().enumerate() {
            println!(
                "     {}. {} (model {}, deployment {})",
                model_index,
                deployed.display_name.cyan(),
                deployed.model_id(),
                deployed.id
            );
        }
    }

    Ok(endpoints)
}
