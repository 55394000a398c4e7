use crate::commands::{endpoints, regions};
use crate::prompt;
use colored::Colorize;
use modelfleet_platform::{
    DeleteOutcome, InferencePlatform, RemovalError, RemovalPolicy, RemovalRequest, ScanOptions,
    execute_removal,
};

/// The full interactive workflow: scan, select, mutate, re-list.
pub async fn handle(
    platform: &dyn InferencePlatform,
    scan: &ScanOptions,
    policy: &RemovalPolicy,
) -> anyhow::Result<()> {
    let auth = platform.check_auth().await?;
    if !auth.authenticated {
        anyhow::bail!(
            "Not authenticated: {}",
            auth.error.unwrap_or_else(|| "unknown reason".to_string())
        );
    }
    if let Some(account) = &auth.account_info {
        println!("Account: {}", account.cyan());
    }

    // Phase 1: discovery
    let active = regions::scan_and_report(platform, scan).await?;
    if active.is_empty() {
        println!("{}", "No regions with serving endpoints found.".yellow());
        return Ok(());
    }

    // Phase 2: selection. The endpoint listing is re-queried fresh
    // after the region pick; the scan counts may already be stale.
    let region_index = prompt::prompt_index("Select region", active.len())?;
    let region = active[region_index].region.clone();

    let endpoint_list = endpoints::list_and_report(platform, &region).await?;
    if endpoint_list.is_empty() {
        println!("{}", format!("No endpoints left in {region}.").yellow());
        return Ok(());
    }

    let endpoint_index = prompt::prompt_index("Select endpoint", endpoint_list.len())?;
    let endpoint = &endpoint_list[endpoint_index];
    if endpoint.deployed_models.is_empty() {
        println!("{}", "Selected endpoint has no deployed models.".yellow());
        return Ok(());
    }

    let model_index =
        prompt::prompt_index("Select deployed model", endpoint.deployed_models.len())?;
    let target = &endpoint.deployed_models[model_index];

    let delete_model = prompt::prompt_yes_no("Delete the model artifact after undeploying?")?;

    println!();
    println!("{}", "About to undeploy:".bold());
    println!("  Region:     {}", region.cyan());
    println!(
        "  Endpoint:   {} (id {})",
        endpoint.display_name.cyan(),
        endpoint.id()
    );
    println!(
        "  Deployment: {} (deployment {}, model {})",
        target.display_name.cyan(),
        target.id,
        target.model_id()
    );
    if delete_model {
        println!(
            "{}",
            "  Warning: the model artifact will be permanently deleted afterwards.".yellow()
        );
    }
    if !prompt::prompt_yes_no("Proceed?")? {
        println!("{}", "Aborted.".yellow());
        return Ok(());
    }

    // Phase 3: mutation
    let request = RemovalRequest {
        region: region.clone(),
        endpoint_name: endpoint.name.clone(),
        deployed_model_id: target.id.clone(),
        model_name: target.model.clone(),
        delete_model,
    };

    println!();
    println!("{}", "Undeploying...".blue());
    if delete_model && !policy.settle_delay.is_zero() {
        println!(
            "(waiting {}s after undeploy before deleting)",
            policy.settle_delay.as_secs()
        );
    }

    match execute_removal(platform, &request, policy).await {
        Ok(outcome) => {
            println!("{}", "✓ Model undeployed".green());
            match outcome.delete {
                Some(DeleteOutcome::Deleted) => println!("{}", "✓ Model deleted".green()),
                Some(DeleteOutcome::AlreadyGone) => {
                    println!("{}", "✓ Model was already deleted".green())
                }
                None => {}
            }
        }
        Err(RemovalError::Undeploy(e)) => {
            anyhow::bail!("Undeploy failed, delete skipped: {e}");
        }
        Err(RemovalError::Delete(e)) => {
            println!("{}", "✓ Model undeployed".green());
            println!("{}", format!("✗ Delete failed: {e}").red());
            println!(
                "{}",
                "Partial success: the model is undeployed but still exists.".yellow()
            );
        }
    }

    // Phase 4: report the endpoint state after the change
    println!();
    println!("{}", "Post-change endpoint state:".bold());
    endpoints::list_and_report(platform, &region).await?;

    Ok(())
}
