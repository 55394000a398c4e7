//! Concurrent multi-region discovery sweep

use crate::client::InferencePlatform;
use crate::types::RegionActivity;
use futures_util::stream::{self, StreamExt};
use std::time::Duration;

/// Tuning knobs for the region sweep.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Maximum number of in-flight probes.
    pub concurrency: usize,

    /// Per-probe deadline, applied independently to each region.
    pub probe_timeout: Duration,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            concurrency: 20,
            probe_timeout: Duration::from_secs(30),
        }
    }
}

/// Probe every region for serving endpoints and rank the results.
///
/// One listing request is issued per region through a bounded worker
/// pool. A probe that errors or exceeds its deadline marks only that
/// region inactive (with the reason recorded on the result); it never
/// aborts the sweep. Results are sorted by descending endpoint count,
/// ties broken alphabetically by region code.
pub async fn scan_regions(
    platform: &dyn InferencePlatform,
    regions: &[&str],
    options: &ScanOptions,
) -> Vec<RegionActivity> {
    let probe_timeout = options.probe_timeout;
    let mut results: Vec<RegionActivity> = stream::iter(regions.iter().copied())
        .map(|region| probe_region(platform, region, probe_timeout))
        .buffer_unordered(options.concurrency.max(1))
        .collect()
        .await;

    results.sort_by(|a, b| {
        b.endpoint_count
            .cmp(&a.endpoint_count)
            .then_with(|| a.region.cmp(&b.region))
    });
    results
}

async fn probe_region(
    platform: &dyn InferencePlatform,
    region: &str,
    probe_timeout: Duration,
) -> RegionActivity {
    match tokio::time::timeout(probe_timeout, platform.list_endpoints(region)).await {
        Ok(Ok(endpoints)) => RegionActivity {
            region: region.to_string(),
            endpoint_count: endpoints.len(),
            error: None,
        },
        Ok(Err(e)) => {
            tracing::debug!("Probe failed for {}: {}", region, e);
            RegionActivity {
                region: region.to_string(),
                endpoint_count: 0,
                error: Some(e.to_string()),
            }
        }
        Err(_) => {
            tracing::debug!("Probe timed out for {} after {:?}", region, probe_timeout);
            RegionActivity {
                region: region.to_string(),
                endpoint_count: 0,
                error: Some(format!("probe timed out after {probe_timeout:?}")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PlatformError, Result};
    use crate::types::{AuthStatus, Endpoint};
    use async_trait::async_trait;
    use std::collections::HashMap;

    enum Probe {
        Count(usize),
        Fail(&'static str),
        Hang,
    }

    struct ProbePlatform {
        probes: HashMap<&'static str, Probe>,
    }

    fn endpoint(region: &str, index: usize) -> Endpoint {
        Endpoint {
            name: format!("projects/demo/locations/{region}/endpoints/{index}"),
            display_name: format!("{region}-endpoint-{index}"),
            deployed_models: vec![],
        }
    }

    #[async_trait]
    impl InferencePlatform for ProbePlatform {
        fn project(&self) -> &str {
            "demo"
        }

        async fn check_auth(&self) -> Result<AuthStatus> {
            Ok(AuthStatus::ok("tester@demo"))
        }

        async fn list_endpoints(&self, region: &str) -> Result<Vec<Endpoint>> {
            match self.probes.get(region) {
                Some(Probe::Count(n)) => Ok((0..*n).map(|i| endpoint(region, i)).collect()),
                Some(Probe::Fail(msg)) => Err(PlatformError::Api(msg.to_string())),
                Some(Probe::Hang) => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(vec![])
                }
                None => Ok(vec![]),
            }
        }

        async fn undeploy_model(&self, _: &str, _: &str, _: &str) -> Result<()> {
            Err(PlatformError::Api("not supported by this mock".to_string()))
        }

        async fn delete_model(&self, _: &str, _: &str) -> Result<()> {
            Err(PlatformError::Api("not supported by this mock".to_string()))
        }
    }

    #[tokio::test]
    async fn test_active_regions_with_counts() {
        let platform = ProbePlatform {
            probes: HashMap::from([
                ("us-west1", Probe::Count(1)),
                ("us-central1", Probe::Count(2)),
                ("europe-west1", Probe::Count(0)),
            ]),
        };

        let results = scan_regions(
            &platform,
            &["us-west1", "us-central1", "europe-west1"],
            &ScanOptions::default(),
        )
        .await;

        let active: Vec<_> = results.iter().filter(|r| r.is_active()).collect();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].region, "us-central1");
        assert_eq!(active[0].endpoint_count, 2);
        assert_eq!(active[1].region, "us-west1");
        assert_eq!(active[1].endpoint_count, 1);
    }

    #[tokio::test]
    async fn test_sort_descending_count_then_alphabetical() {
        let platform = ProbePlatform {
            probes: HashMap::from([
                ("a", Probe::Count(3)),
                ("b", Probe::Count(5)),
                ("c", Probe::Count(3)),
            ]),
        };

        let results = scan_regions(&platform, &["a", "b", "c"], &ScanOptions::default()).await;

        let order: Vec<(&str, usize)> = results
            .iter()
            .map(|r| (r.region.as_str(), r.endpoint_count))
            .collect();
        assert_eq!(order, vec![("b", 5), ("a", 3), ("c", 3)]);
    }

    #[tokio::test]
    async fn test_probe_failure_does_not_abort_sweep() {
        let platform = ProbePlatform {
            probes: HashMap::from([
                ("us-west1", Probe::Count(4)),
                ("asia-east1", Probe::Fail("permission denied")),
                ("us-east1", Probe::Count(1)),
            ]),
        };

        let results = scan_regions(
            &platform,
            &["us-west1", "asia-east1", "us-east1"],
            &ScanOptions::default(),
        )
        .await;

        assert_eq!(results.len(), 3);
        let failed = results.iter().find(|r| r.region == "asia-east1").unwrap();
        assert!(!failed.is_active());
        assert!(failed.error.as_deref().unwrap().contains("permission denied"));

        let healthy = results.iter().find(|r| r.region == "us-west1").unwrap();
        assert_eq!(healthy.endpoint_count, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_probe_timeout_marks_region_inactive() {
        let platform = ProbePlatform {
            probes: HashMap::from([
                ("us-west1", Probe::Count(2)),
                ("me-west1", Probe::Hang),
            ]),
        };

        let options = ScanOptions {
            concurrency: 20,
            probe_timeout: Duration::from_secs(30),
        };
        let results = scan_regions(&platform, &["us-west1", "me-west1"], &options).await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].region, "us-west1");
        assert_eq!(results[0].endpoint_count, 2);

        let timed_out = &results[1];
        assert_eq!(timed_out.region, "me-west1");
        assert!(!timed_out.is_active());
        assert!(timed_out.error.as_deref().unwrap().contains("timed out"));
    }

    #[tokio::test]
    async fn test_concurrency_floor_of_one() {
        let platform = ProbePlatform {
            probes: HashMap::from([("us-west1", Probe::Count(1))]),
        };
        let options = ScanOptions {
            concurrency: 0,
            probe_timeout: Duration::from_secs(30),
        };

        let results = scan_regions(&platform, &["us-west1"], &options).await;
        assert_eq!(results[0].endpoint_count, 1);
    }
}
