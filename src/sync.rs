//! Sync pipeline: local zone files -> remote zones.

use std::fs;
use std::path::Path;

use log::info;

use crate::core::provider::DnsProvider;
use crate::core::reconcile;
use crate::core::zonefile;
use crate::error::Error;

/// Reconciles every zone file in the directory against the provider, one
/// zone at a time. Under `dry_run` the plan is only reported.
pub async fn run(provider: &dyn DnsProvider, zones_dir: &Path, dry_run: bool) -> Result<(), Error> {
    let entries = fs::read_dir(zones_dir).map_err(|e| Error::Io(e.to_string()))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::Io(e.to_string()))?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name.starts_with('.') {
            continue;
        }
        sync_zone(provider, &entry.path(), &file_name.to_lowercase(), dry_run).await?;
    }
    Ok(())
}

async fn sync_zone(
    provider: &dyn DnsProvider,
    path: &Path,
    zone_name: &str,
    dry_run: bool,
) -> Result<(), Error> {
    let zone = match provider.find_zone(zone_name).await? {
        Some(zone) => zone,
        None if dry_run => {
            info!("dry-run: not creating zone {zone_name}");
            return Ok(());
        }
        None => provider.create_zone(zone_name).await?,
    };

    let remote = provider.list_records(&zone.id).await?;
    let input = fs::read_to_string(path).map_err(|e| Error::Io(e.to_string()))?;
    let local = zonefile::parse_zone_file(&input)
        .map_err(|e| Error::ZoneFile(format!("{}: {e}", path.display())))?;

    let plan = reconcile::diff(local, remote);
    if plan.is_empty() {
        info!("{zone_name}: already in sync");
        return Ok(());
    }

    for record in &plan.deletes {
        if dry_run {
            info!("dry-run: not deleting record {} {}", record.name, record.rtype);
            continue;
        }
        provider.delete_record(&zone.id, &record.id).await?;
        info!("{zone_name}: deleted {} {}", record.name, record.rtype);
    }

    for record in &plan.creates {
        if dry_run {
            info!(
                "dry-run: not sending record {} {}",
                record.name,
                record.data.type_name()
            );
            continue;
        }
        provider.create_record(&zone.id, record).await?;
        info!(
            "{zone_name}: created {} {}",
            record.name,
            record.data.type_name()
        );
    }

    Ok(())
}
