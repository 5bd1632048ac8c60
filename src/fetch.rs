//! Fetch pipeline: remote zones -> local zone files.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use log::{info, warn};

use crate::core::provider::DnsProvider;
use crate::core::zonefile;
use crate::error::Error;

/// Writes one zone file per remote zone. Existing files are only replaced
/// when `overwrite` is set; otherwise an existing file aborts the run.
pub async fn run(
    provider: &dyn DnsProvider,
    zones_dir: &Path,
    overwrite: bool,
) -> Result<(), Error> {
    for zone in provider.list_zones().await? {
        let path = zones_dir.join(&zone.name);
        let mut file = open_output(&path, overwrite)
            .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;

        write!(file, "# Zone ID:   {}\n# Zone Name: {}\n\n", zone.id, zone.name)
            .map_err(|e| Error::Io(e.to_string()))?;

        for record in provider.list_records(&zone.id).await? {
            match zonefile::encode_remote(&record) {
                Some(block) => write!(file, "{block}\n\n").map_err(|e| Error::Io(e.to_string()))?,
                None => warn!(
                    "skipping record {} {} ({}): not expressible in the zone-file encoding",
                    record.rtype, record.name, record.id
                ),
            }
        }
        info!("wrote {}", path.display());
    }
    Ok(())
}

fn open_output(path: &Path, overwrite: bool) -> std::io::Result<File> {
    if overwrite {
        File::create(path)
    } else {
        OpenOptions::new().write(true).create_new(true).open(path)
    }
}
