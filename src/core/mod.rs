pub mod provider;
pub mod reconcile;
pub mod record;
pub mod zonefile;
