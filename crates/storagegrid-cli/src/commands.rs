//! Sub-commands of `sgctl` and the reports they print.
//!
//! Reports are rendered from the service traits so they can be tested
//! against the mock services.

use std::fmt::Write;

use anyhow::{bail, Result};
use storagegrid_core::models::{BucketStats, Health, TenantUsage};
use storagegrid_core::services::{BucketService, GroupService, HealthService, RegionService, TenantService, UserService};

use crate::format::{format_bytes, format_count, format_optional};

/// Nodes allowed to be down while the grid still counts as operational.
const MAX_UNAVAILABLE_NODES: u32 = 1;

pub const USAGE: &str = "\
Usage: sgctl <command>

Grid commands:
  health                 Grid health summary
  tenants                List tenant accounts
  tenant-usage <id>      Storage usage of a tenant account
  regions                List storage regions

Tenant commands (need STORAGEGRID_ACCOUNT_ID):
  buckets                List buckets
  bucket-usage <name>    Storage usage of a bucket
  users                  List users
  groups                 List groups";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Health,
    Tenants,
    TenantUsage(String),
    Regions,
    Buckets,
    BucketUsage(String),
    Users,
    Groups,
    Help,
}

impl Command {
    /// Parse the arguments following the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let Some(name) = args.first() else {
            return Ok(Command::Help);
        };
        let arg = |what: &str| match args.get(1) {
            Some(value) => Ok(value.clone()),
            None => bail!("{} requires a {} argument", name, what),
        };

        let command = match name.as_str() {
            "health" => Command::Health,
            "tenants" => Command::Tenants,
            "tenant-usage" => Command::TenantUsage(arg("tenant id")?),
            "regions" => Command::Regions,
            "buckets" => Command::Buckets,
            "bucket-usage" => Command::BucketUsage(arg("bucket name")?),
            "users" => Command::Users,
            "groups" => Command::Groups,
            "help" | "-h" | "--help" => Command::Help,
            other => bail!("unknown command: {}\n\n{}", other, USAGE),
        };
        Ok(command)
    }

    /// Whether the command runs against the tenant API.
    pub fn is_tenant(&self) -> bool {
        matches!(
            self,
            Command::Buckets | Command::BucketUsage(_) | Command::Users | Command::Groups
        )
    }
}

/// One-line overall verdict for a health summary.
pub fn health_verdict(health: &Health) -> &'static str {
    if health.all_green() {
        "Healthy"
    } else if health.operative(MAX_UNAVAILABLE_NODES) {
        "Operational with issues"
    } else {
        "Critical issues"
    }
}

pub async fn health_report(service: &dyn HealthService) -> Result<String> {
    let health = service.get().await?;
    let mut out = String::new();

    writeln!(out, "Grid health: {}", health_verdict(&health))?;
    writeln!(out, "  All systems green: {}", health.all_green())?;
    writeln!(out, "  Operationally ready: {}", health.operative(MAX_UNAVAILABLE_NODES))?;

    if let Some(ref nodes) = health.nodes {
        writeln!(out, "Nodes:")?;
        writeln!(out, "  Connected: {}", format_optional(nodes.connected, "-"))?;
        writeln!(out, "  Administratively down: {}", format_optional(nodes.administratively_down, "-"))?;
        writeln!(out, "  Unknown: {}", format_optional(nodes.unknown, "-"))?;
    }
    if let Some(ref alerts) = health.alerts {
        writeln!(out, "Alerts:")?;
        writeln!(out, "  Critical: {}", format_optional(alerts.critical, "-"))?;
        writeln!(out, "  Major: {}", format_optional(alerts.major, "-"))?;
        writeln!(out, "  Minor: {}", format_optional(alerts.minor, "-"))?;
    }
    if let Some(ref alarms) = health.alarms {
        writeln!(out, "Alarms (legacy):")?;
        writeln!(out, "  Critical: {}", format_optional(alarms.critical, "-"))?;
        writeln!(out, "  Major: {}", format_optional(alarms.major, "-"))?;
        writeln!(out, "  Minor: {}", format_optional(alarms.minor, "-"))?;
        writeln!(out, "  Notice: {}", format_optional(alarms.notice, "-"))?;
    }

    Ok(out)
}

pub async fn tenants_report(service: &dyn TenantService) -> Result<String> {
    let tenants = service.list().await?;
    let mut out = String::new();

    if tenants.is_empty() {
        writeln!(out, "No tenants found")?;
        return Ok(out);
    }
    writeln!(out, "{} tenant(s):", tenants.len())?;
    for tenant in &tenants {
        writeln!(
            out,
            "  {:<24} {:<20} [{}]",
            tenant.display_name(),
            tenant.id,
            tenant.capabilities.join(", ")
        )?;
    }
    Ok(out)
}

fn write_usage(out: &mut String, usage: &TenantUsage) -> std::fmt::Result {
    writeln!(out, "  Objects: {}", format_count(usage.object_count.unwrap_or(0)))?;
    writeln!(out, "  Data: {}", format_bytes(usage.data_bytes.unwrap_or(0)))?;
    if let Some(calculated) = usage.calculation_time {
        writeln!(out, "  Calculated: {}", calculated.format("%Y-%m-%d %H:%M:%S UTC"))?;
    }
    for bucket in &usage.buckets {
        writeln!(
            out,
            "    {:<32} {:>14} objects {:>12}",
            bucket.name.as_deref().unwrap_or("?"),
            format_count(bucket.object_count.unwrap_or(0)),
            format_bytes(bucket.data_bytes.unwrap_or(0))
        )?;
    }
    Ok(())
}

pub async fn tenant_usage_report(service: &dyn TenantService, id: &str) -> Result<String> {
    let usage = service.get_usage(id).await?;
    let mut out = String::new();
    writeln!(out, "Usage for tenant {}:", id)?;
    write_usage(&mut out, &usage)?;
    Ok(out)
}

pub async fn regions_report(service: &dyn RegionService) -> Result<String> {
    let regions = service.list().await?;
    let mut out = String::new();
    for region in regions {
        writeln!(out, "{}", region)?;
    }
    Ok(out)
}

pub async fn buckets_report(service: &dyn BucketService) -> Result<String> {
    let buckets = service.list().await?;
    let mut out = String::new();

    if buckets.is_empty() {
        writeln!(out, "No buckets found")?;
        return Ok(out);
    }
    writeln!(out, "{} bucket(s):", buckets.len())?;
    for bucket in &buckets {
        writeln!(out, "  {}", bucket.name)?;
        writeln!(out, "    Region: {}", format_optional(bucket.region.as_deref(), "-"))?;
        if let Some(created) = bucket.creation_time {
            writeln!(out, "    Created: {}", created.format("%Y-%m-%d %H:%M:%S"))?;
        }
        if let Some(versioning) = bucket.enable_versioning {
            writeln!(out, "    Versioning: {}", versioning)?;
        }
        if bucket.object_lock_enabled() {
            writeln!(out, "    Object Lock: true")?;
        }
    }
    Ok(out)
}

fn write_bucket_stats(out: &mut String, stats: &BucketStats) -> std::fmt::Result {
    writeln!(out, "  Objects: {}", format_count(stats.object_count.unwrap_or(0)))?;
    writeln!(out, "  Data: {}", format_bytes(stats.data_bytes.unwrap_or(0)))?;
    if let Some(ref region) = stats.region {
        writeln!(out, "  Region: {}", region)?;
    }
    if let Some(versioning) = stats.versioning_enabled {
        writeln!(out, "  Versioning: {}", versioning)?;
    }
    if let Some(ref encryption) = stats.encryption {
        writeln!(out, "  Encryption: {}", encryption)?;
    }
    Ok(())
}

pub async fn bucket_usage_report(service: &dyn BucketService, name: &str) -> Result<String> {
    let stats = service.get_usage(name).await?;
    let mut out = String::new();
    writeln!(out, "Usage for bucket {}:", name)?;
    write_bucket_stats(&mut out, &stats)?;
    Ok(out)
}

pub async fn users_report(service: &dyn UserService) -> Result<String> {
    let users = service.list().await?;
    let mut out = String::new();
    for user in &users {
        let status = if user.disable.unwrap_or(false) { " (disabled)" } else { "" };
        writeln!(
            out,
            "{:<24} {}{}",
            user.short_name(),
            format_optional(user.full_name.as_deref(), ""),
            status
        )?;
    }
    Ok(out)
}

pub async fn groups_report(service: &dyn GroupService) -> Result<String> {
    let groups = service.list().await?;
    let mut out = String::new();
    for group in &groups {
        let access = match group.management_read_only {
            Some(true) => "read-only",
            _ => "read-write",
        };
        writeln!(
            out,
            "{:<32} {:<24} {}",
            group.unique_name,
            format_optional(group.display_name.as_deref(), ""),
            access
        )?;
    }
    Ok(out)
}
